mod provider;
mod session;
mod units;

pub use provider::{DemoProvider, ProviderError, WALLET_ENV_VAR, WalletProvider, discover};
pub use session::{
    BalanceDisplay, ConnectFailure, ConnectOutcome, ConnectedWallet, WalletSession, establish,
};
pub use units::format_base_units;
