use std::mem;
use std::sync::Arc;

use poll_promise::Promise;

use crate::config::{COPY_ACK_MS, DF, TOKEN_DECIMALS};
use crate::tx::Clock;
use crate::wallet::{ProviderError, WalletProvider, format_base_units};

/// What a provider exchange resolved to.
#[derive(Debug)]
pub enum ConnectOutcome {
    /// No authorized account: the provider refused, the user declined, or the
    /// account list came back empty. All of these degrade to Disconnected.
    NoAccount,
    /// An account was authorized. The balance lookup may still have failed;
    /// that must not cost us the connection.
    Account {
        address: String,
        balance: Result<u128, ProviderError>,
    },
}

/// One full provider exchange: account authorization, then balance lookup for
/// the first authorized address.
pub async fn establish(provider: &dyn WalletProvider) -> ConnectOutcome {
    let accounts = match provider.request_accounts().await {
        Ok(accounts) => accounts,
        Err(err) => {
            if DF.log_wallet_events {
                log::info!("wallet connect refused: {err}");
            }
            return ConnectOutcome::NoAccount;
        }
    };
    let Some(address) = accounts.into_iter().next() else {
        return ConnectOutcome::NoAccount;
    };
    let balance = provider.balance_of(&address).await;
    ConnectOutcome::Account { address, balance }
}

/// Balance as shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BalanceDisplay {
    /// Decimal token amount, base units already converted.
    Amount(String),
    /// The balance lookup failed; the session stays connected regardless.
    Unavailable,
}

/// Why the last connect attempt ended without a connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectFailure {
    NoProvider,
    NoAccount,
}

#[derive(Clone, Debug)]
pub struct ConnectedWallet {
    pub address: String,
    pub balance: BalanceDisplay,
    pub connected_at_ms: i64,
}

enum Phase {
    Disconnected,
    Connecting(Promise<ConnectOutcome>),
    Connected(ConnectedWallet),
}

/// The wallet session controller.
///
/// Owns the only stateful flow in the application: obtaining an address and
/// balance from the external provider and exposing connect / disconnect /
/// copy-address to the screens. Session state never persists across runs.
pub struct WalletSession {
    provider: Option<Arc<dyn WalletProvider>>,
    phase: Phase,
    copied_at_ms: Option<i64>,
    last_failure: Option<ConnectFailure>,
}

impl Default for WalletSession {
    fn default() -> Self {
        Self::new(None)
    }
}

impl WalletSession {
    pub fn new(provider: Option<Arc<dyn WalletProvider>>) -> Self {
        Self {
            provider,
            phase: Phase::Disconnected,
            copied_at_ms: None,
            last_failure: None,
        }
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.phase, Phase::Connected(_))
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self.phase, Phase::Connecting(_))
    }

    pub fn connected(&self) -> Option<&ConnectedWallet> {
        match &self.phase {
            Phase::Connected(wallet) => Some(wallet),
            _ => None,
        }
    }

    pub fn address(&self) -> Option<&str> {
        self.connected().map(|w| w.address.as_str())
    }

    pub fn last_failure(&self) -> Option<ConnectFailure> {
        self.last_failure
    }

    /// Begin a provider exchange. Idempotent: connecting while already
    /// Connected (or while an exchange is in flight) is a no-op.
    pub fn connect(&mut self) {
        match self.phase {
            Phase::Connected(_) | Phase::Connecting(_) => return,
            Phase::Disconnected => {}
        }
        let Some(provider) = self.provider.clone() else {
            // Provider absence is a normal outcome, not an exception.
            self.last_failure = Some(ConnectFailure::NoProvider);
            if DF.log_wallet_events {
                log::info!("connect requested but no wallet provider present");
            }
            return;
        };
        self.phase = Phase::Connecting(spawn_establish(provider));
    }

    /// Clear address and balance locally. The provider-side authorization is
    /// deliberately left alone.
    pub fn disconnect(&mut self) {
        if DF.log_wallet_events && self.is_connected() {
            log::info!("wallet disconnected");
        }
        self.phase = Phase::Disconnected;
        self.copied_at_ms = None;
    }

    /// Hand out the address for a clipboard write and arm the transient
    /// "copied" acknowledgment. Returns `None` when disconnected, in which
    /// case nothing must be written.
    pub fn copy_address(&mut self, clock: &dyn Clock) -> Option<String> {
        let address = self.connected().map(|w| w.address.clone())?;
        self.copied_at_ms = Some(clock.now_ms());
        Some(address)
    }

    /// Whether the "Copied" acknowledgment is currently showing.
    pub fn copy_acknowledged(&self) -> bool {
        self.copied_at_ms.is_some()
    }

    /// Drive the session: settle a finished provider exchange and revert the
    /// copy acknowledgment once its hold time is up. Called every frame.
    pub fn poll(&mut self, clock: &dyn Clock) {
        if matches!(self.phase, Phase::Connecting(_)) {
            let phase = mem::replace(&mut self.phase, Phase::Disconnected);
            if let Phase::Connecting(promise) = phase {
                match promise.try_take() {
                    Ok(outcome) => self.apply(outcome, clock),
                    Err(promise) => self.phase = Phase::Connecting(promise),
                }
            }
        }

        if let Some(copied_at) = self.copied_at_ms {
            if clock.now_ms() - copied_at >= COPY_ACK_MS {
                self.copied_at_ms = None;
            }
        }
    }

    fn apply(&mut self, outcome: ConnectOutcome, clock: &dyn Clock) {
        match outcome {
            ConnectOutcome::NoAccount => {
                self.phase = Phase::Disconnected;
                self.last_failure = Some(ConnectFailure::NoAccount);
            }
            ConnectOutcome::Account { address, balance } => {
                let balance = match balance {
                    Ok(base_units) => {
                        BalanceDisplay::Amount(format_base_units(base_units, TOKEN_DECIMALS))
                    }
                    Err(err) => {
                        log::warn!("balance fetch failed for {address}: {err}");
                        BalanceDisplay::Unavailable
                    }
                };
                if DF.log_wallet_events {
                    log::info!("wallet connected: {address}");
                }
                self.phase = Phase::Connected(ConnectedWallet {
                    address,
                    balance,
                    connected_at_ms: clock.now_ms(),
                });
                self.last_failure = None;
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_establish(provider: Arc<dyn WalletProvider>) -> Promise<ConnectOutcome> {
    Promise::spawn_thread("wallet-connect", move || {
        let rt = tokio::runtime::Runtime::new().expect("Failed to create runtime");
        rt.block_on(establish(provider.as_ref()))
    })
}

#[cfg(target_arch = "wasm32")]
fn spawn_establish(provider: Arc<dyn WalletProvider>) -> Promise<ConnectOutcome> {
    Promise::spawn_local(async move { establish(provider.as_ref()).await })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::COPY_ACK_MS;
    use crate::tx::ManualClock;
    use async_trait::async_trait;

    struct MockProvider {
        accounts: Result<Vec<String>, ProviderError>,
        balance: Result<u128, ProviderError>,
    }

    impl MockProvider {
        fn happy(address: &str, balance: u128) -> Self {
            Self {
                accounts: Ok(vec![address.to_string()]),
                balance: Ok(balance),
            }
        }
    }

    #[async_trait]
    impl WalletProvider for MockProvider {
        async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
            self.accounts.clone()
        }

        async fn balance_of(&self, _address: &str) -> Result<u128, ProviderError> {
            self.balance.clone()
        }
    }

    fn settled(outcome: ConnectOutcome) -> WalletSession {
        let clock = ManualClock::new(0);
        let mut session = WalletSession::new(None);
        session.apply(outcome, &clock);
        session
    }

    #[tokio::test]
    async fn establish_yields_address_and_base_unit_balance() {
        let provider = MockProvider::happy("0xABC", 1_500_000_000_000_000_000);
        let outcome = establish(&provider).await;
        let session = settled(outcome);
        assert_eq!(session.address(), Some("0xABC"));
        assert_eq!(
            session.connected().unwrap().balance,
            BalanceDisplay::Amount("1.5".to_string())
        );
    }

    #[tokio::test]
    async fn denied_authorization_degrades_to_disconnected() {
        let provider = MockProvider {
            accounts: Err(ProviderError::Denied),
            balance: Ok(0),
        };
        let session = settled(establish(&provider).await);
        assert!(!session.is_connected());
        assert_eq!(session.last_failure(), Some(ConnectFailure::NoAccount));
    }

    #[tokio::test]
    async fn empty_account_list_degrades_to_disconnected() {
        let provider = MockProvider {
            accounts: Ok(vec![]),
            balance: Ok(0),
        };
        let session = settled(establish(&provider).await);
        assert!(!session.is_connected());
    }

    #[tokio::test]
    async fn balance_failure_keeps_the_address_connected() {
        let provider = MockProvider {
            accounts: Ok(vec!["0xABC".to_string()]),
            balance: Err(ProviderError::Rpc("node down".to_string())),
        };
        let session = settled(establish(&provider).await);
        assert_eq!(session.address(), Some("0xABC"));
        assert_eq!(
            session.connected().unwrap().balance,
            BalanceDisplay::Unavailable
        );
    }

    #[test]
    fn connect_without_provider_yields_empty_session() {
        let mut session = WalletSession::new(None);
        session.connect();
        assert!(!session.is_connected());
        assert!(!session.is_connecting());
        assert_eq!(session.last_failure(), Some(ConnectFailure::NoProvider));
    }

    #[test]
    fn connect_while_connected_is_a_noop() {
        let mut session = settled(ConnectOutcome::Account {
            address: "0xABC".to_string(),
            balance: Ok(1),
        });
        session.connect();
        assert!(session.is_connected());
        assert!(!session.is_connecting());
        assert_eq!(session.address(), Some("0xABC"));
    }

    #[test]
    fn disconnect_clears_address_and_balance() {
        let mut session = settled(ConnectOutcome::Account {
            address: "0xABC".to_string(),
            balance: Ok(1_500_000_000_000_000_000),
        });
        assert!(session.is_connected());
        session.disconnect();
        assert!(!session.is_connected());
        assert_eq!(session.address(), None);
        assert!(session.connected().is_none());
    }

    #[test]
    fn copy_address_is_a_noop_when_disconnected() {
        let clock = ManualClock::new(0);
        let mut session = WalletSession::new(None);
        assert_eq!(session.copy_address(&clock), None);
        assert!(!session.copy_acknowledged());
    }

    #[test]
    fn copy_acknowledgment_reverts_after_hold_time() {
        let clock = ManualClock::new(0);
        let mut session = settled(ConnectOutcome::Account {
            address: "0xABC".to_string(),
            balance: Ok(0),
        });

        assert_eq!(session.copy_address(&clock), Some("0xABC".to_string()));
        assert!(session.copy_acknowledged());

        clock.advance(COPY_ACK_MS - 1);
        session.poll(&clock);
        assert!(session.copy_acknowledged());

        clock.advance(1);
        session.poll(&clock);
        assert!(!session.copy_acknowledged());
    }
}
