use std::sync::Arc;

use anyhow::{Context as _, Result};
use async_trait::async_trait;
use thiserror::Error;

use crate::Cli;
use crate::config::DF;

/// Env var holding a demo wallet as `address:balance_base_units`.
pub const WALLET_ENV_VAR: &str = "MODELCHAIN_WALLET";

/// Failure modes at the wallet provider boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// No wallet capability is present in the environment.
    #[error("no wallet provider available")]
    Unavailable,
    /// The user declined the account-access request.
    #[error("account access denied")]
    Denied,
    /// The provider answered but the call itself failed.
    #[error("provider call failed: {0}")]
    Rpc(String),
}

/// Abstract interface over an externally supplied wallet capability.
///
/// The application treats this as opaque: it can authorize account access and
/// report a native-token balance in base units, nothing more.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Request account authorization; returns the authorized addresses.
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError>;

    /// Native-token balance of an address, in base units.
    async fn balance_of(&self, address: &str) -> Result<u128, ProviderError>;
}

/// Built-in provider for demo runs: a single pre-authorized account with a
/// fixed balance. Stands in for the browser-injected wallet extension.
pub struct DemoProvider {
    address: String,
    balance: u128,
}

impl DemoProvider {
    pub fn new(address: impl Into<String>, balance: u128) -> Self {
        Self {
            address: address.into(),
            balance,
        }
    }

    /// The account used when `--demo` is passed without any configuration.
    pub fn builtin() -> Self {
        Self::new("0x9aF3c2D11bE04F5a8B7C6d21aa30E94fD5C08821", 1_250_000_000_000_000_000)
    }

    /// Read a demo wallet from `MODELCHAIN_WALLET`. Absence of the variable is
    /// the normal disconnected path; a malformed value is an error.
    pub fn from_env() -> Result<Option<Self>> {
        let Ok(raw) = std::env::var(WALLET_ENV_VAR) else {
            return Ok(None);
        };
        let (address, balance) = raw
            .split_once(':')
            .with_context(|| format!("{WALLET_ENV_VAR} must be address:balance_base_units"))?;
        let balance: u128 = balance
            .parse()
            .with_context(|| format!("bad balance in {WALLET_ENV_VAR}: {balance:?}"))?;
        Ok(Some(Self::new(address, balance)))
    }
}

#[async_trait]
impl WalletProvider for DemoProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
        Ok(vec![self.address.clone()])
    }

    async fn balance_of(&self, address: &str) -> Result<u128, ProviderError> {
        if address == self.address {
            Ok(self.balance)
        } else {
            Err(ProviderError::Rpc(format!("unknown account {address}")))
        }
    }
}

/// Locate a wallet capability for this run. `None` means no provider is
/// present, which the session treats as a normal outcome, not an error.
pub fn discover(cli: &Cli) -> Option<Arc<dyn WalletProvider>> {
    match DemoProvider::from_env() {
        Ok(Some(provider)) => {
            if DF.log_wallet_events {
                log::info!("wallet provider: {}", WALLET_ENV_VAR);
            }
            return Some(Arc::new(provider));
        }
        Ok(None) => {}
        Err(err) => {
            log::warn!("ignoring malformed {}: {:#}", WALLET_ENV_VAR, err);
        }
    }

    if cli.demo {
        if DF.log_wallet_events {
            log::info!("wallet provider: built-in demo account");
        }
        return Some(Arc::new(DemoProvider::builtin()));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn demo_provider_answers_its_own_account() {
        let provider = DemoProvider::new("0xABC", 1_500_000_000_000_000_000);
        let accounts = provider.request_accounts().await.unwrap();
        assert_eq!(accounts, vec!["0xABC".to_string()]);
        assert_eq!(provider.balance_of("0xABC").await.unwrap(), 1_500_000_000_000_000_000);
        assert!(matches!(
            provider.balance_of("0xDEF").await,
            Err(ProviderError::Rpc(_))
        ));
    }

    #[test]
    fn discover_without_config_or_demo_flag_is_none() {
        // Relies on MODELCHAIN_WALLET not being set in the test environment.
        let cli = Cli { demo: false };
        assert!(discover(&cli).is_none());

        let cli = Cli { demo: true };
        assert!(discover(&cli).is_some());
    }
}
