//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log wallet session activity (connect attempts, outcomes, disconnects).
    pub log_wallet_events: bool,

    /// Log simulated transaction state changes (trigger, confirm).
    pub log_tx_events: bool,

    /// Log screen navigation.
    pub log_navigation: bool,
}

pub const DF: LogFlags = LogFlags {
    log_wallet_events: true,

    log_tx_events: false,
    log_navigation: false,
};
