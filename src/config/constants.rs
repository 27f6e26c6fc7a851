//! Timing and token display constants.

/// Delay before a simulated transaction flips from Pending to Confirmed.
pub const CONFIRM_DELAY_MS: i64 = 2_000;

/// How long the "Copied" acknowledgment stays visible after copying an address.
pub const COPY_ACK_MS: i64 = 1_500;

/// Display symbol of the native token.
pub const TOKEN_SYMBOL: &str = "ETH";

/// Base units per whole token: 18 decimals, wei-style.
pub const TOKEN_DECIMALS: u32 = 18;
