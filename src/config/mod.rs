//! Configuration module for the ModelChain application.

// Can all be private now because we have a public re-export.
mod catalog;
mod debug;
mod persistence;

// Public
pub mod constants;

// Re-export commonly used items
pub use catalog::{CATALOG, CatalogConfig, ModelListing, RevenueBar, find_model};
pub use constants::{CONFIRM_DELAY_MS, COPY_ACK_MS, TOKEN_DECIMALS, TOKEN_SYMBOL};
pub use debug::DF;
pub use persistence::PERSISTENCE;
