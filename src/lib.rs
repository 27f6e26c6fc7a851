#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod tx;
pub mod ui;
pub mod utils;
pub mod wallet;

// Re-export commonly used types outside of crate
pub use app::App;
pub use wallet::{WalletProvider, WalletSession};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use the built-in demo wallet provider even when no wallet is configured
    #[arg(long, default_value_t = false)]
    pub demo: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
