//! CLI interface for ticker-scout
//!
//! Provides subcommands for:
//! - `price`: Fetch current price and percent changes for symbols
//! - `exchanges`: List supported exchanges
//! - `config`: Show effective configuration

mod price;

pub use price::{format_price, PriceArgs};

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ticker-scout")]
#[command(about = "Spot price and short-term change lookup for cryptocurrency exchanges")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch prices for one or more symbols
    Price(PriceArgs),
    /// List supported exchanges
    Exchanges,
    /// Show configuration
    Config,
}
