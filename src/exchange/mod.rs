//! Exchange clients
//!
//! A uniform contract for querying spot prices from exchange public APIs,
//! the registry that resolves implementations by name, and the bundled
//! implementations.

mod base;
mod decode;
mod error;
mod price;
mod registry;
mod types;

pub mod poloniex;

pub use base::ExchangeBase;
pub use decode::decode;
pub use error::{BoxError, ExchangeError, Result};
pub use poloniex::PoloniexClient;
pub use price::{fraction_to_percent, percent_change};
pub use registry::{ExchangeFactory, ExchangeRegistry};
pub use types::{Credentials, Kline, SymbolPrice, Ticker};

use async_trait::async_trait;

/// Trait implemented by every exchange client
#[async_trait]
pub trait ExchangeClient: Send + Sync {
    /// Exchange name, also used as the `source` of returned prices
    fn name(&self) -> &str;

    /// Current price and derived percent changes for `symbol`
    async fn get_symbol_price(&self, symbol: &str) -> Result<SymbolPrice>;
}
