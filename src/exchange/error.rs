//! Exchange client errors

use thiserror::Error;

/// Boxed error used to carry transport failures from any requester backend
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias for exchange operations
pub type Result<T> = std::result::Result<T, ExchangeError>;

/// Errors surfaced by exchange clients and the registry
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// Network or HTTP layer failure
    #[error("Transport error: {0}")]
    Transport(#[source] BoxError),
    /// Exchange answered with an explicit error payload
    #[error("Exchange returned error: {0}")]
    Remote(String),
    /// Body did not match the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    /// Requested market does not exist on the exchange
    #[error("Symbol {symbol} not found on {exchange}")]
    SymbolNotFound { exchange: String, symbol: String },
    /// Historical window contained no candles
    #[error("No historical data for {symbol}")]
    NoData { symbol: String },
    /// No factory registered under this name
    #[error("Unknown exchange: {0}")]
    UnknownExchange(String),
}

impl ExchangeError {
    /// Build a transport error from anything that converts into a boxed error
    pub fn transport(err: impl Into<BoxError>) -> Self {
        Self::Transport(err.into())
    }
}

impl From<reqwest::Error> for ExchangeError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}
