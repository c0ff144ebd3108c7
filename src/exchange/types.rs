//! Exchange data types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized price record returned by every exchange client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolPrice {
    /// Market identifier exactly as the caller passed it
    pub symbol: String,
    /// Last traded price, serialized as exact decimal text
    pub price: Decimal,
    /// When this record was assembled (not the exchange's trade time)
    pub updated_at: DateTime<Utc>,
    /// Exchange name
    pub source: String,
    /// Percent change against the open one hour ago, `None` when unavailable
    pub percent_change_1h: Option<f64>,
    /// Percent change over 24 hours as reported by the ticker
    pub percent_change_24h: f64,
}

/// Current ticker entry for one market
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker {
    /// Last traded price
    pub last: Decimal,
    /// 24h change as a fraction (0.05 = 5%)
    pub percent_change: Decimal,
}

/// Historical candle, only the open is used
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Kline {
    /// Bucket start, unix seconds
    pub date: i64,
    /// Opening price of the bucket
    pub open: Decimal,
}

/// API keys handed to clients at construction
///
/// Unused by public endpoints.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
}

impl Credentials {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"***")
            .finish()
    }
}
