//! Poloniex public API client
//!
//! Uses `returnTicker` for the current price and 24h change, and
//! `returnChartData` for the open one hour ago.
//! See <https://docs.legacy.poloniex.com/#public-http-api-methods>.

use super::registry::ExchangeRegistry;
use super::{
    Credentials, ExchangeBase, ExchangeClient, ExchangeError, Kline, Result, SymbolPrice, Ticker,
};
use crate::http::HttpRequester;
use crate::telemetry::{increment_counter, record_latency, CounterMetric, LatencyMetric};
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

/// Poloniex API base URL
pub const POLONIEX_API_URL: &str = "https://poloniex.com/";

/// Smallest candle width Poloniex serves, in seconds
pub const KLINE_PERIOD_SECS: u32 = 300;

/// Width of the historical window requested after the start time
const KLINE_WINDOW_MINUTES: i64 = 30;

const NAME: &str = "Poloniex";
const PUBLIC_PATH: &str = "public";

/// Register the Poloniex client
pub fn register(registry: &mut ExchangeRegistry) {
    registry.register(NAME, |http, credentials| {
        Arc::new(PoloniexClient::new(http, credentials)) as Arc<dyn ExchangeClient>
    });
}

/// Client for the Poloniex public market-data API
#[derive(Debug, Clone)]
pub struct PoloniexClient {
    base: ExchangeBase,
}

impl PoloniexClient {
    /// Create a client against the production API
    pub fn new(http: Arc<dyn HttpRequester>, credentials: Option<Credentials>) -> Self {
        Self::with_base_url(POLONIEX_API_URL, http, credentials)
    }

    /// Create a client against a custom endpoint
    pub fn with_base_url(
        base_url: impl Into<String>,
        http: Arc<dyn HttpRequester>,
        credentials: Option<Credentials>,
    ) -> Self {
        Self {
            base: ExchangeBase::new(base_url, http, credentials),
        }
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.base.credentials()
    }

    /// Fetch the ticker entry for `symbol`, ignoring case
    pub async fn ticker(&self, symbol: &str) -> Result<Ticker> {
        let tickers: HashMap<String, Ticker> = self
            .base
            .get_json(PUBLIC_PATH, &[("command", "returnTicker".to_string())])
            .await?;

        lookup_symbol(symbol, tickers).ok_or_else(|| {
            increment_counter(CounterMetric::SymbolNotFound, NAME);
            ExchangeError::SymbolNotFound {
                exchange: NAME.to_string(),
                symbol: symbol.to_string(),
            }
        })
    }

    /// Open price of the first candle at or after `start`.
    ///
    /// Requests a 30 minute window of `period_secs` wide candles so at least
    /// one candle exists even for thin markets.
    pub async fn kline_open_price(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        period_secs: u32,
    ) -> Result<Decimal> {
        let end = start + Duration::minutes(KLINE_WINDOW_MINUTES);
        let query = [
            ("command", "returnChartData".to_string()),
            ("currencyPair", symbol.to_uppercase()),
            ("start", start.timestamp().to_string()),
            ("end", end.timestamp().to_string()),
            ("period", period_secs.to_string()),
        ];

        let klines: Vec<Kline> = self.base.get_json(PUBLIC_PATH, &query).await?;
        let first = klines.into_iter().next().ok_or_else(|| ExchangeError::NoData {
            symbol: symbol.to_string(),
        })?;

        tracing::debug!(
            exchange = NAME,
            symbol,
            requested = %start,
            candle = ?Utc.timestamp_opt(first.date, 0).single(),
            open = %first.open,
            "Using kline open price"
        );

        Ok(first.open)
    }
}

/// Find the ticker whose market name matches `symbol` case-insensitively
fn lookup_symbol(symbol: &str, tickers: HashMap<String, Ticker>) -> Option<Ticker> {
    let wanted = symbol.to_uppercase();
    tickers
        .into_iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(&wanted))
        .map(|(_, ticker)| ticker)
}

#[async_trait]
impl ExchangeClient for PoloniexClient {
    fn name(&self) -> &str {
        NAME
    }

    async fn get_symbol_price(&self, symbol: &str) -> Result<SymbolPrice> {
        let started = Instant::now();
        let one_hour_ago = Utc::now() - Duration::hours(1);

        // A ticker failure returns at once and drops the pending kline request
        let (ticker, open_1h_ago) = tokio::try_join!(self.ticker(symbol), async {
            Ok::<_, ExchangeError>(
                self.kline_open_price(symbol, one_hour_ago, KLINE_PERIOD_SECS)
                    .await,
            )
        })?;

        let open_1h_ago = match open_1h_ago {
            Ok(open) => Some(open),
            Err(e) => {
                tracing::warn!(
                    exchange = NAME,
                    symbol,
                    error = %e,
                    "Failed to get price 1 hour ago"
                );
                increment_counter(CounterMetric::KlineLookupFailures, NAME);
                None
            }
        };

        let price = SymbolPrice::from_ticker(symbol, NAME, &ticker, open_1h_ago);
        record_latency(LatencyMetric::SymbolPrice, started.elapsed());

        Ok(price)
    }
}
