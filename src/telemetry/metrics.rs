//! Metrics recorded through the `metrics` facade
//!
//! Nothing is exported unless the host process installs a recorder.

use std::time::Duration;

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// Round trip of a single public API request
    HttpRequest,
    /// Full symbol price aggregation
    SymbolPrice,
}

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// 1h kline lookups that failed and were downgraded
    KlineLookupFailures,
    /// Symbol lookups that found no market
    SymbolNotFound,
}

impl LatencyMetric {
    fn name(self) -> &'static str {
        match self {
            LatencyMetric::HttpRequest => "exchange_request_latency_ms",
            LatencyMetric::SymbolPrice => "exchange_symbol_price_latency_ms",
        }
    }
}

impl CounterMetric {
    fn name(self) -> &'static str {
        match self {
            CounterMetric::KlineLookupFailures => "exchange_kline_lookup_failures_total",
            CounterMetric::SymbolNotFound => "exchange_symbol_not_found_total",
        }
    }
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    let value_ms = duration.as_secs_f64() * 1000.0;
    metrics::histogram!(metric.name()).record(value_ms);
}

/// Increment a counter labelled with the exchange name
pub fn increment_counter(metric: CounterMetric, exchange: &str) {
    metrics::counter!(metric.name(), "exchange" => exchange.to_string()).increment(1);
}
