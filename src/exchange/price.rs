//! Derived price metrics

use super::{SymbolPrice, Ticker};
use chrono::Utc;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const ONE_HUNDRED: Decimal = dec!(100);

/// Percent change from `reference` to `current`.
///
/// Returns `None` when `reference` is zero or the result does not fit a
/// finite `f64`.
pub fn percent_change(current: Decimal, reference: Decimal) -> Option<f64> {
    if reference.is_zero() {
        return None;
    }

    (current - reference)
        .checked_div(reference)?
        .checked_mul(ONE_HUNDRED)?
        .to_f64()
        .filter(|v| v.is_finite())
}

/// Convert a fractional change (0.05) to a percentage (5.0)
///
/// Falls back to `0.0` with a warning if the value overflows.
pub fn fraction_to_percent(fraction: Decimal) -> f64 {
    match fraction.checked_mul(ONE_HUNDRED).and_then(|v| v.to_f64()) {
        Some(percent) => percent,
        None => {
            tracing::warn!(%fraction, "24h change out of range, reporting 0");
            0.0
        }
    }
}

impl SymbolPrice {
    /// Combine a ticker with an optional historical open into a price record
    ///
    /// `updated_at` is stamped with the current time.
    pub fn from_ticker(
        symbol: impl Into<String>,
        source: impl Into<String>,
        ticker: &Ticker,
        open_1h_ago: Option<Decimal>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            price: ticker.last,
            updated_at: Utc::now(),
            source: source.into(),
            percent_change_1h: open_1h_ago.and_then(|open| percent_change(ticker.last, open)),
            percent_change_24h: fraction_to_percent(ticker.percent_change),
        }
    }
}
