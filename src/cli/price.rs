//! Price command implementation

use crate::config::Config;
use crate::exchange::{ExchangeClient, ExchangeRegistry, SymbolPrice};
use crate::http::HttpRequester;
use clap::Args;
use futures_util::future::join_all;
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Exchange name (see `exchanges`)
    pub exchange: String,

    /// Market symbols, e.g. BTC_USDT
    #[arg(required = true)]
    pub symbols: Vec<String>,

    /// Print one JSON object per line
    #[arg(long)]
    pub json: bool,
}

impl PriceArgs {
    pub async fn execute(
        &self,
        registry: &ExchangeRegistry,
        http: Arc<dyn HttpRequester>,
        config: &Config,
    ) -> anyhow::Result<()> {
        let client = registry.create(&self.exchange, http, config.credentials_for(&self.exchange))?;

        tracing::info!(
            exchange = client.name(),
            symbols = self.symbols.len(),
            "Fetching symbol prices"
        );

        let results = join_all(self.symbols.iter().map(|s| client.get_symbol_price(s))).await;

        let mut failures = 0usize;
        for (symbol, result) in self.symbols.iter().zip(results) {
            match result {
                Ok(price) if self.json => println!("{}", serde_json::to_string(&price)?),
                Ok(price) => println!("{}", format_price(&price)),
                Err(e) => {
                    failures += 1;
                    tracing::error!(symbol = %symbol, error = %e, "Price lookup failed");
                    eprintln!("{}: {}", symbol, e);
                }
            }
        }

        if failures > 0 {
            anyhow::bail!("{} of {} lookups failed", failures, self.symbols.len());
        }

        Ok(())
    }
}

/// Render a price as a single human-readable line
pub fn format_price(price: &SymbolPrice) -> String {
    let change_1h = price
        .percent_change_1h
        .map(|v| format!("{:+.2}%", v))
        .unwrap_or_else(|| "n/a".to_string());

    format!(
        "{} {} {} 1h: {} 24h: {:+.2}% ({})",
        price.source,
        price.symbol,
        price.price,
        change_1h,
        price.percent_change_24h,
        price.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
}
