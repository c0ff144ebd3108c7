//! Telemetry module
//!
//! Structured logging and metrics recording

mod logging;
mod metrics;

pub use self::logging::{init_logging, LogFormat};
pub use self::metrics::{increment_counter, record_latency, CounterMetric, LatencyMetric};

use crate::config::TelemetryConfig;

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    init_logging(&config.log_level, config.log_format)?;
    Ok(())
}
