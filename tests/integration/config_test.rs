//! Config example loading

use ticker_scout::config::Config;
use ticker_scout::telemetry::LogFormat;

#[test]
fn test_config_example_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml.example");
    let config = Config::load(path).unwrap();
    assert_eq!(config.http.timeout_secs, 10);
    assert_eq!(config.telemetry.log_format, LogFormat::Pretty);
    assert!(config.exchanges.is_empty());
}
