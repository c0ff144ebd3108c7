use clap::Parser;
use std::sync::Arc;
use ticker_scout::cli::{Cli, Commands};
use ticker_scout::config::Config;
use ticker_scout::exchange::ExchangeRegistry;
use ticker_scout::http::{HttpRequester, ReqwestRequester};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    ticker_scout::telemetry::init_telemetry(&config.telemetry)?;

    let registry = ExchangeRegistry::with_builtin();

    match cli.command {
        Commands::Price(args) => {
            let http: Arc<dyn HttpRequester> =
                Arc::new(ReqwestRequester::with_config(&config.http.to_http_config())?);
            args.execute(&registry, http, &config).await?;
        }
        Commands::Exchanges => {
            for name in registry.names() {
                println!("{}", name);
            }
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  HTTP: timeout={}s, user-agent={}",
                config.http.timeout_secs, config.http.user_agent
            );
            println!(
                "  Logging: level={}, format={:?}",
                config.telemetry.log_level, config.telemetry.log_format
            );
            for (exchange, creds) in &config.exchanges {
                println!("  Credentials: {} access_key={} secret_key=***", exchange, creds.access_key);
            }
        }
    }

    Ok(())
}
