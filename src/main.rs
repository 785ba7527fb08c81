use anyhow::Result;
use car_insurance::config::{Config, load_from_env};
use car_insurance::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = load_from_env()?;
    init_tracing(&config)?;
    config.print_summary();

    server::run(config).await
}

/// Installs the global subscriber, JSON or human-readable per `LOG_FORMAT`.
fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}
