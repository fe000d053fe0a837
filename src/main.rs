//! FixIt API entry point.
//!
//! Initializes tracing, loads configuration from TOML, loads the issue
//! document and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fixit_api::config::{data_path, AppConfig, DEFAULT_LOG_FILTER};

/// FixIt API: serves the issue knowledge base over HTTP
#[derive(Parser, Debug)]
#[command(name = "fixit-api", version, about)]
struct Args {
    /// Path to configuration file, relative to the working directory.
    /// Defaults to config/default.toml in the crate directory when present.
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "fixit_api=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = AppConfig::resolve(args.config.as_deref())?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(
        addr = %config.listen_addr(),
        format = %config.logging.format,
        "Loaded configuration"
    );

    fixit_api::run(config, &data_path()).await?;

    Ok(())
}
