//! data-server entry point.
//!
//! Initializes tracing, loads configuration from TOML with CLI/environment
//! overrides, sets up the Axum router and starts the HTTP server.

use clap::Parser;

use data_server::config::AppConfig;
use data_server::http::start_server;
use data_server::routes::{create_router, DATA_PATH};
use data_server::telemetry::{init_tracing, resolve_log_filter};

/// data-server: serves a fixed payload over HTTP
#[derive(Parser, Debug)]
#[command(name = "data-server", version, about)]
struct Args {
    /// Path to configuration file (defaults to config/default.toml if present)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "data_server=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Listen host, overrides http.host
    #[arg(long, env = "DATA_SERVER_HOST")]
    host: Option<String>,

    /// Listen port, overrides http.port
    #[arg(short, long, env = "DATA_SERVER_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Config is loaded before tracing so its [logging] section applies
    let mut config = AppConfig::load_or_default(args.config.as_deref())?;
    config.apply_overrides(args.host, args.port)?;

    let log_filter = resolve_log_filter(
        args.log_level,
        std::env::var("RUST_LOG").ok(),
        &config.logging,
    );
    init_tracing(&log_filter, config.logging.format);

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        format = ?config.logging.format,
        "Loaded configuration"
    );

    let app = create_router();
    tracing::info!(
        "Serving GET {} at http://{}:{}",
        DATA_PATH,
        config.http.host,
        config.http.port
    );

    start_server(app, &config).await?;

    tracing::info!("Server stopped");
    Ok(())
}
