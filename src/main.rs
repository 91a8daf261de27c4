//! Responder: a fixed-response JSON HTTP service.
//!
//! This is the application entry point. It parses command line arguments,
//! loads configuration from a TOML file when one is given, initializes
//! tracing, reports the API generation on stdout, sets up the Axum router,
//! and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use responder::config::{AppConfig, API_GENERATION, DEFAULT_LOG_FILTER};
use responder::http::start_server;
use responder::routes::create_router;

/// Responder: a fixed-response JSON HTTP service
#[derive(Parser, Debug)]
#[command(name = "responder", version, about)]
struct Args {
    /// Path to configuration file (built-in defaults are used when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "responder=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration; without a --config flag the built-in defaults apply
    // and no file is touched
    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    // Initialize tracing with priority: CLI > env > default. Logs go to
    // stderr: stdout is reserved for the API generation line below.
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match config.logging.format.as_str() {
        "json" => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }

    tracing::info!("Loaded configuration");

    // Single line on stdout, emitted before the listener starts accepting.
    // Wrapper scripts parse it to learn the payload revision being served.
    println!("{}", API_GENERATION);

    // Create router
    let app = create_router();

    // Start server
    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        "Starting server"
    );
    start_server(app, &config).await?;

    Ok(())
}
