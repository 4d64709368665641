//! Lectern: a server-rendered blog and marketing site.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from a TOML file, builds the shared content API client,
//! sets up the Axum router with all routes, and starts the HTTP server with
//! graceful shutdown on SIGINT/SIGTERM.

use std::net::SocketAddr;
use std::path::Path;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lectern::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use lectern::content::ContentClient;
use lectern::routes::create_router;
use lectern::state::AppState;
use lectern::templates::init_templates;

/// Lectern: a blog and marketing site server
#[derive(Parser, Debug)]
#[command(name = "lectern", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "lectern=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log output format: "text" or "json"
    #[arg(long)]
    log_format: Option<String>,

    /// Override the listen port from the config file
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration. A missing file at the default path falls back to
    // built-in defaults; an explicit --config path must exist.
    let config_path = Path::new(&args.config);
    let (mut config, config_defaulted) =
        if args.config == DEFAULT_CONFIG_PATH && !config_path.exists() {
            (AppConfig::default(), true)
        } else {
            (AppConfig::load(config_path)?, false)
        };

    if let Some(port) = args.port {
        config.http.port = port;
    }

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let log_format = args
        .log_format
        .unwrap_or_else(|| config.logging.format.clone());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match log_format.as_str() {
        "json" => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        _ => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    if config_defaulted {
        tracing::warn!(path = %args.config, "Config file not found, using built-in defaults");
    } else {
        tracing::info!(path = %args.config, "Loaded configuration");
    }

    tracing::info!(
        base_url = %config.content.base_url,
        has_token = config.content.bearer_token.is_some(),
        timeout_s = config.content.request_timeout_seconds,
        "Content API configured"
    );

    // Initialize Tera templates
    let tera = init_templates()?;
    tracing::info!("Initialized templates");

    // Build the shared HTTP client for the content API
    let content = ContentClient::new(&config.content)?;

    // Create application state
    let state = AppState::new(config.clone(), tera, content);

    // Create router
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port)
        .parse()
        .expect("Invalid http.host or http.port in config");
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when SIGINT or SIGTERM arrives, letting in-flight requests drain.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
