//! librank HTTP server entry point
//!
//! Starts the REST API server for the book search and ranking
//! service.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use clap::Parser;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use librank::core::config::Config;
use librank::core::services::Services;
use librank::http::{self, middleware as http_middleware};

/// Book search and relevance ranking service
#[derive(Debug, Parser)]
#[command(name = "librank", version, about)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "LIBRANK_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen host
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the data repository directory
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "librank=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting librank service");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    // Load configuration and apply CLI overrides
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(data_dir) = args.data_dir {
        config.catalog.data_dir = data_dir;
    }
    config.validate()?;
    config.log_config();

    // Create shared services
    let services = Arc::new(Services::new(config.clone()));

    // Build the API router
    let app = Router::new()
        .route("/health", get(http::health_handler))
        .route("/status", get(http::status_handler))
        .route("/search", get(http::search_handler))
        .route("/search/ranked", get(http::ranked_search_handler))
        .layer(middleware::from_fn(http_middleware::log_request))
        .layer(CorsLayer::permissive())
        .with_state(services);

    // Bind to address and start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Service ready - Health check at http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
