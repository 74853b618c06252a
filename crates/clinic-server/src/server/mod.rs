//! HTTP server module for the clinic-management backend API
//!
//! Exposes the stateless endpoints the web frontend calls:
//! - role-based UI section resolution
//! - the herb search stub
//! - consultation usage tallies
//! - record line formatting
//!
//! plus health and version probes. Every handler is a pure function over its
//! request payload; there is no shared state to carry. CORS applies to the
//! `/api` subtree only, with credentials for the configured origin list.

pub mod config;
pub mod extract;
pub mod handlers;
pub mod models;


use std::net::SocketAddr;

use anyhow::Context;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::server::config::ServerConfig;
use crate::server::handlers::{
    format_lines_handler, global_usage_handler, health_handler, search_herbs_handler,
    sections_handler, version_handler,
};

/// Start the clinic backend HTTP server
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    // Initialize tracing/logging subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let app = create_app(&config)?;
    let addr = SocketAddr::from((config.host, config.port));

    info!("Starting clinic backend on http://{}", addr);
    if config.cors_all {
        warn!("CORS enabled for all origins without credentials (development mode)");
    } else {
        info!("CORS origins: {}", config.allowed_origins.join(", "));
    }

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the main application router
pub fn create_app(config: &ServerConfig) -> anyhow::Result<Router> {
    // Credentialed responses cannot use a wildcard origin, so the dev-mode
    // escape hatch drops credentials along with the origin list.
    let cors = if config.cors_all {
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE])
            .allow_origin(Any)
    } else {
        let origins = config
            .allowed_origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("invalid CORS origin: {origin}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE])
            .allow_origin(AllowOrigin::list(origins))
            .allow_credentials(true)
    };

    let api = Router::new()
        .route("/access/sections", post(sections_handler))
        .route("/search/herbs", get(search_herbs_handler))
        .route("/compute/global-usage", post(global_usage_handler))
        .route("/records/format-lines", post(format_lines_handler))
        .layer(cors);

    let app = Router::new()
        .nest("/api", api)
        .route("/health", get(health_handler))
        .route("/version", get(version_handler))
        .layer(DefaultBodyLimit::max(config.max_payload_size()))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new());

    Ok(app)
}
