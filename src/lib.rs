//! # kcalc-add
//!
//! A minimal HTTP microservice: `POST /add` sums two JSON operands,
//! `GET /healthz` reports liveness. The library exposes the router so tests
//! and the server binary share the exact same HTTP surface.

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod service;
pub mod telemetry;

use config::ServerConfig;

/// Assembles the full application router: API routes, Swagger UI, access
/// logging, and CORS.
pub fn build_router() -> Router {
    Router::new()
        .route(
            "/add",
            post(handlers::add).fallback(handlers::add_method_not_allowed),
        )
        .route("/healthz", get(handlers::healthz))
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
        .layer(TraceLayer::new_for_http())
        .layer(default_cors_layer())
}

/// Permissive CORS, same policy the service mounts on every surface.
pub fn default_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Binds the listener and serves until SIGINT/SIGTERM.
///
/// `PORT=0` lets the OS assign a port; the actual bound port is always
/// logged and, when `PORT_FILE` is set, written there for discovery by
/// test harnesses and supervisors.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let listener = TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;
    let addr = listener.local_addr().context("listener has no local addr")?;

    if let Some(path) = &config.port_file {
        std::fs::write(path, addr.port().to_string())
            .with_context(|| format!("failed to write PORT_FILE {}", path.display()))?;
    }

    info!("listening on {}", addr);

    axum::serve(listener, build_router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl-C or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl-C"),
        _ = terminate => info!("received SIGTERM"),
    }
    info!("shutting down");
}
