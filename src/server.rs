use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context;
use axum::{
    extract::State,
    http::Method,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use hyper::Server;
use serde_json::Value;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::app::DashboardUseCase;
use crate::config::ServerConfig;
use crate::metrics::render_metrics;
use crate::pipeline::payload::fallback_payload;

#[derive(Clone)]
pub struct AppState {
    pub dashboard: DashboardUseCase,
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "royalty-dashboard",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Dashboard payload. Always 200; failures are reported in-band.
async fn dashboard(State(state): State<AppState>) -> Json<Value> {
    let use_case = state.dashboard.clone();
    // The pipeline reads files and blocks; keep it off the async workers
    match tokio::task::spawn_blocking(move || use_case.fetch()).await {
        Ok(payload) => Json(payload),
        Err(e) => {
            error!(error = %e, "dashboard task failed");
            Json(fallback_payload(&e.to_string()))
        }
    }
}

async fn metrics() -> impl IntoResponse {
    render_metrics()
}

/// Create the HTTP router with the API routes and the static front-end
pub fn create_server<P: AsRef<Path>>(state: AppState, static_dir: P) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/dashboard", get(dashboard))
        .route("/metrics", get(metrics))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors))
}

/// Start the HTTP server
pub async fn start_server(state: AppState, config: &ServerConfig) -> anyhow::Result<()> {
    let app = create_server(state, &config.static_dir);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", config.host, config.port))?;

    info!(%addr, "HTTP server listening");
    info!("Dashboard API: http://{addr}/api/dashboard");
    info!("Health check:  http://{addr}/health");

    Server::try_bind(&addr)
        .with_context(|| format!("failed to bind {addr}"))?
        .serve(app.into_make_service())
        .await
        .context("HTTP server error")?;

    Ok(())
}
