// Web server — Axum-based JSON API in front of the verification engine.
//
// POST /verify runs a claim through the engine, metering Free accounts
// against their daily quota. The account routes (login, register, usage)
// are thin wrappers over the Database trait. Every route speaks JSON.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::db::Database;
use crate::verify::ClaimVerificationEngine;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn Database>,
    pub engine: Arc<ClaimVerificationEngine>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(
    db: Arc<dyn Database>,
    engine: ClaimVerificationEngine,
    port: u16,
    bind: &str,
) -> Result<()> {
    let state = AppState {
        db,
        engine: Arc::new(engine),
    };

    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("TruthFort API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the full router. Public so tests can drive it without a socket.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/verify", post(handlers::verify::verify))
        .route("/login", post(handlers::account::login))
        .route("/register", post(handlers::account::register))
        .route("/subscribe", post(handlers::account::subscribe))
        .route("/update_usage", post(handlers::account::update_usage))
        .route("/health", get(health))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({
            "status": "ok",
            "message": "TruthFort API is running",
        })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}

/// `{"success": false, "message": ...}` with 200 OK, the shape the account
/// routes use for validation failures.
pub fn account_failure(message: &str) -> Response {
    axum::Json(serde_json::json!({ "success": false, "message": message })).into_response()
}
