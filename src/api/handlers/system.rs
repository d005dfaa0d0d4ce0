//! System endpoints: health check and ping.
//!
//! Neither touches the store, so both answer while the database is down.

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::OkResponse;
use crate::app_state::AppState;

/// `GET /health` — Process liveness.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns a static ok signal. Does not consult the store.",
    responses(
        (status = 200, description = "Service is serving", body = OkResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    Json(OkResponse::OK)
}

/// `GET /ping` — Same answer as `/health`, called by the client's ping action.
#[utoipa::path(
    get,
    path = "/ping",
    tag = "System",
    summary = "Ping",
    responses(
        (status = 200, description = "Service is serving", body = OkResponse),
    )
)]
pub async fn ping_handler() -> impl IntoResponse {
    Json(OkResponse::OK)
}

/// System routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/ping", get(ping_handler))
}
