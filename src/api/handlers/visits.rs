//! Visit handlers: read the count and record a visit.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::VisitCountResponse;
use crate::app_state::AppState;
use crate::error::{CounterError, ErrorResponse};

/// `GET /visits` — Current visit count.
///
/// # Errors
///
/// Returns [`CounterError::StoreUnavailable`] if the store cannot be queried.
#[utoipa::path(
    get,
    path = "/visits",
    tag = "Visits",
    summary = "Get visit count",
    description = "Counts all recorded visits.",
    responses(
        (status = 200, description = "Current count", body = VisitCountResponse),
        (status = 500, description = "Store unavailable", body = ErrorResponse),
    )
)]
pub async fn get_visits(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, CounterError> {
    let count = state.visit_service.get_count().await?;
    Ok(Json(VisitCountResponse { count }))
}

/// `POST /visits` — Record a visit and return the new count.
///
/// # Errors
///
/// Returns [`CounterError::StoreUnavailable`] if the insert or the
/// following count fails.
#[utoipa::path(
    post,
    path = "/visits",
    tag = "Visits",
    summary = "Add a visit",
    description = "Inserts one visit row, then returns the count read after the insert. The count may include concurrent inserts from other callers.",
    responses(
        (status = 200, description = "Count after the insert", body = VisitCountResponse),
        (status = 500, description = "Store unavailable", body = ErrorResponse),
    )
)]
pub async fn add_visit(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, CounterError> {
    let count = state.visit_service.add_visit().await?;
    Ok(Json(VisitCountResponse { count }))
}

/// Visit routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/visits", get(get_visits).post(add_visit))
}
