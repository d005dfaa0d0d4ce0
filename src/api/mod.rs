//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All endpoints are mounted at the root, matching what the edge proxy
//! forwards after stripping `/backend`.

pub mod dto;
pub mod handlers;
pub mod openapi;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new().merge(handlers::routes());

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
    };

    router
}

/// Builds the served application: routes, HTTP layers, and state.
pub fn build_app(state: AppState) -> Router {
    build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
