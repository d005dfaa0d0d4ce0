//! OpenAPI document for the counter service.

use utoipa::OpenApi;

use super::dto::{OkResponse, VisitCountResponse};
use super::handlers::{system, visits};
use crate::error::{ErrorBody, ErrorResponse};

/// Generated OpenAPI description of every counter endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "visit-counter", description = "Persisted visit counter API"),
    paths(
        system::health_handler,
        system::ping_handler,
        visits::get_visits,
        visits::add_visit,
    ),
    components(schemas(OkResponse, VisitCountResponse, ErrorResponse, ErrorBody)),
    tags(
        (name = "System", description = "Liveness endpoints"),
        (name = "Visits", description = "Visit counter"),
    )
)]
pub struct ApiDoc;
