//! Response bodies of the counter endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `/health` and `/ping`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OkResponse {
    /// Always `true` when the process is serving.
    pub ok: bool,
}

impl OkResponse {
    /// The static liveness answer.
    pub const OK: Self = Self { ok: true };
}

/// Body of `GET /visits` and `POST /visits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VisitCountResponse {
    /// Total number of recorded visits.
    pub count: u64,
}
