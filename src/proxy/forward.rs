//! Request forwarding from `/backend/*` to the counter service.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};

use super::EdgeState;
use crate::config::{BACKEND_PREFIX, join_url};
use crate::error::CounterError;

/// Largest request body the edge buffers before forwarding.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Headers that describe a single connection and are not forwarded.
static HOP_BY_HOP: [header::HeaderName; 6] = [
    header::CONNECTION,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
    header::TE,
    header::TRAILER,
    header::CONTENT_LENGTH,
];

/// `ANY /backend/*` — Forwards to the upstream with the prefix removed.
///
/// Installed as the edge fallback; paths outside `/backend` get a plain 404.
///
/// # Errors
///
/// Returns [`CounterError::UpstreamUnavailable`] if the counter service
/// cannot be reached, or [`CounterError::InvalidRequest`] if the body
/// cannot be read.
pub async fn forward(
    State(state): State<EdgeState>,
    request: Request,
) -> Result<Response, CounterError> {
    let (parts, body) = request.into_parts();
    let Some(rest) = backend_remainder(parts.uri.path()) else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };
    let target = join_url(state.upstream(), rest, parts.uri.query());

    let body = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| CounterError::InvalidRequest(e.to_string()))?;

    let mut headers = parts.headers;
    headers.remove(header::HOST);
    strip_hop_by_hop(&mut headers);

    tracing::debug!(method = %parts.method, %target, "forwarding request");

    let upstream = state
        .client()
        .request(parts.method, target)
        .headers(headers)
        .body(body)
        .send()
        .await
        .map_err(|e| CounterError::UpstreamUnavailable(e.to_string()))?;

    let status = upstream.status();
    let mut headers = upstream.headers().clone();
    strip_hop_by_hop(&mut headers);
    let bytes = upstream
        .bytes()
        .await
        .map_err(|e| CounterError::UpstreamUnavailable(e.to_string()))?;

    Ok((status, headers, Body::from(bytes)).into_response())
}

/// Returns the part of `path` after the `/backend` prefix, or `None` when
/// the path is not under it (`/backendx` is not).
#[must_use]
pub fn backend_remainder(path: &str) -> Option<&str> {
    let rest = path.strip_prefix(BACKEND_PREFIX)?;
    (rest.is_empty() || rest.starts_with('/')).then_some(rest)
}

fn strip_hop_by_hop(headers: &mut HeaderMap) {
    for name in &HOP_BY_HOP {
        headers.remove(name);
    }
}
