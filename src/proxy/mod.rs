//! Edge proxy: serves the browser client and forwards `/backend/*` to the
//! counter service.
//!
//! The forwarding rule is static. Everything after the `/backend` prefix,
//! and the query string, is appended to the configured upstream base URL.

pub mod forward;

use axum::Router;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use reqwest::Url;
use tower_http::trace::TraceLayer;

use crate::config::EdgeConfig;
use crate::error::CounterError;

/// Browser client page served at `/`.
pub const INDEX_HTML: &str = include_str!("../../web/index.html");

/// Shared state of the edge router.
#[derive(Debug, Clone)]
pub struct EdgeState {
    client: reqwest::Client,
    upstream: Url,
}

impl EdgeState {
    /// Creates the edge state for the given upstream base URL.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::Internal`] if the upstream URL cannot carry a
    /// path or the HTTP client cannot be built.
    pub fn new(upstream: Url) -> Result<Self, CounterError> {
        if upstream.cannot_be_a_base() {
            return Err(CounterError::Internal(format!(
                "upstream url {upstream} cannot be used as a base"
            )));
        }
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| CounterError::Internal(e.to_string()))?;
        Ok(Self { client, upstream })
    }

    /// Creates the edge state from configuration.
    ///
    /// # Errors
    ///
    /// See [`EdgeState::new`].
    pub fn from_config(config: &EdgeConfig) -> Result<Self, CounterError> {
        Self::new(config.upstream_url.clone())
    }

    /// Returns the upstream base URL.
    #[must_use]
    pub fn upstream(&self) -> &Url {
        &self.upstream
    }

    /// Returns the outbound HTTP client.
    #[must_use]
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

/// `GET /` — Browser client page.
pub async fn index_handler() -> impl IntoResponse {
    Html(INDEX_HTML)
}

/// Builds the edge application.
pub fn build_edge(state: EdgeState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .fallback(forward::forward)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
