//! HTTP calls issued by the client.

use axum::http::{Method, header};
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::api::dto::{OkResponse, VisitCountResponse};
use crate::config::join_url;

/// Failure of a single client request.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response, or its body could not be
    /// read or decoded.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body, or `Request failed: <status>` when empty.
        message: String,
    },
}

impl ClientError {
    /// Builds a status error from a response code and its body text.
    #[must_use]
    pub fn status(status: u16, body: String) -> Self {
        let message = if body.is_empty() {
            format!("Request failed: {status}")
        } else {
            body
        };
        Self::Status { status, message }
    }
}

/// Typed client for the counter endpoints.
///
/// The base URL is either the counter service itself or the edge's
/// `/backend` prefix; paths are appended to it.
#[derive(Debug, Clone)]
pub struct CounterClient {
    http: reqwest::Client,
    base: Url,
}

impl CounterClient {
    /// Creates a client for the given base URL.
    #[must_use]
    pub fn new(base: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    /// `GET /ping`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-2xx reply.
    pub async fn ping(&self) -> Result<OkResponse, ClientError> {
        self.request(Method::GET, "/ping").await
    }

    /// `GET /visits`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-2xx reply.
    pub async fn fetch_visits(&self) -> Result<VisitCountResponse, ClientError> {
        self.request(Method::GET, "/visits").await
    }

    /// `POST /visits`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-2xx reply.
    pub async fn add_visit(&self) -> Result<VisitCountResponse, ClientError> {
        self.request(Method::POST, "/visits").await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> Result<T, ClientError> {
        let url = join_url(&self.base, path, None);
        let response = self
            .http
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(ClientError::status(status.as_u16(), body));
        }

        Ok(response.json::<T>().await?)
    }
}
