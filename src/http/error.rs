//! Per-request error taxonomy.
//!
//! Every failure in the forwarding path is terminal for that request and
//! maps to an HTTP 500. The Display text of each variant is exactly the
//! body sent to the caller: a generic message for validation and
//! construction failures, the raw error text for dispatch failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// A terminal failure while forwarding one request.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The inbound request-URI is not an absolute-path reference.
    #[error("Internal Server Error")]
    InvalidRequestUri(String),

    /// Building the outbound request failed (bad method or URL).
    #[error("Error creating proxy request")]
    BuildRequest(#[source] reqwest::Error),

    /// Dispatching the outbound request failed (DNS, connect, TLS, timeout).
    #[error("{0}")]
    Dispatch(reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
