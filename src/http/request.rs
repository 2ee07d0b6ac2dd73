//! Request ID generation.
//!
//! # Responsibilities
//! - Tag every inbound request with a unique ID (UUID v4)
//! - Make the ID available to the trace layer and handler logs
//!
//! # Design Decisions
//! - ID added as early as possible so all log lines for a request correlate
//! - The ID is not copied onto the caller-facing response: the response
//!   header set is the fixed upstream allow-list only

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates a UUID v4 request ID for each inbound request.
#[derive(Clone, Copy, Debug, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}
