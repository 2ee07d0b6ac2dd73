//! Response relay.
//!
//! # Responsibilities
//! - Mirror the upstream status code to the caller (non-2xx included)
//! - Copy the fixed allow-listed header subset; drop everything else
//! - Stream the upstream body to the caller without buffering
//!
//! # Design Decisions
//! - Allow-list, not deny-list: only Content-Type, Cache-Control, Expires,
//!   Last-Modified, and ETag cross the proxy
//! - Streaming keeps incremental upstream output (e.g. token-by-token
//!   generation) incremental for the caller
//! - The upstream body is released when the stream is dropped, whether the
//!   copy completed or the caller went away

use axum::body::Body;
use axum::http::header::{HeaderName, CACHE_CONTROL, CONTENT_TYPE, ETAG, EXPIRES, LAST_MODIFIED};
use axum::response::Response;

/// Upstream response headers relayed to the caller.
pub const RELAYED_HEADERS: [HeaderName; 5] =
    [CONTENT_TYPE, CACHE_CONTROL, EXPIRES, LAST_MODIFIED, ETAG];

/// Build the caller-facing response from the upstream response.
pub fn relay_response(upstream: reqwest::Response) -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = upstream.status();

    for name in RELAYED_HEADERS {
        if let Some(value) = upstream.headers().get(&name) {
            response.headers_mut().insert(name, value.clone());
        }
    }

    *response.body_mut() = Body::from_stream(upstream.bytes_stream());
    response
}
