//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, forwarding handler)
//!     → request.rs (request ID)
//!     → rewrite.rs (strip stage prefixes, build target URL)
//!     → upstream client dispatch
//!     → response.rs (allow-listed headers, streamed body)
//!     → Send to caller
//! ```

pub mod error;
pub mod request;
pub mod response;
pub mod rewrite;
pub mod server;

pub use error::ProxyError;
pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use response::RELAYED_HEADERS;
pub use rewrite::PathRewriter;
pub use server::HttpServer;
