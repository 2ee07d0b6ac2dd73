//! Observability subsystem.
//!
//! Structured logging via the tracing crate; the request ID generated in
//! the http layer flows through every log line for a request.

pub mod logging;
