//! Stage-stripping forwarding proxy library.
//!
//! Forwards every inbound request to a fixed upstream origin, removing
//! deployment-stage path prefixes ("/release", "/test") injected by an
//! upstream routing layer, and streams the response back to the caller.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
