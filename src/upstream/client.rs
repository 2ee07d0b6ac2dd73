//! Upstream HTTP client construction.
//!
//! # Responsibilities
//! - Build the shared outbound client from the transport configuration
//! - Apply connect/keep-alive/request timeouts
//! - Route through the forward proxy in local mode
//!
//! # Design Decisions
//! - One client built at startup and shared across request tasks; the
//!   connection pool carries no per-request state
//! - TLS verification stays on unless explicitly disabled in config
//! - Ambient proxy environment variables are ignored; proxying is driven
//!   by the explicit configuration only

use std::time::Duration;

use crate::config::{ForwardProxyConfig, UpstreamConfig};

/// Build the shared upstream client.
pub fn build_client(
    upstream: &UpstreamConfig,
    forward_proxy: &ForwardProxyConfig,
) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(upstream.connect_timeout_secs))
        .tcp_keepalive(Duration::from_secs(upstream.keepalive_secs))
        .timeout(Duration::from_secs(upstream.request_timeout_secs));

    if !upstream.verify_tls {
        tracing::warn!("Upstream TLS certificate verification is disabled");
        builder = builder.danger_accept_invalid_certs(true);
    }

    if forward_proxy.enabled {
        tracing::info!(address = %forward_proxy.address, "Routing upstream traffic through forward proxy");
        builder = builder.proxy(reqwest::Proxy::all(&forward_proxy.address)?);
    } else {
        builder = builder.no_proxy();
    }

    builder.build()
}
