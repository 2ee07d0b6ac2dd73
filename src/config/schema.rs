//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! All types derive Serde traits for deserialization from config files, and
//! every field has a default so a missing config file is a valid config.

use serde::{Deserialize, Serialize};

/// Root configuration for the proxy.
///
/// Loaded once at startup, env overrides applied once, then immutable.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream origin and transport settings.
    pub upstream: UpstreamConfig,

    /// Forward-proxy settings for local development.
    pub forward_proxy: ForwardProxyConfig,

    /// Path rewriting settings.
    pub rewrite: RewriteConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl ProxyConfig {
    /// Fold process environment state into the config.
    ///
    /// `ENV=local` routes all outbound connections through the configured
    /// forward proxy. Read exactly once at startup; the handler never
    /// touches the environment.
    pub fn apply_env_overrides(&mut self) {
        if std::env::var("ENV").is_ok_and(|v| v == "local") {
            self.forward_proxy.enabled = true;
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:9000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:9000".to_string(),
        }
    }
}

/// Upstream origin and outbound transport configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Target origin: scheme + host, no path (e.g., "https://api.openai.com").
    pub origin: String,

    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,

    /// TCP keep-alive probe interval in seconds.
    pub keepalive_secs: u64,

    /// Overall request timeout (connect + response) in seconds.
    pub request_timeout_secs: u64,

    /// Verify the upstream TLS certificate chain.
    ///
    /// Defaults to true; disable only for development against endpoints
    /// with self-signed certificates.
    pub verify_tls: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            origin: "https://api.openai.com".to_string(),
            connect_timeout_secs: 30,
            keepalive_secs: 30,
            request_timeout_secs: 60,
            verify_tls: true,
        }
    }
}

/// Forward-proxy configuration for local development.
///
/// When enabled, the outbound client dials the upstream through this
/// intermediate HTTP proxy instead of connecting directly.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ForwardProxyConfig {
    /// Route outbound connections through the forward proxy.
    pub enabled: bool,

    /// Forward proxy address (e.g., "http://127.0.0.1:10809").
    pub address: String,
}

impl Default for ForwardProxyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            address: "http://127.0.0.1:10809".to_string(),
        }
    }
}

/// Path rewriting configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Deployment-stage prefixes stripped before forwarding.
    ///
    /// Applied in order; each removes at most its first occurrence from
    /// the inbound path.
    pub stage_prefixes: Vec<String>,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            stage_prefixes: vec!["/release".to_string(), "/test".to_string()],
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
