//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Check the upstream origin is a bare scheme + host
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::ProxyConfig;

/// A single semantic validation failure.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid bind address `{0}`: {1}")]
    BindAddress(String, std::net::AddrParseError),

    #[error("invalid upstream origin `{0}`: {1}")]
    Origin(String, url::ParseError),

    #[error("upstream origin `{0}` must use http or https")]
    OriginScheme(String),

    #[error("upstream origin `{0}` must not carry a path, query, or fragment")]
    OriginNotBare(String),

    #[error("invalid forward proxy address `{0}`: {1}")]
    ForwardProxy(String, url::ParseError),

    #[error("timeout `{0}` must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("stage prefix `{0}` must start with '/'")]
    StagePrefix(String),
}

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = config.listener.bind_address.parse::<SocketAddr>() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
            e,
        ));
    }

    let origin = &config.upstream.origin;
    match Url::parse(origin) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                errors.push(ValidationError::OriginScheme(origin.clone()));
            }
            // The rewritten path is concatenated onto the origin verbatim,
            // so the origin itself must not contribute path components.
            if !matches!(url.path(), "" | "/") || url.query().is_some() || url.fragment().is_some()
            {
                errors.push(ValidationError::OriginNotBare(origin.clone()));
            }
        }
        Err(e) => errors.push(ValidationError::Origin(origin.clone(), e)),
    }

    if let Err(e) = Url::parse(&config.forward_proxy.address) {
        errors.push(ValidationError::ForwardProxy(
            config.forward_proxy.address.clone(),
            e,
        ));
    }

    for (name, value) in [
        ("upstream.connect_timeout_secs", config.upstream.connect_timeout_secs),
        ("upstream.keepalive_secs", config.upstream.keepalive_secs),
        ("upstream.request_timeout_secs", config.upstream.request_timeout_secs),
    ] {
        if value == 0 {
            errors.push(ValidationError::ZeroTimeout(name));
        }
    }

    for prefix in &config.rewrite.stage_prefixes {
        if !prefix.starts_with('/') {
            errors.push(ValidationError::StagePrefix(prefix.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
