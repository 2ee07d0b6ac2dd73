//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Respect `RUST_LOG` when set, fall back to the configured level
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - The configured level applies to this crate and tower_http; other
//!   crates stay at their defaults unless `RUST_LOG` says otherwise

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ObservabilityConfig;

/// Initialize the global tracing subscriber.
pub fn init(config: &ObservabilityConfig) {
    let fallback = format!(
        "stage_proxy={level},tower_http={level}",
        level = config.log_level
    );

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&fallback)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
