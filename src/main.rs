//! Stage-stripping forwarding proxy.
//!
//! A single-upstream reverse proxy built with Tokio and Axum: validate the
//! inbound request-URI, strip deployment-stage path prefixes, forward to a
//! fixed origin through a shared reqwest client (optionally via a local
//! forward proxy), and stream the response back.

use std::path::PathBuf;

use tokio::net::TcpListener;

use stage_proxy::config::{load_config, ProxyConfig};
use stage_proxy::lifecycle::{listen_for_ctrl_c, Shutdown};
use stage_proxy::observability;
use stage_proxy::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration: a TOML file when STAGE_PROXY_CONFIG names one,
    // built-in defaults otherwise. Env overrides fold in exactly once.
    let mut config = match std::env::var_os("STAGE_PROXY_CONFIG") {
        Some(path) => load_config(&PathBuf::from(path))?,
        None => ProxyConfig::default(),
    };
    config.apply_env_overrides();

    observability::logging::init(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream_origin = %config.upstream.origin,
        forward_proxy = config.forward_proxy.enabled,
        verify_tls = config.upstream.verify_tls,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(listen_for_ctrl_c(shutdown));

    let server = HttpServer::new(&config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
