//! HTTP server setup and the forwarding handler.
//!
//! # Responsibilities
//! - Create the Axum router with the catch-all forwarding handler
//! - Wire up middleware (request ID, tracing)
//! - Bind the server to a listener and serve until shutdown
//! - Validate, rewrite, and forward each inbound request upstream
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → validate request-URI (absolute-path reference)
//!     → rewrite path (strip stage prefixes), append query
//!     → build outbound request (method, headers, streamed body)
//!     → dispatch through the shared upstream client
//!     → relay status + allow-listed headers, stream body back
//! ```

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{uri::PathAndQuery, HeaderName, Method, Request, Uri},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{request_id::SetRequestIdLayer, trace::TraceLayer};

use crate::config::ProxyConfig;
use crate::http::error::ProxyError;
use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};
use crate::http::response::relay_response;
use crate::http::rewrite::PathRewriter;
use crate::upstream::build_client;

/// Application state injected into the handler.
///
/// The client and rewriter are built once at startup and shared across
/// request tasks; neither carries per-request mutable state.
#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub rewriter: Arc<PathRewriter>,
}

/// HTTP server for the forwarding proxy.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server from a validated configuration.
    ///
    /// Fails only if the upstream client cannot be constructed (e.g. an
    /// unparseable forward-proxy address).
    pub fn new(config: &ProxyConfig) -> Result<Self, reqwest::Error> {
        let client = build_client(&config.upstream, &config.forward_proxy)?;
        let rewriter = Arc::new(PathRewriter::new(&config.upstream.origin, &config.rewrite));

        let state = AppState { client, rewriter };

        Ok(Self {
            router: Self::build_router(state),
        })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(proxy_handler))
            .route("/", any(proxy_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(
                        HeaderName::from_static(X_REQUEST_ID),
                        MakeRequestUuid,
                    ))
                    .layer(TraceLayer::new_for_http()),
            )
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Forwarding handler: every path and method lands here.
async fn proxy_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    match forward(&state, request).await {
        Ok(response) => response,
        Err(error) => error.into_response(),
    }
}

/// The single forwarding path. Each step's failure is terminal for the
/// request; there is no retry and no fallback.
async fn forward(state: &AppState, request: Request<Body>) -> Result<Response, ProxyError> {
    let path_and_query = validate_request_uri(request.uri())?.clone();
    let target_url = state.rewriter.target_url(&path_and_query);

    let (parts, body) = request.into_parts();

    tracing::debug!(
        method = %parts.method,
        path = %path_and_query.path(),
        target = %target_url,
        "Forwarding request"
    );

    // All inbound headers pass through verbatim, Host and Authorization
    // included. Only POST and PUT carry a body; it is streamed, not
    // buffered.
    let mut outbound = state
        .client
        .request(parts.method.clone(), target_url.as_str())
        .headers(parts.headers);

    if parts.method == Method::POST || parts.method == Method::PUT {
        outbound = outbound.body(reqwest::Body::wrap_stream(body.into_data_stream()));
    }

    let outbound = outbound.build().map_err(|error| {
        tracing::error!(error = %error, "Error creating proxy request");
        ProxyError::BuildRequest(error)
    })?;

    let upstream = state.client.execute(outbound).await.map_err(|error| {
        tracing::error!(error = %error, target = %target_url, "Error sending proxy request");
        ProxyError::Dispatch(error)
    })?;

    tracing::debug!(status = %upstream.status(), "Relaying upstream response");
    Ok(relay_response(upstream))
}

/// Reject request-URIs that are not absolute-path references before any
/// forwarding attempt. Defensive check, not a security boundary.
fn validate_request_uri(uri: &Uri) -> Result<&PathAndQuery, ProxyError> {
    match uri.path_and_query() {
        Some(pq) if pq.path().starts_with('/') => Ok(pq),
        _ => {
            tracing::error!(uri = %uri, "Error parsing request URI");
            Err(ProxyError::InvalidRequestUri(uri.to_string()))
        }
    }
}
