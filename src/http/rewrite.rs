//! Path rewriting and target URL construction.
//!
//! # Responsibilities
//! - Strip deployment-stage prefixes ("/release", "/test") from the
//!   inbound path before forwarding
//! - Concatenate the fixed target origin with the rewritten path
//!
//! # Design Decisions
//! - Literal substring removal, first occurrence only, applied in
//!   configuration order; a missing prefix is not an error
//! - Query strings pass through unmodified
//! - No escaping or normalization beyond what the inbound path carries

use axum::http::uri::PathAndQuery;

use crate::config::RewriteConfig;

/// Rewrites inbound paths and builds outbound target URLs.
#[derive(Debug)]
pub struct PathRewriter {
    origin: String,
    stage_prefixes: Vec<String>,
}

impl PathRewriter {
    /// Create a rewriter for the given origin.
    ///
    /// A trailing slash on the origin is trimmed so concatenation with the
    /// leading-slash path never doubles the separator.
    pub fn new(origin: &str, rewrite: &RewriteConfig) -> Self {
        Self {
            origin: origin.trim_end_matches('/').to_string(),
            stage_prefixes: rewrite.stage_prefixes.clone(),
        }
    }

    /// Remove the first occurrence of each stage prefix, in order.
    pub fn rewrite(&self, path: &str) -> String {
        let mut rewritten = path.to_string();
        for prefix in &self.stage_prefixes {
            rewritten = rewritten.replacen(prefix.as_str(), "", 1);
        }
        rewritten
    }

    /// Build the outbound URL: origin + rewritten path + original query.
    pub fn target_url(&self, path_and_query: &PathAndQuery) -> String {
        let path = self.rewrite(path_and_query.path());
        match path_and_query.query() {
            Some(query) => format!("{}{}?{}", self.origin, path, query),
            None => format!("{}{}", self.origin, path),
        }
    }
}
