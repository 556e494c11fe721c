//! Error type shared across the crate.
//!
//! Infeasible budgets are not errors: they produce a regular
//! [`Recommendation`](crate::recommend::Recommendation) with
//! `no_products_available` set. Errors are reserved for precondition
//! violations and for failures at the catalog and configuration seams.

use thiserror::Error;

/// Errors surfaced by the recommendation engine.
#[derive(Debug, Error)]
pub enum StylistError {
    /// The request violates a precondition (empty occasion, zero budget).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The catalog provider could not produce a product list.
    #[error("catalog unavailable: {0}")]
    Catalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
