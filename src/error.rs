//! Unified error types for the portfolio backend.
//!
//! These types never reach an HTTP client: handlers convert every failure
//! into an in-band payload (see [`crate::api::handlers`]). They exist so the
//! internals can propagate causes with `?` and log them precisely.

use thiserror::Error;

/// Unified error type for the portfolio backend.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// GitHub proxy error.
    #[error("github error: {0}")]
    Github(#[from] GithubError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the outbound GitHub repositories call.
#[derive(Error, Debug)]
pub enum GithubError {
    /// The request itself failed (DNS, connect, timeout, body read).
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("github responded with HTTP {status}")]
    Status {
        /// The upstream status code.
        status: reqwest::StatusCode,
    },

    /// Response body was not the expected JSON.
    #[error("failed to parse github response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ApiError>;
