//! Shared error type for alert sources and configuration.

use thiserror::Error;

/// Errors that can occur while fetching or configuring alert data.
///
/// Variants carry plain strings so that this crate stays free of HTTP
/// dependencies; clients map their transport errors into [`Network`].
///
/// [`Network`]: AlertError::Network
#[derive(Debug, Error)]
pub enum AlertError {
    /// Transport-level failure (connection refused, timeout, DNS).
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// Invalid configuration (empty zone list, unknown status type).
    #[error("invalid configuration: {0}")]
    Config(String),
}
