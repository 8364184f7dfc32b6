//! Probe error types.

use thiserror::Error;

/// Why a connectivity check did not get a response.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The configured URL could not be used.
    #[error("invalid probe URL: {0}")]
    InvalidUrl(String),

    /// The request timed out.
    #[error("probe timed out after {0}ms")]
    Timeout(u64),

    /// The host could not be connected to.
    #[error("connection failed: {0}")]
    Connect(String),

    /// Any other transport failure.
    #[error("network error: {0}")]
    NetworkError(String),
}
