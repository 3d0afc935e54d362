//! Station search service error types.
//!
//! These never leave the client: every error becomes a
//! `RemoteOutcome::TransientFailure` at the call boundary.

/// Errors from a single call to the station search service.
#[derive(Debug, thiserror::Error)]
pub enum StationApiError {
    /// HTTP request failed (connect error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
