//! Transit catalog client error types.

use std::fmt;

/// Errors from a single catalog lookup.
#[derive(Debug)]
pub enum OdptError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed, or returned ids were malformed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// Invalid consumer key
    Unauthorized,

    /// No consumer key configured
    NotConfigured(String),
}

impl fmt::Display for OdptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OdptError::Http(e) => write!(f, "HTTP error: {e}"),
            OdptError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            OdptError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            OdptError::Unauthorized => write!(f, "unauthorized (invalid consumer key)"),
            OdptError::NotConfigured(msg) => write!(f, "not configured: {msg}"),
        }
    }
}

impl std::error::Error for OdptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OdptError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for OdptError {
    fn from(err: reqwest::Error) -> Self {
        OdptError::Http(err)
    }
}
