//! Outcome of a single call to a remote authority.

use serde::Serialize;

/// What one remote call produced.
///
/// Callers that only care about data use [`RemoteOutcome::found`], which
/// collapses "no such thing" and "the network is down" into `None`.
/// Callers that need to tell them apart can match on the variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum RemoteOutcome<T> {
    /// The authority answered with data.
    Found(T),
    /// The authority answered, and had nothing.
    NotFound,
    /// The call failed: timeout, connection error, bad status or payload.
    TransientFailure(String),
}

impl<T> RemoteOutcome<T> {
    /// The data, if the call found any.
    pub fn found(self) -> Option<T> {
        match self {
            RemoteOutcome::Found(value) => Some(value),
            RemoteOutcome::NotFound | RemoteOutcome::TransientFailure(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, RemoteOutcome::Found(_))
    }

    pub fn is_transient_failure(&self) -> bool {
        matches!(self, RemoteOutcome::TransientFailure(_))
    }

    /// Map the found value, keeping the other variants.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RemoteOutcome<U> {
        match self {
            RemoteOutcome::Found(value) => RemoteOutcome::Found(f(value)),
            RemoteOutcome::NotFound => RemoteOutcome::NotFound,
            RemoteOutcome::TransientFailure(reason) => RemoteOutcome::TransientFailure(reason),
        }
    }
}
