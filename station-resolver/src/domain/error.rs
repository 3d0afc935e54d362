//! Resolution error types.
//!
//! Only domain failures live here. Remote failures from either authority
//! never reach this type; they degrade to empty results or to synthesis.

use super::InvalidRailwayId;

/// Errors that make a station identifier unresolvable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The line name has no entry in the railway catalog.
    #[error("unknown railway: {0}")]
    UnknownRailway(String),

    /// The catalog entry for a line is not a well-formed railway id.
    #[error("railway catalog entry for {line} is malformed: {source}")]
    MalformedRailwayId {
        line: String,
        #[source]
        source: InvalidRailwayId,
    },

    /// The station name is empty or whitespace.
    #[error("station name is blank")]
    BlankStationName,
}
