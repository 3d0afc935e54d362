//! Station search service client and free-text search.
//!
//! The service matches names exactly and returns one record per
//! (station, line) pair, with coordinates. Free-text queries go through
//! the alias table and a fallback chain of alternative spellings before
//! giving up.

mod client;
mod error;
mod search;

pub use client::{StationApiClient, StationApiConfig, StationDto, StationSource};
pub use error::StationApiError;
pub use search::{SearchAttempt, SearchReport, StationSearchClient, haversine_meters};
