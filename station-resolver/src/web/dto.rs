//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{StationId, StationRecord};
use crate::reconcile::ResolutionSource;
use crate::resolver::ResolvedStation;
use crate::stations::SearchAttempt;

/// Default radius for nearby searches, in meters.
pub const DEFAULT_NEARBY_RADIUS_M: f64 = 1000.0;

/// Free-text station search.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// What the user typed
    pub q: String,
}

/// Result of a free-text search.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// The query as received
    pub query: String,
    /// The query after alias resolution
    pub canonical_query: String,
    /// Spellings tried, in order
    pub attempts: Vec<SearchAttempt>,
    pub stations: Vec<StationRecord>,
}

/// Geo search around a point.
#[derive(Debug, Deserialize)]
pub struct NearbyRequest {
    pub lon: f64,
    pub lat: f64,
    /// Meters; defaults to [`DEFAULT_NEARBY_RADIUS_M`]
    pub radius: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct NearbyResponse {
    pub stations: Vec<StationRecord>,
}

/// One station on one line.
#[derive(Debug, Clone, Deserialize)]
pub struct LegRequest {
    pub station: String,
    pub line: String,
}

/// A resolved station identifier.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub station: String,
    pub line: String,
    pub id: StationId,
    pub source: ResolutionSource,
}

/// Several stations to resolve at once (e.g. the legs of a route).
#[derive(Debug, Deserialize)]
pub struct ResolveLegsRequest {
    pub legs: Vec<LegRequest>,
}

/// Per-leg outcome; exactly one of `id` and `error` is set.
#[derive(Debug, Serialize)]
pub struct LegResult {
    pub station: String,
    pub line: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<StationId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ResolutionSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResolveLegsResponse {
    pub legs: Vec<LegResult>,
}

/// Search, then resolve every station found.
#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub query: String,
    pub stations: Vec<ResolvedStation>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
