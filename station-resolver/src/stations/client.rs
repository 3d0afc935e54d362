//! HTTP client for the station search service.

use std::future::Future;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use super::error::StationApiError;
use crate::domain::StationRecord;
use crate::remote::RemoteOutcome;

/// Default base URL for the station search service.
pub const DEFAULT_BASE_URL: &str = "https://express.heartrails.com/api";

/// Default connect timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Default timeout for a whole call, body included.
pub const DEFAULT_RESOURCE_TIMEOUT: Duration = Duration::from_secs(10);

/// A source of raw station records.
///
/// Implementations report every call as a [`RemoteOutcome`] and never
/// panic or error out; this is what lets the search fallback chain keep
/// going after a failed call.
pub trait StationSource: Send + Sync {
    /// Stations whose name matches `name` exactly.
    fn stations_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = RemoteOutcome<Vec<StationRecord>>> + Send;

    /// Stations near a point, nearest first.
    fn stations_near(
        &self,
        longitude: f64,
        latitude: f64,
    ) -> impl Future<Output = RemoteOutcome<Vec<StationRecord>>> + Send;
}

/// Response envelope: `{ "response": { "station": [...] } }`.
#[derive(Debug, Deserialize)]
struct StationsEnvelope {
    response: StationsBody,
}

#[derive(Debug, Deserialize)]
struct StationsBody {
    #[serde(default)]
    station: Vec<StationDto>,
    /// Set instead of `station` when nothing matched.
    #[serde(default)]
    error: Option<String>,
}

/// One station as the service reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct StationDto {
    pub name: String,
    pub prefecture: String,
    pub line: String,
    /// Longitude
    pub x: f64,
    /// Latitude
    pub y: f64,
    #[serde(default)]
    pub postal: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub distance: Option<String>,
}

impl From<StationDto> for StationRecord {
    fn from(dto: StationDto) -> Self {
        StationRecord {
            name: dto.name,
            region: dto.prefecture,
            line_name: dto.line,
            longitude: dto.x,
            latitude: dto.y,
            postal_code: dto.postal,
            address: dto.address,
            prev_station_name: dto.prev,
            next_station_name: dto.next,
            distance_meters: dto.distance,
        }
    }
}

/// Configuration for the station search client.
#[derive(Debug, Clone)]
pub struct StationApiConfig {
    /// Base URL; requests go to `{base_url}/station`
    pub base_url: String,
    /// Connect timeout
    pub request_timeout: Duration,
    /// Timeout for the whole call
    pub resource_timeout: Duration,
}

impl StationApiConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set both timeouts.
    pub fn with_timeouts(mut self, request: Duration, resource: Duration) -> Self {
        self.request_timeout = request;
        self.resource_timeout = resource;
        self
    }
}

impl Default for StationApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            resource_timeout: DEFAULT_RESOURCE_TIMEOUT,
        }
    }
}

/// Client for the station search service.
#[derive(Debug, Clone)]
pub struct StationApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl StationApiClient {
    /// Create a new client.
    pub fn new(config: StationApiConfig) -> Result<Self, StationApiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.request_timeout)
            .timeout(config.resource_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Run one `getStations` query.
    async fn get_stations(
        &self,
        params: &[(&str, String)],
    ) -> Result<Vec<StationRecord>, StationApiError> {
        let url = format!("{}/station", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("method", "getStations")])
            .query(params)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StationApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let envelope: StationsEnvelope =
            serde_json::from_str(&body).map_err(|e| StationApiError::Json {
                message: e.to_string(),
            })?;

        if let Some(error) = &envelope.response.error {
            debug!(%error, "station service reported no match");
        }

        Ok(envelope
            .response
            .station
            .into_iter()
            .map(StationRecord::from)
            .collect())
    }
}

/// Fold a call result into an outcome, logging failures.
fn to_outcome(
    query: &str,
    result: Result<Vec<StationRecord>, StationApiError>,
) -> RemoteOutcome<Vec<StationRecord>> {
    match result {
        Ok(records) if records.is_empty() => RemoteOutcome::NotFound,
        Ok(records) => RemoteOutcome::Found(records),
        Err(e) => {
            warn!(query, error = %e, "station search call failed");
            RemoteOutcome::TransientFailure(e.to_string())
        }
    }
}

impl StationSource for StationApiClient {
    async fn stations_by_name(&self, name: &str) -> RemoteOutcome<Vec<StationRecord>> {
        let result = self.get_stations(&[("name", name.to_string())]).await;
        to_outcome(name, result)
    }

    async fn stations_near(&self, longitude: f64, latitude: f64) -> RemoteOutcome<Vec<StationRecord>> {
        let result = self
            .get_stations(&[("x", longitude.to_string()), ("y", latitude.to_string())])
            .await;
        to_outcome(&format!("{longitude},{latitude}"), result)
    }
}
