//! Transit catalog HTTP client.

use std::collections::BTreeSet;
use std::future::Future;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use super::error::OdptError;
use crate::domain::{RailwayId, StationId};
use crate::remote::RemoteOutcome;

/// Default base URL for the catalog API.
pub const DEFAULT_BASE_URL: &str = "https://api.odpt.org/api/v4";

/// Looks up authoritative station identifiers.
pub trait StationCatalog: Send + Sync {
    /// The identifier of the station called `station_name` on `railway`.
    ///
    /// `Found` only when exactly one station matches.
    fn find_station_on_railway(
        &self,
        station_name: &str,
        railway: &RailwayId,
    ) -> impl Future<Output = RemoteOutcome<StationId>> + Send;
}

/// The only field we need from a catalog station.
#[derive(Debug, Deserialize)]
struct CatalogStation {
    #[serde(rename = "owl:sameAs")]
    same_as: String,
}

/// Configuration for the catalog client.
#[derive(Debug, Clone)]
pub struct OdptConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Consumer key; lookups are skipped without one
    pub consumer_key: Option<String>,
    /// Connect timeout
    pub request_timeout: Duration,
    /// Timeout for the whole call
    pub resource_timeout: Duration,
}

impl OdptConfig {
    /// Create a config with the given consumer key.
    pub fn new(consumer_key: impl Into<String>) -> Self {
        Self {
            consumer_key: Some(consumer_key.into()),
            ..Self::default()
        }
    }

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

impl Default for OdptConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            consumer_key: None,
            request_timeout: Duration::from_secs(5),
            resource_timeout: Duration::from_secs(10),
        }
    }
}

/// Client for the transit catalog API.
#[derive(Debug, Clone)]
pub struct OdptClient {
    http: reqwest::Client,
    base_url: String,
    consumer_key: Option<String>,
}

impl OdptClient {
    pub fn new(config: OdptConfig) -> Result<Self, OdptError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.request_timeout)
            .timeout(config.resource_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            consumer_key: config.consumer_key,
        })
    }

    /// Every distinct station id the catalog lists under this name and railway.
    async fn station_ids(
        &self,
        station_name: &str,
        railway: &RailwayId,
    ) -> Result<BTreeSet<String>, OdptError> {
        let key = self
            .consumer_key
            .as_deref()
            .ok_or_else(|| OdptError::NotConfigured("no consumer key".to_string()))?;

        let url = format!("{}/odpt:Station", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("odpt:railway", railway.to_string()),
                ("dc:title", station_name.to_string()),
                ("acl:consumerKey", key.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(OdptError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OdptError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let stations: Vec<CatalogStation> =
            serde_json::from_str(&body).map_err(|e| OdptError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        Ok(stations.into_iter().map(|s| s.same_as).collect())
    }
}

impl StationCatalog for OdptClient {
    async fn find_station_on_railway(
        &self,
        station_name: &str,
        railway: &RailwayId,
    ) -> RemoteOutcome<StationId> {
        let ids = match self.station_ids(station_name, railway).await {
            Ok(ids) => ids,
            Err(e) => {
                warn!(station = station_name, %railway, error = %e, "catalog lookup failed");
                return RemoteOutcome::TransientFailure(e.to_string());
            }
        };

        let mut ids = ids.into_iter();
        match (ids.next(), ids.next()) {
            (Some(id), None) => match StationId::parse(&id) {
                Ok(id) => RemoteOutcome::Found(id),
                Err(e) => {
                    warn!(station = station_name, %railway, error = %e, "catalog returned a malformed id");
                    RemoteOutcome::TransientFailure(e.to_string())
                }
            },
            (None, _) => RemoteOutcome::NotFound,
            (Some(_), Some(_)) => {
                debug!(station = station_name, %railway, "catalog lookup is ambiguous");
                RemoteOutcome::NotFound
            }
        }
    }
}
