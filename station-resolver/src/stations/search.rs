//! Free-text station search with a fallback chain.
//!
//! A query is first mapped through the alias table, then tried against
//! the station service spelling by spelling (see [`NameNormalizer`])
//! until one spelling returns stations. A failed call counts as "no
//! stations for that spelling", so one timeout does not end the search.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::client::StationSource;
use crate::domain::StationRecord;
use crate::normalize::NameNormalizer;
use crate::reference::AliasTable;
use crate::remote::RemoteOutcome;

/// Mean Earth radius in meters, for haversine distances.
const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// One spelling tried during a search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchAttempt {
    /// The spelling sent to the service.
    pub query: String,
    /// Number of stations found, or why there were none.
    pub outcome: RemoteOutcome<usize>,
}

/// Everything a search did, in order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchReport {
    /// The query after alias resolution.
    pub canonical_query: String,
    /// Spellings tried, in the order they were tried.
    pub attempts: Vec<SearchAttempt>,
    /// Stations from the first spelling that found any.
    pub records: Vec<StationRecord>,
}

impl SearchReport {
    /// True if every attempt failed in transit, as opposed to finding
    /// nothing. A report with no attempts is not a failure.
    pub fn all_attempts_failed(&self) -> bool {
        !self.attempts.is_empty()
            && self
                .attempts
                .iter()
                .all(|a| a.outcome.is_transient_failure())
    }
}

/// Station search over a [`StationSource`].
#[derive(Debug, Clone)]
pub struct StationSearchClient<S> {
    source: S,
    aliases: Arc<AliasTable>,
    normalizer: NameNormalizer,
}

impl<S: StationSource> StationSearchClient<S> {
    pub fn new(source: S, aliases: Arc<AliasTable>) -> Self {
        Self {
            source,
            aliases,
            normalizer: NameNormalizer::new(),
        }
    }

    /// Stations matching `raw_name`, or an empty list.
    ///
    /// An empty list means either that no spelling matched or that the
    /// service could not be reached; use [`search_report`](Self::search_report)
    /// to tell which.
    pub async fn search(&self, raw_name: &str) -> Vec<StationRecord> {
        self.search_report(raw_name).await.records
    }

    /// Run the fallback chain and report every attempt.
    pub async fn search_report(&self, raw_name: &str) -> SearchReport {
        let canonical = self.aliases.resolve_alias(raw_name.trim()).to_string();
        let mut report = SearchReport {
            canonical_query: canonical.clone(),
            ..SearchReport::default()
        };

        for variant in self.normalizer.variants(&canonical) {
            let outcome = self.source.stations_by_name(&variant).await;
            debug!(raw = raw_name, query = %variant, found = outcome.is_found(), "station search attempt");

            match outcome {
                RemoteOutcome::Found(records) => {
                    report.attempts.push(SearchAttempt {
                        query: variant,
                        outcome: RemoteOutcome::Found(records.len()),
                    });
                    report.records = records;
                    return report;
                }
                other => report.attempts.push(SearchAttempt {
                    query: variant,
                    outcome: other.map(|_| 0),
                }),
            }
        }

        report
    }

    /// Stations within `radius_meters` of a point.
    ///
    /// One call, no fallback. Distance is the service's own figure when
    /// it gives one, otherwise computed from the record's coordinates.
    pub async fn nearby_stations(
        &self,
        longitude: f64,
        latitude: f64,
        radius_meters: f64,
    ) -> Vec<StationRecord> {
        if radius_meters.is_nan() || radius_meters < 0.0 {
            return Vec::new();
        }

        let records = self
            .source
            .stations_near(longitude, latitude)
            .await
            .found()
            .unwrap_or_default();

        records
            .into_iter()
            .filter(|record| {
                let distance = record.reported_distance().unwrap_or_else(|| {
                    haversine_meters(longitude, latitude, record.longitude, record.latitude)
                });
                distance <= radius_meters
            })
            .collect()
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }
}

/// Great-circle distance between two points, in meters.
pub fn haversine_meters(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().asin()
}
