//! End-to-end station resolution.
//!
//! Free text goes in; canonical station identifiers come out:
//!
//! 1. alias table and spelling fallbacks find raw station records
//! 2. each record is resolved against the transit catalog, or synthesized
//! 3. results are memoized per (station, line) for the life of the process

use std::sync::Arc;

use futures::future::join_all;
use serde::Serialize;
use tracing::{debug, warn};

use crate::cache::{CacheKey, MemoryResolutionCache, ResolutionCache};
use crate::config::{ConfigError, ResolverConfig};
use crate::domain::{ResolveError, StationRecord};
use crate::odpt::{OdptClient, StationCatalog};
use crate::reconcile::{CatalogReconciler, Resolution, ResolutionSource};
use crate::reference::{AliasTable, RailwayCatalog};
use crate::romanize::{Romanizer, TableRomanizer};
use crate::stations::{SearchReport, StationApiClient, StationSearchClient, StationSource};
use crate::synthesize::IdentifierSynthesizer;

/// A station record together with its resolved identifier.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedStation {
    pub record: StationRecord,
    pub resolution: Resolution,
}

/// The production resolver: HTTP clients and an in-memory cache.
pub type HttpStationResolver = StationResolver<StationApiClient, OdptClient>;

/// Resolves free-text station names to canonical identifiers.
#[derive(Debug)]
pub struct StationResolver<S, C, K = MemoryResolutionCache> {
    search: StationSearchClient<S>,
    reconciler: CatalogReconciler<C>,
    cache: K,
}

impl<S, C, K> StationResolver<S, C, K>
where
    S: StationSource,
    C: StationCatalog,
    K: ResolutionCache,
{
    pub fn new(search: StationSearchClient<S>, reconciler: CatalogReconciler<C>, cache: K) -> Self {
        Self {
            search,
            reconciler,
            cache,
        }
    }

    /// Resolve one station on one line.
    ///
    /// Fails only on an unknown line, a blank station name, or a malformed
    /// railway id in the tables; remote failures fall back to synthesis.
    pub async fn resolve(&self, station_name: &str, line_name: &str) -> Result<Resolution, ResolveError> {
        let key = CacheKey::new(station_name, line_name);

        if let Some(id) = self.cache.get(&key).await {
            return Ok(Resolution {
                id,
                source: ResolutionSource::Cache,
            });
        }

        let resolution = self.reconciler.resolve(station_name, line_name).await?;
        debug!(%key, id = %resolution.id, source = ?resolution.source, "resolved station");
        self.cache.put(key, resolution.id.clone()).await;

        Ok(resolution)
    }

    /// Resolve the station a search returned.
    pub async fn resolve_record(&self, record: &StationRecord) -> Result<Resolution, ResolveError> {
        self.resolve(&record.name, &record.line_name).await
    }

    /// Search for `raw_name` and resolve every station found.
    ///
    /// Stations that cannot be resolved (usually because their line is not
    /// in the railway catalog) are left out.
    pub async fn resolve_query(&self, raw_name: &str) -> Vec<ResolvedStation> {
        let records = self.search.search(raw_name).await;
        let resolutions = join_all(records.iter().map(|record| self.resolve_record(record))).await;

        records
            .into_iter()
            .zip(resolutions)
            .filter_map(|(record, result)| match result {
                Ok(resolution) => Some(ResolvedStation { record, resolution }),
                Err(e @ ResolveError::MalformedRailwayId { .. }) => {
                    warn!(station = %record.name, line = %record.line_name, error = %e, "railway catalog defect");
                    None
                }
                Err(e) => {
                    debug!(station = %record.name, line = %record.line_name, error = %e, "skipping unresolvable station");
                    None
                }
            })
            .collect()
    }

    /// Resolve several (station, line) pairs concurrently.
    ///
    /// Results are in input order.
    pub async fn resolve_all<T: AsRef<str>>(
        &self,
        legs: &[(T, T)],
    ) -> Vec<Result<Resolution, ResolveError>> {
        join_all(
            legs.iter()
                .map(|(station, line)| self.resolve(station.as_ref(), line.as_ref())),
        )
        .await
    }

    /// Free-text search without resolution.
    pub async fn search(&self, raw_name: &str) -> SearchReport {
        self.search.search_report(raw_name).await
    }

    /// Stations within `radius_meters` of a point.
    pub async fn nearby_stations(&self, longitude: f64, latitude: f64, radius_meters: f64) -> Vec<StationRecord> {
        self.search.nearby_stations(longitude, latitude, radius_meters).await
    }

    /// Forget every memoized resolution.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn search_client(&self) -> &StationSearchClient<S> {
        &self.search
    }

    pub fn reconciler(&self) -> &CatalogReconciler<C> {
        &self.reconciler
    }

    pub fn cache(&self) -> &K {
        &self.cache
    }
}

impl HttpStationResolver {
    /// Build a resolver with the builtin reference tables and romanizer.
    pub fn from_config(config: &ResolverConfig) -> Result<Self, ConfigError> {
        Self::with_tables(
            config,
            Arc::new(AliasTable::builtin()),
            Arc::new(RailwayCatalog::builtin()),
            Arc::new(TableRomanizer::builtin()),
        )
    }

    /// Build a resolver with the given reference tables and romanizer.
    pub fn with_tables(
        config: &ResolverConfig,
        aliases: Arc<AliasTable>,
        railways: Arc<RailwayCatalog>,
        romanizer: Arc<dyn Romanizer>,
    ) -> Result<Self, ConfigError> {
        let source = StationApiClient::new(config.station_api.clone())
            .map_err(|e| ConfigError::Client(e.to_string()))?;
        let catalog =
            OdptClient::new(config.odpt.clone()).map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self::new(
            StationSearchClient::new(source, aliases),
            CatalogReconciler::new(catalog, IdentifierSynthesizer::new(railways, romanizer)),
            MemoryResolutionCache::new(&config.cache),
        ))
    }
}
