//! Catalog-first identifier resolution.
//!
//! The transit catalog is asked first. If it cannot answer, for any
//! reason, the identifier is synthesized locally instead. An unreachable
//! catalog therefore never fails a resolution; only an unmapped line (or a
//! blank station name) does.

use serde::Serialize;
use tracing::debug;

use crate::domain::{ResolveError, StationId};
use crate::odpt::StationCatalog;
use crate::remote::RemoteOutcome;
use crate::synthesize::{IdentifierSynthesizer, railway_for_line};

/// Where a resolved identifier came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    /// A previous resolution in this process.
    Cache,
    /// The transit catalog.
    Catalog,
    /// Local synthesis.
    Synthesized,
}

/// A resolved station identifier and its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub id: StationId,
    pub source: ResolutionSource,
}

/// Resolves identifiers against the catalog, falling back to synthesis.
#[derive(Debug, Clone)]
pub struct CatalogReconciler<C> {
    catalog: C,
    synthesizer: IdentifierSynthesizer,
}

impl<C: StationCatalog> CatalogReconciler<C> {
    pub fn new(catalog: C, synthesizer: IdentifierSynthesizer) -> Self {
        Self {
            catalog,
            synthesizer,
        }
    }

    /// Resolve `station_name` on `line_name`.
    ///
    /// Makes at most one catalog call, with no retry.
    pub async fn resolve(&self, station_name: &str, line_name: &str) -> Result<Resolution, ResolveError> {
        let railway = railway_for_line(self.synthesizer.railways(), line_name)?;
        if station_name.trim().is_empty() {
            return Err(ResolveError::BlankStationName);
        }

        match self.catalog.find_station_on_railway(station_name, &railway).await {
            RemoteOutcome::Found(id) => Ok(Resolution {
                id,
                source: ResolutionSource::Catalog,
            }),
            outcome => {
                debug!(station = station_name, %railway, ?outcome, "catalog had no answer, synthesizing");
                let id = self.synthesizer.synthesize_on(station_name, &railway)?;
                Ok(Resolution {
                    id,
                    source: ResolutionSource::Synthesized,
                })
            }
        }
    }

    pub fn synthesizer(&self) -> &IdentifierSynthesizer {
        &self.synthesizer
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }
}
