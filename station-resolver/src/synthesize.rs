//! Offline construction of station identifiers.
//!
//! A synthesized identifier is well-formed but unverified: it is built
//! from the railway catalog and a romanization of the station name, and
//! nothing checks that the transit catalog spells the station the same way.

use std::sync::Arc;

use crate::domain::{RailwayId, ResolveError, StationId};
use crate::reference::RailwayCatalog;
use crate::romanize::Romanizer;

/// Look up and parse the railway id for a line name.
pub fn railway_for_line(catalog: &RailwayCatalog, line_name: &str) -> Result<RailwayId, ResolveError> {
    let raw = catalog
        .lookup(line_name)
        .ok_or_else(|| ResolveError::UnknownRailway(line_name.to_string()))?;
    RailwayId::parse(raw).map_err(|source| ResolveError::MalformedRailwayId {
        line: line_name.to_string(),
        source,
    })
}

/// Builds best-effort station identifiers from names.
#[derive(Clone)]
pub struct IdentifierSynthesizer {
    railways: Arc<RailwayCatalog>,
    romanizer: Arc<dyn Romanizer>,
}

impl IdentifierSynthesizer {
    pub fn new(railways: Arc<RailwayCatalog>, romanizer: Arc<dyn Romanizer>) -> Self {
        Self {
            railways,
            romanizer,
        }
    }

    /// Synthesize the identifier for `station_name` on `line_name`.
    ///
    /// Fails with `UnknownRailway` before romanizing anything if the line
    /// is not in the catalog.
    pub fn synthesize(&self, station_name: &str, line_name: &str) -> Result<StationId, ResolveError> {
        let railway = railway_for_line(&self.railways, line_name)?;
        self.synthesize_on(station_name, &railway)
    }

    /// Synthesize the identifier for `station_name` on an already-parsed railway.
    ///
    /// Never fails for a non-blank name: when the romanizer returns nothing
    /// usable, the name's code points stand in for it.
    pub fn synthesize_on(&self, station_name: &str, railway: &RailwayId) -> Result<StationId, ResolveError> {
        let name = station_name.trim();
        if name.is_empty() {
            return Err(ResolveError::BlankStationName);
        }

        let mut romanized = id_component(&self.romanizer.romanize(name));
        if romanized.is_empty() {
            romanized = code_points(name);
        }

        Ok(railway.station(&romanized))
    }

    /// The railway catalog this synthesizer reads.
    pub fn railways(&self) -> &RailwayCatalog {
        &self.railways
    }
}

/// Strip characters that would break the identifier's structure.
fn id_component(romanized: &str) -> String {
    romanized
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.' && *c != ':')
        .collect()
}

/// `U6771U4EAC` for 東京; whitespace and separators are skipped.
fn code_points(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '.' && *c != ':')
        .map(|c| format!("U{:04X}", c as u32))
        .collect()
}

impl std::fmt::Debug for IdentifierSynthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentifierSynthesizer")
            .field("railways", &self.railways.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::romanize::TableRomanizer;

    fn yamanote_only() -> Arc<RailwayCatalog> {
        Arc::new(RailwayCatalog::from_entries([(
            "JR山手線",
            "odpt.Railway:JR-East.Yamanote",
        )]))
    }

    #[test]
    fn composes_operator_line_and_romanized_name() {
        let romanizer = |s: &str| if s == "東京" { "Tokyo".to_string() } else { String::new() };
        let synth = IdentifierSynthesizer::new(yamanote_only(), Arc::new(romanizer));

        let id = synth.synthesize("東京", "JR山手線").unwrap();

        assert_eq!(id.as_str(), "odpt.Station:JR-East.Yamanote.Tokyo");
    }

    #[test]
    fn unknown_line_never_romanizes() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let romanizer = move |s: &str| {
            counter.fetch_add(1, Ordering::SeqCst);
            s.to_string()
        };
        let synth = IdentifierSynthesizer::new(yamanote_only(), Arc::new(romanizer));

        let err = synth.synthesize("東京", "UnknownLine123").unwrap_err();

        assert_eq!(err, ResolveError::UnknownRailway("UnknownLine123".into()));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn malformed_catalog_entry_is_reported() {
        let catalog = Arc::new(RailwayCatalog::from_entries([("壊れた線", "odpt.Railway:Broken")]));
        let synth = IdentifierSynthesizer::new(catalog, Arc::new(TableRomanizer::builtin()));

        let err = synth.synthesize("東京", "壊れた線").unwrap_err();

        assert!(matches!(err, ResolveError::MalformedRailwayId { ref line, .. } if line == "壊れた線"));
    }

    #[test]
    fn unromanizable_name_falls_back_to_code_points() {
        let synth = IdentifierSynthesizer::new(yamanote_only(), Arc::new(|_: &str| String::new()));

        let id = synth.synthesize("東京", "JR山手線").unwrap();

        assert_eq!(id.as_str(), "odpt.Station:JR-East.Yamanote.U6771U4EAC");
        assert!(StationId::parse(id.as_str()).is_ok());
    }

    #[test]
    fn punctuation_only_name_still_synthesizes() {
        let synth = IdentifierSynthesizer::new(
            Arc::new(RailwayCatalog::builtin()),
            Arc::new(TableRomanizer::builtin()),
        );

        let id = synth.synthesize("・", "JR山手線").unwrap();

        assert_eq!(id.as_str(), "odpt.Station:JR-East.Yamanote.U30FB");
    }

    #[test]
    fn blank_name_is_rejected() {
        let synth = IdentifierSynthesizer::new(yamanote_only(), Arc::new(TableRomanizer::builtin()));

        assert_eq!(synth.synthesize("  ", "JR山手線").unwrap_err(), ResolveError::BlankStationName);
    }

    #[test]
    fn builtin_tables_synthesize_kanji_names() {
        let synth = IdentifierSynthesizer::new(
            Arc::new(RailwayCatalog::builtin()),
            Arc::new(TableRomanizer::builtin()),
        );

        let cases = [
            ("中野", "JR中央線(快速)", "odpt.Station:JR-East.ChuoRapid.Nakano"),
            ("吉祥寺", "JR中央線(快速)", "odpt.Station:JR-East.ChuoRapid.Kichijoji"),
            ("北千住", "東京メトロ日比谷線", "odpt.Station:TokyoMetro.Hibiya.Kitasenju"),
        ];
        for (station, line, expected) in cases {
            assert_eq!(synth.synthesize(station, line).unwrap().as_str(), expected);
        }
    }

    #[test]
    fn separators_are_stripped_from_romanization() {
        let synth = IdentifierSynthesizer::new(
            yamanote_only(),
            Arc::new(|_: &str| "Takanawa Gate.way:".to_string()),
        );

        let id = synth.synthesize("高輪ゲートウェイ", "JR山手線").unwrap();

        assert_eq!(id.as_str(), "odpt.Station:JR-East.Yamanote.TakanawaGateway");
        assert!(StationId::parse(id.as_str()).is_ok());
    }

    #[test]
    fn builtin_tables_synthesize_kana_names() {
        let synth = IdentifierSynthesizer::new(
            Arc::new(RailwayCatalog::builtin()),
            Arc::new(TableRomanizer::builtin()),
        );

        let id = synth.synthesize("とうきょうスカイツリー", "東武伊勢崎線").unwrap();

        assert_eq!(id.as_str(), "odpt.Station:Tobu.TobuSkytree.Tokyosukaitsuri");
    }
}
