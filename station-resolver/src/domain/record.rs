//! Raw station records as returned by the station search service.

use serde::Serialize;

/// One station on one line, as reported by the station search service.
///
/// Records are plain values: produced by a search, consumed by the
/// resolution that asked for them, then dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationRecord {
    /// Station name as the search service spells it.
    pub name: String,
    /// Prefecture the station is in.
    pub region: String,
    /// Line name in the search service's vocabulary (e.g. "JR山手線").
    pub line_name: String,
    pub longitude: f64,
    pub latitude: f64,
    pub postal_code: Option<String>,
    pub address: Option<String>,
    pub prev_station_name: Option<String>,
    pub next_station_name: Option<String>,
    /// Distance from a geo query point, verbatim (e.g. "320m").
    pub distance_meters: Option<String>,
}

impl StationRecord {
    /// Create a record with just the required fields.
    pub fn new(
        name: impl Into<String>,
        region: impl Into<String>,
        line_name: impl Into<String>,
        longitude: f64,
        latitude: f64,
    ) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            line_name: line_name.into(),
            longitude,
            latitude,
            postal_code: None,
            address: None,
            prev_station_name: None,
            next_station_name: None,
            distance_meters: None,
        }
    }

    /// Parse the reported distance into meters.
    ///
    /// Accepts a leading run of digits with an optional `m` suffix, which
    /// is how the search service formats it. Anything else yields `None`.
    pub fn reported_distance(&self) -> Option<f64> {
        let raw = self.distance_meters.as_deref()?.trim();
        let digits = raw.strip_suffix('m').unwrap_or(raw).trim();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_distance(d: &str) -> StationRecord {
        let mut record = StationRecord::new("渋谷", "東京都", "JR山手線", 139.701238, 35.658871);
        record.distance_meters = Some(d.to_string());
        record
    }

    #[test]
    fn reported_distance_parses_meters() {
        assert_eq!(with_distance("320m").reported_distance(), Some(320.0));
        assert_eq!(with_distance("45").reported_distance(), Some(45.0));
        assert_eq!(with_distance(" 1200m ").reported_distance(), Some(1200.0));
    }

    #[test]
    fn reported_distance_rejects_garbage() {
        assert_eq!(with_distance("").reported_distance(), None);
        assert_eq!(with_distance("m").reported_distance(), None);
        assert_eq!(with_distance("1.2km").reported_distance(), None);

        let record = StationRecord::new("渋谷", "東京都", "JR山手線", 0.0, 0.0);
        assert_eq!(record.reported_distance(), None);
    }
}
