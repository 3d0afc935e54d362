//! Namespaced railway and station identifiers.

use std::fmt;

use serde::Serialize;

const RAILWAY_KIND: &str = "Railway";
const STATION_KIND: &str = "Station";

/// Error returned when parsing a malformed railway identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid railway id {id:?}: {reason}")]
pub struct InvalidRailwayId {
    id: String,
    reason: &'static str,
}

/// Error returned when parsing a malformed station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id {id:?}: {reason}")]
pub struct InvalidStationId {
    id: String,
    reason: &'static str,
}

/// A railway identifier of the form `<ns>Railway:<Operator>.<Line>`.
///
/// `<ns>` is everything before `Railway` in the namespace, including its
/// trailing dot (`"odpt."` for `odpt.Railway:JR-East.Yamanote`). It may be
/// empty.
///
/// # Examples
///
/// ```
/// use station_resolver::domain::RailwayId;
///
/// let id = RailwayId::parse("odpt.Railway:JR-East.Yamanote").unwrap();
/// assert_eq!(id.operator(), "JR-East");
/// assert_eq!(id.line(), "Yamanote");
///
/// // Operator and line must both be present
/// assert!(RailwayId::parse("odpt.Railway:Yamanote").is_err());
/// assert!(RailwayId::parse("JR-East.Yamanote").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RailwayId {
    namespace: String,
    operator: String,
    line: String,
}

impl RailwayId {
    /// Parse a railway identifier.
    pub fn parse(s: &str) -> Result<Self, InvalidRailwayId> {
        let invalid = |reason| InvalidRailwayId {
            id: s.to_string(),
            reason,
        };

        let (kind, body) = s.split_once(':').ok_or(invalid("missing ':' separator"))?;
        let namespace = kind
            .strip_suffix(RAILWAY_KIND)
            .filter(|ns| ns.is_empty() || ns.ends_with('.'))
            .ok_or(invalid("namespace must end in 'Railway'"))?;

        let mut parts = body.split('.');
        let (Some(operator), Some(line), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid("expected exactly <Operator>.<Line>"));
        };

        if operator.is_empty() || line.is_empty() {
            return Err(invalid("operator and line must be non-empty"));
        }
        if body.chars().any(char::is_whitespace) {
            return Err(invalid("must not contain whitespace"));
        }

        Ok(Self {
            namespace: namespace.to_string(),
            operator: operator.to_string(),
            line: line.to_string(),
        })
    }

    /// The operator component (e.g. `JR-East`).
    pub fn operator(&self) -> &str {
        &self.operator
    }

    /// The line component (e.g. `Yamanote`).
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Build the station identifier for a romanized station on this railway.
    pub fn station(&self, romanized: &str) -> StationId {
        StationId(format!(
            "{}{STATION_KIND}:{}.{}.{romanized}",
            self.namespace, self.operator, self.line
        ))
    }
}

impl fmt::Debug for RailwayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RailwayId({self})")
    }
}

impl fmt::Display for RailwayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{RAILWAY_KIND}:{}.{}",
            self.namespace, self.operator, self.line
        )
    }
}

/// A canonical station identifier, `<ns>Station:<Operator>.<Line>.<Station>`.
///
/// There is no conversion back from an identifier to a free-text name.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    /// Parse a station identifier returned by the transit catalog.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let invalid = |reason| InvalidStationId {
            id: s.to_string(),
            reason,
        };

        let (kind, body) = s.split_once(':').ok_or(invalid("missing ':' separator"))?;
        if !kind.ends_with(STATION_KIND) {
            return Err(invalid("namespace must end in 'Station'"));
        }
        let parts: Vec<&str> = body.split('.').collect();
        if parts.len() < 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(invalid("expected <Operator>.<Line>.<Station>"));
        }

        Ok(Self(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_railway() {
        let id = RailwayId::parse("odpt.Railway:TokyoMetro.Ginza").unwrap();
        assert_eq!(id.operator(), "TokyoMetro");
        assert_eq!(id.line(), "Ginza");
        assert_eq!(id.to_string(), "odpt.Railway:TokyoMetro.Ginza");
    }

    #[test]
    fn parse_railway_without_namespace_prefix() {
        let id = RailwayId::parse("Railway:Toei.Oedo").unwrap();
        assert_eq!(id.to_string(), "Railway:Toei.Oedo");
        assert_eq!(id.station("Tochomae").as_str(), "Station:Toei.Oedo.Tochomae");
    }

    #[test]
    fn reject_missing_colon() {
        assert!(RailwayId::parse("odpt.Railway.JR-East.Yamanote").is_err());
    }

    #[test]
    fn reject_wrong_kind() {
        assert!(RailwayId::parse("odpt.Station:JR-East.Yamanote").is_err());
        assert!(RailwayId::parse("odptRailway:JR-East.Yamanote").is_err());
    }

    #[test]
    fn reject_wrong_depth() {
        assert!(RailwayId::parse("odpt.Railway:Yamanote").is_err());
        assert!(RailwayId::parse("odpt.Railway:JR-East.Yamanote.Extra").is_err());
        assert!(RailwayId::parse("odpt.Railway:.Yamanote").is_err());
        assert!(RailwayId::parse("odpt.Railway:JR-East.").is_err());
        assert!(RailwayId::parse("odpt.Railway:JR East.Yamanote").is_err());
    }

    #[test]
    fn station_composes_namespace() {
        let id = RailwayId::parse("odpt.Railway:JR-East.Yamanote").unwrap();
        assert_eq!(
            id.station("Tokyo").as_str(),
            "odpt.Station:JR-East.Yamanote.Tokyo"
        );
    }

    #[test]
    fn parse_station_id() {
        let id = StationId::parse("odpt.Station:TokyoMetro.Ginza.Shibuya").unwrap();
        assert_eq!(id.to_string(), "odpt.Station:TokyoMetro.Ginza.Shibuya");
        assert_eq!(format!("{id:?}"), "StationId(odpt.Station:TokyoMetro.Ginza.Shibuya)");

        assert!(StationId::parse("odpt.Station:TokyoMetro.Ginza").is_err());
        assert!(StationId::parse("odpt.Railway:TokyoMetro.Ginza.Shibuya").is_err());
        assert!(StationId::parse("odpt.Station:TokyoMetro..Shibuya").is_err());
    }

    #[test]
    fn station_id_serializes_as_string() {
        let id = StationId::parse("odpt.Station:Toei.Oedo.Tochomae").unwrap();
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            "\"odpt.Station:Toei.Oedo.Tochomae\""
        );
    }
}
