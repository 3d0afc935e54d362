//! Runtime configuration.
//!
//! Everything has a default; the environment can override each setting.

use std::net::SocketAddr;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::odpt::OdptConfig;
use crate::stations::StationApiConfig;

/// Default listen address for the HTTP server.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Configuration errors, reported at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable has an unusable value
    #[error("invalid {name}={value:?}: {reason}")]
    InvalidVar {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// An HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// Configuration for the whole resolver.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Station search service client settings
    pub station_api: StationApiConfig,
    /// Transit catalog client settings
    pub odpt: OdptConfig,
    /// Resolution cache settings
    pub cache: CacheConfig,
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,
}

impl ResolverConfig {
    /// Read configuration from the process environment.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `STATION_API_BASE_URL` | `https://express.heartrails.com/api` |
    /// | `ODPT_BASE_URL` | `https://api.odpt.org/api/v4` |
    /// | `ODPT_CONSUMER_KEY` | unset (catalog lookups skipped) |
    /// | `RESOLVER_REQUEST_TIMEOUT_SECS` | 5 |
    /// | `RESOLVER_RESOURCE_TIMEOUT_SECS` | 10 |
    /// | `RESOLVER_CACHE_CAPACITY` | unset (unbounded) |
    /// | `BIND_ADDR` | `127.0.0.1:3000` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup` instead of the environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = lookup("STATION_API_BASE_URL") {
            config.station_api = config.station_api.with_base_url(url);
        }
        if let Some(url) = lookup("ODPT_BASE_URL") {
            config.odpt = config.odpt.with_base_url(url);
        }
        config.odpt.consumer_key = lookup("ODPT_CONSUMER_KEY").filter(|k| !k.trim().is_empty());

        let request = parse_secs(&lookup, "RESOLVER_REQUEST_TIMEOUT_SECS")?
            .unwrap_or(config.station_api.request_timeout);
        let resource = parse_secs(&lookup, "RESOLVER_RESOURCE_TIMEOUT_SECS")?
            .unwrap_or(config.station_api.resource_timeout);
        config = config.with_timeouts(request, resource);

        if let Some(raw) = lookup("RESOLVER_CACHE_CAPACITY") {
            let capacity = raw.trim().parse::<u64>().map_err(|e| ConfigError::InvalidVar {
                name: "RESOLVER_CACHE_CAPACITY",
                value: raw.clone(),
                reason: e.to_string(),
            })?;
            config.cache = CacheConfig::bounded(capacity);
        }

        if let Some(raw) = lookup("BIND_ADDR") {
            config.bind_addr = raw.trim().parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidVar {
                    name: "BIND_ADDR",
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        Ok(config)
    }

    /// Set timeouts for both remote services.
    pub fn with_timeouts(mut self, request: Duration, resource: Duration) -> Self {
        self.station_api = self.station_api.with_timeouts(request, resource);
        self.odpt = self.odpt.with_timeouts(request, resource);
        self
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            station_api: StationApiConfig::default(),
            odpt: OdptConfig::default(),
            cache: CacheConfig::default(),
            bind_addr: DEFAULT_BIND_ADDR
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 3000))),
        }
    }
}

/// Parse a positive whole number of seconds.
fn parse_secs(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<Duration>, ConfigError> {
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::InvalidVar {
            name,
            value: raw,
            reason: "must be at least 1".to_string(),
        }),
        Ok(secs) => Ok(Some(Duration::from_secs(secs))),
        Err(e) => Err(ConfigError::InvalidVar {
            name,
            value: raw,
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<ResolverConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ResolverConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let config = from_pairs(&[]).unwrap();

        assert_eq!(config.station_api.base_url, "https://express.heartrails.com/api");
        assert_eq!(config.odpt.base_url, "https://api.odpt.org/api/v4");
        assert!(config.odpt.consumer_key.is_none());
        assert_eq!(config.station_api.request_timeout, Duration::from_secs(5));
        assert_eq!(config.odpt.resource_timeout, Duration::from_secs(10));
        assert_eq!(config.cache.max_capacity, None);
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    }

    #[test]
    fn overrides() {
        let config = from_pairs(&[
            ("STATION_API_BASE_URL", "http://localhost:9000"),
            ("ODPT_BASE_URL", "http://localhost:9001"),
            ("ODPT_CONSUMER_KEY", "secret"),
            ("RESOLVER_REQUEST_TIMEOUT_SECS", "2"),
            ("RESOLVER_RESOURCE_TIMEOUT_SECS", "4"),
            ("RESOLVER_CACHE_CAPACITY", "500"),
            ("BIND_ADDR", "0.0.0.0:8080"),
        ])
        .unwrap();

        assert_eq!(config.station_api.base_url, "http://localhost:9000");
        assert_eq!(config.odpt.base_url, "http://localhost:9001");
        assert_eq!(config.odpt.consumer_key.as_deref(), Some("secret"));
        assert_eq!(config.odpt.request_timeout, Duration::from_secs(2));
        assert_eq!(config.station_api.resource_timeout, Duration::from_secs(4));
        assert_eq!(config.cache.max_capacity, Some(500));
        assert_eq!(config.bind_addr.port(), 8080);
    }

    #[test]
    fn blank_consumer_key_is_unset() {
        let config = from_pairs(&[("ODPT_CONSUMER_KEY", "  ")]).unwrap();
        assert!(config.odpt.consumer_key.is_none());
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(from_pairs(&[("RESOLVER_REQUEST_TIMEOUT_SECS", "soon")]).is_err());
        assert!(from_pairs(&[("RESOLVER_RESOURCE_TIMEOUT_SECS", "0")]).is_err());
        assert!(from_pairs(&[("RESOLVER_CACHE_CAPACITY", "-1")]).is_err());

        let err = from_pairs(&[("BIND_ADDR", "nowhere")]).unwrap_err();
        assert!(err.to_string().starts_with("invalid BIND_ADDR=\"nowhere\""));
    }
}
