//! Shared test fixtures: in-memory authorities and a throwaway HTTP server.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;

use crate::domain::{RailwayId, StationId, StationRecord};
use crate::odpt::StationCatalog;
use crate::remote::RemoteOutcome;
use crate::stations::StationSource;

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A record on `line`, placed at Shibuya.
pub fn record(name: &str, line: &str) -> StationRecord {
    StationRecord::new(name, "東京都", line, 139.701238, 35.658871)
}

/// Station search service stand-in that records every name query.
#[derive(Debug, Default)]
pub struct MockStationSource {
    by_name: HashMap<String, Vec<StationRecord>>,
    failing: HashSet<String>,
    nearby: Vec<StationRecord>,
    nearby_fails: bool,
    queries: Mutex<Vec<String>>,
}

impl MockStationSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_station(self, query: &str, record: StationRecord) -> Self {
        self.with_stations(query, vec![record])
    }

    pub fn with_stations(mut self, query: &str, records: Vec<StationRecord>) -> Self {
        self.by_name.entry(query.to_string()).or_default().extend(records);
        self
    }

    /// Make queries for `query` fail in transit.
    pub fn failing_on(mut self, query: &str) -> Self {
        self.failing.insert(query.to_string());
        self
    }

    pub fn with_nearby(mut self, records: Vec<StationRecord>) -> Self {
        self.nearby = records;
        self
    }

    pub fn failing_nearby(mut self) -> Self {
        self.nearby_fails = true;
        self
    }

    /// Every name queried so far, in order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl StationSource for MockStationSource {
    async fn stations_by_name(&self, name: &str) -> RemoteOutcome<Vec<StationRecord>> {
        self.queries.lock().unwrap().push(name.to_string());

        if self.failing.contains(name) {
            return RemoteOutcome::TransientFailure("simulated timeout".to_string());
        }
        match self.by_name.get(name) {
            Some(records) if !records.is_empty() => RemoteOutcome::Found(records.clone()),
            _ => RemoteOutcome::NotFound,
        }
    }

    async fn stations_near(&self, _longitude: f64, _latitude: f64) -> RemoteOutcome<Vec<StationRecord>> {
        if self.nearby_fails {
            return RemoteOutcome::TransientFailure("simulated timeout".to_string());
        }
        if self.nearby.is_empty() {
            RemoteOutcome::NotFound
        } else {
            RemoteOutcome::Found(self.nearby.clone())
        }
    }
}

/// Transit catalog stand-in that counts lookups.
#[derive(Debug, Default)]
pub struct MockCatalog {
    stations: HashMap<(String, String), StationId>,
    unreachable: bool,
    calls: AtomicUsize,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog whose every lookup fails in transit.
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub fn with_station(mut self, name: &str, railway: &str, id: &str) -> Self {
        self.stations.insert(
            (name.to_string(), railway.to_string()),
            StationId::parse(id).unwrap(),
        );
        self
    }

    /// Number of lookups so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl StationCatalog for MockCatalog {
    async fn find_station_on_railway(&self, station_name: &str, railway: &RailwayId) -> RemoteOutcome<StationId> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.unreachable {
            return RemoteOutcome::TransientFailure("simulated connection refused".to_string());
        }
        match self
            .stations
            .get(&(station_name.to_string(), railway.to_string()))
        {
            Some(id) => RemoteOutcome::Found(id.clone()),
            None => RemoteOutcome::NotFound,
        }
    }
}
