//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::cache::ResolutionCache;
use crate::domain::ResolveError;
use crate::odpt::StationCatalog;
use crate::stations::StationSource;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<S, C, K>(state: AppState<S, C, K>) -> Router
where
    S: StationSource + 'static,
    C: StationCatalog + 'static,
    K: ResolutionCache + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/api/stations/search", get(search_stations::<S, C, K>))
        .route("/api/stations/nearby", get(nearby_stations::<S, C, K>))
        .route(
            "/api/stations/resolve",
            get(resolve_station::<S, C, K>).post(resolve_legs::<S, C, K>),
        )
        .route("/api/stations/lookup", get(lookup_stations::<S, C, K>))
        .route("/api/cache/clear", post(clear_cache::<S, C, K>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search stations by free-text name, reporting every spelling tried.
///
/// Remote failures are never an error here: the response has no stations
/// and each attempt's outcome is `transient_failure`.
async fn search_stations<S, C, K>(
    State(state): State<AppState<S, C, K>>,
    Query(req): Query<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError>
where
    S: StationSource,
    C: StationCatalog,
    K: ResolutionCache,
{
    let query = req.q.trim();
    if query.is_empty() {
        return Err(AppError::BadRequest {
            message: "Query must not be empty".to_string(),
        });
    }

    let report = state.resolver.search(query).await;
    if report.all_attempts_failed() {
        warn!(query, "station search unavailable for every spelling");
    }

    Ok(Json(SearchResponse {
        query: query.to_string(),
        canonical_query: report.canonical_query,
        attempts: report.attempts,
        stations: report.records,
    }))
}

/// Stations around a point.
async fn nearby_stations<S, C, K>(
    State(state): State<AppState<S, C, K>>,
    Query(req): Query<NearbyRequest>,
) -> Result<Json<NearbyResponse>, AppError>
where
    S: StationSource,
    C: StationCatalog,
    K: ResolutionCache,
{
    if !(-180.0..=180.0).contains(&req.lon) || !(-90.0..=90.0).contains(&req.lat) {
        return Err(AppError::BadRequest {
            message: format!("Invalid coordinates: lon={} lat={}", req.lon, req.lat),
        });
    }

    let radius = req.radius.unwrap_or(DEFAULT_NEARBY_RADIUS_M);
    let stations = state.resolver.nearby_stations(req.lon, req.lat, radius).await;

    Ok(Json(NearbyResponse { stations }))
}

/// Resolve one station on one line.
async fn resolve_station<S, C, K>(
    State(state): State<AppState<S, C, K>>,
    Query(req): Query<LegRequest>,
) -> Result<Json<ResolveResponse>, AppError>
where
    S: StationSource,
    C: StationCatalog,
    K: ResolutionCache,
{
    let resolution = state.resolver.resolve(&req.station, &req.line).await?;

    Ok(Json(ResolveResponse {
        station: req.station,
        line: req.line,
        id: resolution.id,
        source: resolution.source,
    }))
}

/// Resolve several stations at once. Failures are reported per leg.
async fn resolve_legs<S, C, K>(
    State(state): State<AppState<S, C, K>>,
    Json(req): Json<ResolveLegsRequest>,
) -> Json<ResolveLegsResponse>
where
    S: StationSource,
    C: StationCatalog,
    K: ResolutionCache,
{
    let pairs: Vec<(&str, &str)> = req
        .legs
        .iter()
        .map(|leg| (leg.station.as_str(), leg.line.as_str()))
        .collect();
    let results = state.resolver.resolve_all(&pairs).await;

    let legs = req
        .legs
        .iter()
        .zip(results)
        .map(|(leg, result)| match result {
            Ok(resolution) => LegResult {
                station: leg.station.clone(),
                line: leg.line.clone(),
                id: Some(resolution.id),
                source: Some(resolution.source),
                error: None,
            },
            Err(e) => LegResult {
                station: leg.station.clone(),
                line: leg.line.clone(),
                id: None,
                source: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    Json(ResolveLegsResponse { legs })
}

/// Search, then resolve every station the search found.
async fn lookup_stations<S, C, K>(
    State(state): State<AppState<S, C, K>>,
    Query(req): Query<SearchRequest>,
) -> Result<Json<LookupResponse>, AppError>
where
    S: StationSource,
    C: StationCatalog,
    K: ResolutionCache,
{
    let query = req.q.trim();
    if query.is_empty() {
        return Err(AppError::BadRequest {
            message: "Query must not be empty".to_string(),
        });
    }

    let stations = state.resolver.resolve_query(query).await;

    Ok(Json(LookupResponse {
        query: query.to_string(),
        stations,
    }))
}

/// Forget every memoized resolution.
async fn clear_cache<S, C, K>(State(state): State<AppState<S, C, K>>) -> StatusCode
where
    S: StationSource,
    C: StationCatalog,
    K: ResolutionCache,
{
    state.resolver.clear_cache();
    info!("resolution cache cleared");
    StatusCode::NO_CONTENT
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<ResolveError> for AppError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::UnknownRailway(_) => AppError::NotFound {
                message: e.to_string(),
            },
            ResolveError::BlankStationName => AppError::BadRequest {
                message: e.to_string(),
            },
            ResolveError::MalformedRailwayId { .. } => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            warn!(%status, %message, "request failed");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::{Value, json};

    use super::*;
    use crate::cache::MemoryResolutionCache;
    use crate::reconcile::CatalogReconciler;
    use crate::reference::{AliasTable, RailwayCatalog};
    use crate::resolver::StationResolver;
    use crate::romanize::TableRomanizer;
    use crate::stations::StationSearchClient;
    use crate::synthesize::IdentifierSynthesizer;
    use crate::test_support::{MockCatalog, MockStationSource, record, serve};

    async fn app(source: MockStationSource, catalog: MockCatalog) -> String {
        let resolver = StationResolver::new(
            StationSearchClient::new(source, Arc::new(AliasTable::builtin())),
            CatalogReconciler::new(
                catalog,
                IdentifierSynthesizer::new(
                    Arc::new(RailwayCatalog::builtin()),
                    Arc::new(TableRomanizer::builtin()),
                ),
            ),
            MemoryResolutionCache::default(),
        );
        serve(create_router(AppState::new(resolver))).await
    }

    async fn get_json(url: &str) -> (StatusCode, Value) {
        let response = reqwest::get(url).await.unwrap();
        let status = StatusCode::from_u16(response.status().as_u16()).unwrap();
        (status, response.json().await.unwrap())
    }

    #[tokio::test]
    async fn health_is_ok() {
        let base = app(MockStationSource::new(), MockCatalog::new()).await;

        let body = reqwest::get(format!("{base}/health"))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();

        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn search_reports_attempts() {
        let source = MockStationSource::new().with_station("読売ランド前", record("読売ランド前", "小田急小田原線"));
        let base = app(source, MockCatalog::new()).await;

        let (status, body) = get_json(&format!("{base}/api/stations/search?q=読売ランド")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["canonical_query"], "読売ランド前");
        assert_eq!(body["stations"][0]["name"], "読売ランド前");
        assert_eq!(body["attempts"][0]["outcome"]["outcome"], "found");
    }

    #[tokio::test]
    async fn blank_search_is_rejected() {
        let base = app(MockStationSource::new(), MockCatalog::new()).await;

        let (status, body) = get_json(&format!("{base}/api/stations/search?q=%20")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn search_failing_in_transit_degrades_to_no_stations() {
        let source = MockStationSource::new()
            .failing_on("渋谷")
            .failing_on("渋谷前")
            .failing_on("渋谷駅");
        let base = app(source, MockCatalog::new()).await;

        let (status, body) = get_json(&format!("{base}/api/stations/search?q=渋谷")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stations"], json!([]));
        let attempts = body["attempts"].as_array().unwrap();
        assert_eq!(attempts.len(), 3);
        assert!(attempts
            .iter()
            .all(|a| a["outcome"]["outcome"] == "transient_failure"));
    }

    #[tokio::test]
    async fn resolve_single_station() {
        let catalog = MockCatalog::new().with_station(
            "東京",
            "odpt.Railway:JR-East.Yamanote",
            "odpt.Station:JR-East.Yamanote.Tokyo",
        );
        let base = app(MockStationSource::new(), catalog).await;

        let (status, body) =
            get_json(&format!("{base}/api/stations/resolve?station=東京&line=JR山手線")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "odpt.Station:JR-East.Yamanote.Tokyo");
        assert_eq!(body["source"], "catalog");
    }

    #[tokio::test]
    async fn unknown_line_is_not_found() {
        let base = app(MockStationSource::new(), MockCatalog::new()).await;

        let (status, body) =
            get_json(&format!("{base}/api/stations/resolve?station=東京&line=UnknownLine123")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("UnknownLine123"));
    }

    #[tokio::test]
    async fn kanji_name_resolves_with_catalog_down() {
        let base = app(MockStationSource::new(), MockCatalog::unreachable()).await;

        let (status, body) =
            get_json(&format!("{base}/api/stations/resolve?station=中野&line=JR中央線(快速)")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "odpt.Station:JR-East.ChuoRapid.Nakano");
        assert_eq!(body["source"], "synthesized");
    }

    #[tokio::test]
    async fn blank_station_is_bad_request() {
        let base = app(MockStationSource::new(), MockCatalog::new()).await;

        let (status, body) =
            get_json(&format!("{base}/api/stations/resolve?station=%20&line=JR山手線")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "station name is blank");
    }

    #[tokio::test]
    async fn resolve_legs_reports_each_leg() {
        let base = app(MockStationSource::new(), MockCatalog::unreachable()).await;

        let body: Value = reqwest::Client::new()
            .post(format!("{base}/api/stations/resolve"))
            .json(&json!({
                "legs": [
                    {"station": "渋谷", "line": "JR山手線"},
                    {"station": "渋谷", "line": "謎の路線"}
                ]
            }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        let legs = body["legs"].as_array().unwrap();
        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0]["id"], "odpt.Station:JR-East.Yamanote.Shibuya");
        assert_eq!(legs[0]["source"], "synthesized");
        assert!(legs[0].get("error").is_none());
        assert!(legs[1].get("id").is_none());
        assert!(legs[1]["error"].is_string());
    }

    #[tokio::test]
    async fn lookup_resolves_search_results() {
        let source = MockStationSource::new().with_stations(
            "渋谷",
            vec![record("渋谷", "JR山手線"), record("渋谷", "東京メトロ銀座線")],
        );
        let base = app(source, MockCatalog::unreachable()).await;

        let (status, body) = get_json(&format!("{base}/api/stations/lookup?q=渋谷")).await;

        assert_eq!(status, StatusCode::OK);
        let stations = body["stations"].as_array().unwrap();
        assert_eq!(stations.len(), 2);
        assert_eq!(
            stations[1]["resolution"]["id"],
            "odpt.Station:TokyoMetro.Ginza.Shibuya"
        );
    }

    #[tokio::test]
    async fn nearby_uses_default_radius() {
        let mut far = record("横浜", "JR東海道線");
        far.longitude = 139.622;
        far.latitude = 35.466;
        let source = MockStationSource::new().with_nearby(vec![record("渋谷", "JR山手線"), far]);
        let base = app(source, MockCatalog::new()).await;

        let (status, body) =
            get_json(&format!("{base}/api/stations/nearby?lon=139.7013&lat=35.6588")).await;

        assert_eq!(status, StatusCode::OK);
        let stations = body["stations"].as_array().unwrap();
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0]["name"], "渋谷");
    }

    #[tokio::test]
    async fn nearby_rejects_bad_coordinates() {
        let base = app(MockStationSource::new(), MockCatalog::new()).await;

        let (status, _) = get_json(&format!("{base}/api/stations/nearby?lon=200&lat=35")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn clear_cache_returns_no_content() {
        let base = app(MockStationSource::new(), MockCatalog::unreachable()).await;
        let client = reqwest::Client::new();

        let url = format!("{base}/api/stations/resolve?station=渋谷&line=JR山手線");
        client.get(&url).send().await.unwrap();
        let cached: Value = client.get(&url).send().await.unwrap().json().await.unwrap();
        assert_eq!(cached["source"], "cache");

        let status = client
            .post(format!("{base}/api/cache/clear"))
            .send()
            .await
            .unwrap()
            .status();
        assert_eq!(status.as_u16(), 204);

        let fresh: Value = client.get(&url).send().await.unwrap().json().await.unwrap();
        assert_eq!(fresh["source"], "synthesized");
    }
}
