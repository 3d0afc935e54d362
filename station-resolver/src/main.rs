use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use station_resolver::config::ResolverConfig;
use station_resolver::resolver::HttpStationResolver;
use station_resolver::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("station_resolver=info,tower_http=info")),
        )
        .init();

    let config = match ResolverConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    if config.odpt.consumer_key.is_none() {
        warn!("ODPT_CONSUMER_KEY not set; identifiers will be synthesized locally");
    }

    let resolver = match HttpStationResolver::from_config(&config) {
        Ok(resolver) => resolver,
        Err(e) => {
            error!(error = %e, "failed to build resolver");
            return ExitCode::FAILURE;
        }
    };

    let app = create_router(AppState::new(resolver));

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %config.bind_addr, "station resolver listening");
    info!("  GET  /health                  - Health check");
    info!("  GET  /api/stations/search     - Free-text station search");
    info!("  GET  /api/stations/nearby     - Stations around a point");
    info!("  GET  /api/stations/resolve    - Resolve one station on one line");
    info!("  POST /api/stations/resolve    - Resolve several stations");
    info!("  GET  /api/stations/lookup     - Search and resolve");
    info!("  POST /api/cache/clear         - Forget memoized resolutions");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
