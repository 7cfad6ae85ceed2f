use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use fuel_finder::config::{ConfigError, ServerConfig};
use fuel_finder::dataset::{DatasetError, Datasets};
use fuel_finder::nearby::{NearbyStations, QueryConfig};
use fuel_finder::web::{AppState, create_router};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "fuel_finder=info,tower_http=info";

/// Errors that stop the server from starting.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to load datasets: {0}")]
    Dataset(#[from] DatasetError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;

    // Datasets are loaded once; a bad file stops startup
    let datasets = Datasets::load(&config.towns_path, &config.stations_path)?;
    let nearby = NearbyStations::new(datasets, QueryConfig::default());
    info!(
        towns = nearby.town_count(),
        stations = nearby.station_count(),
        "query engine ready"
    );

    let state = AppState::new(nearby);
    let app = create_router(state, &config.static_dir);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Fuel Finder listening on http://{addr}");
    info!("  GET /            - Town picker");
    info!("  GET /search      - Nearest stations (?town=NAME, HTML or JSON)");
    info!("  GET /api/towns   - Town names");
    info!("  GET /health      - Health check");

    axum::serve(listener, app).await?;
    Ok(())
}
