use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rail_router::config::ServerConfig;
use rail_router::loader::load_network;
use rail_router::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Construction errors are fatal: there is nothing to serve without a network
    info!(
        stations = %config.load.stations_path.display(),
        connections = %config.load.connections_path.display(),
        "Loading network"
    );
    let loaded = match load_network(&config.load) {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("Failed to load network: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Advisory only; problems are logged and the server still starts
    let report = loaded.validate();
    report.log();

    let state = AppState::new(loaded.network, report);
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, "Failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %config.bind_addr, "Rail router listening");
    info!("  GET /health");
    info!("  GET /stations");
    info!("  GET /stations/:code");
    info!("  GET /route?from=CODE&to=CODE");
    info!("  GET /distance?from=CODE&to=CODE");
    info!("  GET /nearest?lat=..&lon=..&radius_miles=..");
    info!("  GET /validation");

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
