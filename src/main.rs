use std::process::ExitCode;

use thiserror::Error;
use tracing::{error, info};

use plan_entitlements::adapters::http::{app, AppState};
use plan_entitlements::config::{AppConfig, ConfigError, ValidationError};
use plan_entitlements::telemetry::{self, TelemetryError};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // The subscriber may not be installed yet.
            eprintln!("plan-entitlements: {err}");
            error!(error = %err, "Startup failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate()?;

    telemetry::init(&config.server)?;

    let catalog = config.entitlements.catalog()?;
    let thresholds = config.usage.thresholds()?;
    let state = AppState::new(catalog, thresholds);
    let app = app(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(
        environment = ?config.server.environment,
        %addr,
        catalog = ?config.entitlements.catalog_path,
        warning_threshold = thresholds.warning(),
        block_threshold = thresholds.block(),
        "plan entitlement service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
