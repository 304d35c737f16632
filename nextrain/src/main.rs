use std::error::Error;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use nextrain::config::AppConfig;
use nextrain::irish_rail::IrishRailClient;
use nextrain::transport::{AnyTransport, FixtureTransport, Networker};
use nextrain::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nextrain=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?;

    let transport = match &config.fixture_dir {
        Some(dir) => {
            let fixtures = FixtureTransport::load(dir)?;
            info!(dir = %dir.display(), responses = fixtures.keys().len(), "serving fixture responses");
            AnyTransport::Fixture(fixtures)
        }
        None => {
            info!(base_url = %config.base_url, timeout_secs = config.timeout_secs, "using live Irish Rail API");
            AnyTransport::Live(Networker::new(config.networker_config())?)
        }
    };

    let rail = IrishRailClient::new(transport, config.irish_rail_config())?;
    let app = create_router(AppState::new(rail));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "nextrain listening");
    info!("endpoints: GET /health, GET /stations, GET /trains?origin=&destination=");

    axum::serve(listener, app).await?;
    Ok(())
}
