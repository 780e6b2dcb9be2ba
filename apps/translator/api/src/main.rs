use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;
use translator_api::{build_app, config::Config};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let app = build_app(&config)?;

    info!(
        name = config.app.name,
        version = config.app.version,
        "Starting Turbo Translator API (docs at /api, schema at /api-json)"
    );

    create_production_app(app, &config.server, Duration::from_secs(30), async {
        info!("Shutting down: no connections to release");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Turbo Translator API shutdown complete");
    Ok(())
}
