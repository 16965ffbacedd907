use color_eyre::eyre::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tocify_server::{build_router, state::AppState};
use tocify_shared::load_config;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let config = load_config()?;
    tracing::info!(
        marker = %config.parser.section_marker,
        max_upload_mb = config.server.max_upload_size_mb,
        "configuration loaded"
    );

    let state = AppState::new(config.parser.section_marker);
    let app = build_router(state, config.server.max_upload_size_bytes());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("tocify server listening on {addr}");
    tracing::info!("Endpoints:");
    tracing::info!("  - POST /api/v1/files/parser");
    tracing::info!("  - GET  /health");

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tocify_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
