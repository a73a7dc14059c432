//! Wordproxy server binary

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wordproxy::api::{create_router, AppState};
use wordproxy::config::{AppConfig, LogFormat};
use wordproxy::server::{self, ShutdownController};
use wordproxy::upstream::DatamuseClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config)?;

    let client = DatamuseClient::new(config.upstream.base_url.clone(), config.upstream.timeout())
        .context("failed to build upstream client")?;
    tracing::info!(base_url = %client.base_url(), "Upstream configured");

    let router = create_router(
        AppState::new(Arc::new(client)),
        config.server.request_timeout(),
    );

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    let shutdown = ShutdownController::with_ctrl_c();
    server::serve(
        listener,
        router,
        shutdown.child_token(),
        config.server.shutdown_grace(),
    )
    .await?;

    tracing::info!("Shutting down");
    Ok(())
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.logging.level.clone()))
        .unwrap_or_else(|_| EnvFilter::new("wordproxy=info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format {
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Text => {
            registry.with(tracing_subscriber::fmt::layer()).init();
        }
    }

    Ok(())
}
