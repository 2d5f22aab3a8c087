//! Tally server
//!
//! Serves the expense form and monthly budget reports.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tally_api::{AppState, create_router};
use tally_shared::{AppConfig, ReplayCodec};
use tally_sheets::SheetyClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tally=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    if config.replay.secret.is_none() {
        info!("No replay secret configured, summaries expire on restart");
    }
    let replay = ReplayCodec::from_config(&config.replay);

    let store = Arc::new(SheetyClient::new(config.sheet.clone()));
    info!(
        base_url = %config.sheet.base_url,
        tab = %config.sheet.tab,
        summaries_tab = %config.sheet.summaries_tab,
        "Row store configured"
    );

    let state = AppState::new(store, &config.sheet, replay);
    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
