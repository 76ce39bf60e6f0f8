//! RAB API Server
//!
//! Main entry point for the RAB builder backend.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rab_api::{AppState, create_router};
use rab_core::budget::TaxConfig;
use rab_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rab=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;

    let tax = TaxConfig::from(&config.tax);
    info!(
        include_vat = tax.include_vat,
        vat_rate = %tax.vat_rate,
        include_withholding = tax.include_withholding,
        withholding_rate = %tax.withholding_rate,
        contingency_rate = %tax.contingency_rate,
        currency = ?config.display.currency,
        "Tax defaults loaded"
    );

    let state = AppState::new(tax, config.display.currency);
    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
