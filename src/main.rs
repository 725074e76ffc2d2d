//! Main entry point for the operations console client

use std::sync::Arc;

use ops_console::{
    config::Settings,
    display::DisplayRegistry,
    gateway::{ApiGateway, LogNotifier},
    ops::ConsoleOps,
    poller::Poller,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = Settings::load()?;
    settings.validate()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.logging.level.clone()));
    let registry = tracing_subscriber::registry().with(filter);
    if settings.logging.format == "json" {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }

    info!(base_url = %settings.api.base_url, "starting operations console client");

    // Wire the gateway, display targets, and operations context
    let gateway = ApiGateway::new(&settings.api)?;
    let display = Arc::new(DisplayRegistry::new());
    let ops = Arc::new(ConsoleOps::new(gateway, display, Arc::new(LogNotifier)));

    // Initial paint, then hand off to the refresh loops
    ops.check_health().await;
    let poller = Poller::new(ops, settings.refresh.clone());
    poller.refresh_now().await;
    poller.start().await;

    tokio::signal::ctrl_c().await?;
    info!("shutting down");
    poller.stop().await;

    Ok(())
}
