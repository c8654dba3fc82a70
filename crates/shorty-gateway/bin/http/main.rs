mod cli;

use crate::cli::{LogFormatArg, CLI};
use clap::Parser;
use shorty_gateway::{App, AppState, GatewaySettings};
use shorty_shortener::KeyStore;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::try_parse()?;

    init_tracing(config.log_format);

    info!(
        listen_addr = %config.listen_addr,
        base_url = %config.base_url,
        short_url_prefix = %config.short_url_prefix,
        "starting gateway server"
    );

    let settings = GatewaySettings::builder()
        .base_url(config.base_url)
        .short_url_prefix(config.short_url_prefix)
        .build();
    let state = AppState::new(Arc::new(KeyStore::new()), settings);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway server stopped");
    Ok(())
}

fn init_tracing(format: LogFormatArg) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormatArg::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormatArg::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
