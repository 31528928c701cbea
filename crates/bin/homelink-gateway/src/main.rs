use crate::cli::Cli;
use clap::Parser;
use homelink_bridge::SkillBridge;
use homelink_bridge::backend::HttpsTransport;
use homelink_bridge::server::Server;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod cli;
mod error;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let env_filter = tracing_subscriber::EnvFilter::from_default_env();
    let fmt_layer = tracing_subscriber::fmt::layer()
        .pretty()
        .with_filter(env_filter);
    tracing_subscriber::registry().with(fmt_layer).init();

    let cli = Cli::parse();
    let bridge_config = cli.bridge_config()?;
    let server_config = cli.server_config();

    let transport = HttpsTransport::new().map_err(error::GatewayError::from)?;
    let bridge = Arc::new(SkillBridge::new(bridge_config, Arc::new(transport)));

    let backend = &bridge.config().backend;
    info!(
        backend = %backend.hostname,
        auth_backend = %backend.auth_hostname,
        port = backend.port,
        timeout = ?backend.timeout,
        region = %bridge.config().skill.region,
        "Starting the smart home gateway"
    );

    let shutdown = CancellationToken::new();
    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        if let Err(error) = tokio::signal::ctrl_c().await {
            error!(?error, "Failed to listen for the shutdown signal");
            return;
        }
        info!("Shutdown requested");
        signal_shutdown.cancel();
    });

    Server::serve(&server_config, bridge, shutdown)
        .await
        .map_err(error::GatewayError::from)?;

    Ok(())
}
