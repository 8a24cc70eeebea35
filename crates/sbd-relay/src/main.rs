//! SBD relay - Entry point.

use anyhow::{Context, Result};
use rockblock_client::RockblockClient;
use sbd_relay::{
    api::{create_router, AppState},
    config::Config,
    Directory, Relay, RelaySettings,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use twilio_client::{RequestValidator, TwilioClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SBD relay");

    let directory = Directory::load(&config.directory.path).with_context(|| {
        format!(
            "Failed to load directory from {}",
            config.directory.path.display()
        )
    })?;
    if directory.is_empty() {
        warn!("Directory is empty, every message will be rejected");
    } else {
        info!("Loaded directory with {} devices", directory.len());
    }

    let twilio = TwilioClient::new(
        &config.twilio.base_url,
        &config.twilio.account_sid,
        config.twilio.auth_token.clone(),
    )
    .context("Failed to create Twilio client")?;

    let rockblock = RockblockClient::new(
        &config.rockblock.base_url,
        &config.rockblock.username,
        config.rockblock.password.clone(),
    )
    .context("Failed to create RockBLOCK client")?;

    let relay = Relay::new(
        directory,
        Arc::new(twilio),
        Arc::new(rockblock),
        RequestValidator::new(config.twilio.auth_token.clone()),
        RelaySettings {
            sms_from_number: config.twilio.phone_number.clone(),
            surface_mt_transport_errors: config.relay.surface_mt_transport_errors,
        },
    );

    let app = create_router(AppState::new(
        relay,
        config.twilio.public_base_url.clone(),
    ));

    let addr = SocketAddr::new(
        config
            .server
            .listen_addr
            .parse()
            .with_context(|| format!("Invalid listen address {}", config.server.listen_addr))?,
        config.server.port,
    );

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
