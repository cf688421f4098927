//! # luxbridged — luxbridge daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Construct the gateway client (the virtual adapter stands in for the
//!   CoAP/DTLS protocol client)
//! - Construct application services, injecting the gateway via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

use std::sync::Arc;

use luxbridge_adapter_http_axum::state::AppState;
use luxbridge_adapter_virtual::VirtualGateway;
use luxbridge_app::ports::SystemClock;
use luxbridge_app::services::command_service::CommandService;
use luxbridge_app::services::description_service::DescriptionService;

mod config;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Gateway
    let gateway = VirtualGateway::seeded();

    // Services
    let descriptions = Arc::new(DescriptionService::with_ttl(
        gateway.clone(),
        SystemClock,
        chrono::Duration::seconds(config.cache.ttl_seconds),
    ));
    let commands = Arc::new(CommandService::new(gateway, Arc::clone(&descriptions)));

    // HTTP
    let app = luxbridge_adapter_http_axum::router::build(AppState::new(descriptions, commands));

    let bind_addr = config.bind_addr();
    tracing::info!("luxbridged listening on http://{bind_addr}");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
