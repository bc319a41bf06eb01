//! JSON-over-TCP relay binary.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────┐
//!                    │                 RELAY                    │
//!                    │                                          │
//!   POST /get-recipe │  ┌──────────┐         ┌──────────────┐   │
//!   ─────────────────┼─▶│   http   │────────▶│    bridge    │───┼──▶ Backend
//!    (JSON body)     │  │  server  │         │ (one TCP conn│   │    (TCP)
//!                    │  └──────────┘         │  per request)│   │
//!   200 backend JSON │       ▲               └──────┬───────┘   │
//!   ◀────────────────┼───────┴──────────────────────┘           │
//!   or 500 failure   │                                          │
//!                    │  ┌────────────────────────────────────┐  │
//!                    │  │  config   ·  lifecycle  ·  tracing │  │
//!                    │  └────────────────────────────────────┘  │
//!                    └──────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use recipe_relay::config::{load_config, RelayConfig};
use recipe_relay::http::RelayServer;
use recipe_relay::lifecycle::Shutdown;

#[derive(Parser, Debug)]
#[command(name = "recipe-relay", about = "HTTP-to-TCP JSON relay")]
struct Args {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => RelayConfig::default(),
    };

    // Initialize tracing subscriber
    let default_filter = format!("recipe_relay={},tower_http=info", config.observability.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&default_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        bind_address = %config.listener.bind_address,
        backend = %config.backend.address,
        relay_timeout_secs = config.timeouts.relay_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            shutdown.trigger();
        }
    });

    let server = RelayServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
