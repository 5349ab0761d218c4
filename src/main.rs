//! Bookly API
//!
//! A small book-collection HTTP service whose request path is fully
//! observable: every request is counted and timed by the metrics
//! middleware, every store operation runs inside an annotated trace span,
//! and a dedicated route injects faults on demand.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                  BOOKLY API                  │
//!                    │                                              │
//!   Client Request   │  ┌──────────┐   ┌───────────┐   ┌─────────┐ │
//!   ─────────────────┼─▶│ metrics  │──▶│ handlers  │──▶│  store  │ │
//!                    │  │middleware│   │ (spans +  │   │ (books) │ │
//!                    │  └────┬─────┘   │  delays)  │   └─────────┘ │
//!                    │       │         └─────┬─────┘               │
//!   Client Response  │       ▼               ▼                     │
//!   ◀────────────────┼─ counters +      trace spans                │
//!                    │  histograms      (error attrs)              │
//!                    │       │                                     │
//!                    │       └──▶ GET /metrics (scrape)            │
//!                    └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use bookly_api::config::{load_config, ServiceConfig};
use bookly_api::http::HttpServer;
use bookly_api::lifecycle::Shutdown;

#[derive(Debug, Parser)]
#[command(name = "bookly-api", version, about = "Book API with observability")]
struct Cli {
    /// Path to a TOML configuration file; defaults apply when omitted.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    #[cfg(feature = "otel")]
    bookly_api::observability::telemetry::init(&config)?;
    #[cfg(not(feature = "otel"))]
    bookly_api::observability::logging::init(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.trigger();
        }
    });

    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    #[cfg(feature = "otel")]
    bookly_api::observability::telemetry::shutdown();

    tracing::info!("Shutdown complete");
    Ok(())
}
