//! Astronihar HTTP Server Binary
//!
//! Entry point for the chart REST API server. It builds the chart service
//! over the configured ephemeris source, sets up the HTTP router, and
//! starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin astronihar-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `ASTRONIHAR_UTC_OFFSET_MINUTES`, `ASTRONIHAR_LATITUDE`,
//!   `ASTRONIHAR_LONGITUDE`, `ASTRONIHAR_AYANAMSHA`: chart configuration
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use astronihar::config::ChartConfig;
use astronihar::ephemeris::MeanElementEphemeris;
use astronihar::http::{create_router, AppState};
use astronihar::services::ChartService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Astronihar HTTP Server");

    let config = ChartConfig::from_env();
    info!(
        utc_offset_minutes = config.utc_offset_minutes,
        ayanamsha = config.ayanamsha.name(),
        "Chart configuration loaded"
    );

    let source = Arc::new(MeanElementEphemeris::new());
    let charts = Arc::new(ChartService::new(source, config));
    info!(ephemeris = charts.source_name(), "Chart service initialized");

    // Create router with all endpoints
    let app = create_router(AppState::new(charts));

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
