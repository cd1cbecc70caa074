//! Dayplan HTTP Server Binary
//!
//! Main entry point for the daily plan REST API. It loads the configuration,
//! builds the Google Calendar client, sets up the router and starts serving.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin dayplan-server
//!
//! # Custom config file and port
//! DAYPLAN_CONFIG=/etc/dayplan.toml PORT=9000 cargo run --bin dayplan-server
//! ```
//!
//! # Environment Variables
//!
//! - `DAYPLAN_CONFIG`: Path to the TOML configuration file
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `CALENDAR_API_BASE`: Google Calendar API base URL
//! - `CALENDAR_ID`: Calendar to read (default: primary)
//! - `PLANNER_UTC_OFFSET_MINUTES`: Offset of the user's local day (default: -180)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use dayplan::calendar::GoogleCalendarClient;
use dayplan::config::AppConfig;
use dayplan::http::{create_router, AppState};

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
        .with_thread_ids(true)
        .init();

    info!("Starting Dayplan HTTP Server");

    let config = AppConfig::load()?;
    info!(
        calendar_id = %config.calendar.calendar_id,
        utc_offset_minutes = config.planning.utc_offset_minutes,
        "Configuration loaded"
    );

    let calendar = GoogleCalendarClient::new(&config.calendar)?;
    let addr: SocketAddr = config.bind_address().parse()?;

    // Create application state and router
    let state = AppState::new(config, Arc::new(calendar));
    let app = create_router(state);

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
