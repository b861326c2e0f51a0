//! Development server for the admin dashboard UI
//!
//! Runs the in-memory mock api populated with the development dataset, so
//! the UI can be worked on without the real api.
//!
//! Environment variables can be set directly or loaded from a .env file:
//! - PORT: port to listen on (default 8000, 0 for an OS-assigned port)
//! - RUST_LOG: log filter (default "info")
//!
//! Usage: cargo run -p dev-server

use anyhow::Result;
use test_helpers::mock::DevDataset;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let subscriber = mock_api::telemetry::get_subscriber("info".into());
    mock_api::telemetry::init_subscriber(subscriber)?;

    info!("🚀 Starting admin dashboard development server");

    let config = mock_api::Config::from_env()?;
    let app = test_helpers::spawn_app_on_port(config.port).await;

    info!("✅ API server running on http://127.0.0.1:{}", app.port);

    info!("📊 Setting up development test data...");
    let dataset = DevDataset::create(&app).await?;

    info!("🎯 Development server ready!");
    info!("   API: http://127.0.0.1:{}", app.port);
    info!(
        "   UI:  cd ui && API_URL=http://127.0.0.1:{} trunk serve",
        app.port
    );
    info!("");
    dataset.print_summary();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    Ok(())
}
