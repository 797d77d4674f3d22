//! Number window HTTP server
//!
//! Usage:
//!   cargo run --release --bin numwindow_server
//!
//! Environment variables:
//!   PORT - Listening port (default: 9876)
//!   BIND_ADDR - Listening host (default: 0.0.0.0)
//!   WINDOW_SIZE - Window capacity (default: 10)
//!   FETCH_TIMEOUT_MS - Provider timeout (default: 1000)
//!   NUMBERS_{PRIME,FIBONACCI,EVEN,RANDOM}_URL - Provider endpoint overrides

use dotenv::dotenv;
use log::{error, info};
use numwindow::{server, Category, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = ServiceConfig::from_env()?;

    info!("🚀 Starting number window server");
    info!("   ├─ Port: {}", config.port);
    info!("   ├─ Window size: {}", config.window_size);
    info!("   ├─ Fetch timeout: {}ms", config.fetch_timeout.as_millis());
    for category in Category::all() {
        info!(
            "   ├─ /numbers/{} → {}",
            category.id(),
            config.providers.url(category)
        );
    }
    info!("   └─ Log filter: {}", config.rust_log.as_deref().unwrap_or("info"));

    let shutdown = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("⚠️  Received CTRL+C, shutting down..."),
            Err(err) => {
                error!("❌ Failed to listen for CTRL+C: {}", err);
                std::future::pending::<()>().await
            }
        }
    };

    if let Err(e) = server::run(config, shutdown).await {
        error!("❌ Server error: {}", e);
        return Err(e.into());
    }

    info!("✅ Server stopped");
    Ok(())
}
