//! # Prefcache Server
//!
//! Loads configuration, wires the preference cache together and runs the
//! lookup / invalidate walkthrough for one user.
//!
//! Usage: `prefcache-server [USER_ID]` (defaults to `12345`).

use prefcache_config::ConfigLoader;
use prefcache_core::PrefCacheResult;
use prefcache_server::app::{init_logging, run_app, user_id_from_arg};
use std::time::Duration;
use tracing::{error, info};

const WALKTHROUGH_PAUSE: Duration = Duration::from_secs(2);

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // Telemetry may not be up yet when configuration fails.
        eprintln!("Application error: {}", e);
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> PrefCacheResult<()> {
    // Load configuration
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    init_logging(&config)?;

    info!("Starting Prefcache Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    let user_id = user_id_from_arg(std::env::args().nth(1))?;
    run_app(&config, &user_id, WALKTHROUGH_PAUSE).await?;

    Ok(())
}
