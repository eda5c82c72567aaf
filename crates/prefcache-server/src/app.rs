//! Application wiring shared by the binary and its tests.

use crate::di::build_module;
use crate::walkthrough::{run_walkthrough, WalkthroughReport};
use prefcache_config::AppConfig;
use prefcache_core::{init_telemetry, PrefCacheResult, UserId};
use prefcache_service::CacheInterface;
use std::time::Duration;
use tracing::{info, warn};

/// User looked up when none is given on the command line.
pub const DEFAULT_USER_ID: &str = "12345";

/// Installs the global subscriber described by `observability`.
pub fn init_logging(config: &AppConfig) -> PrefCacheResult<()> {
    init_telemetry(&config.observability.telemetry())
}

/// Parses the optional user id argument.
pub fn user_id_from_arg(arg: Option<String>) -> PrefCacheResult<UserId> {
    UserId::parse(arg.unwrap_or_else(|| DEFAULT_USER_ID.to_string()))
}

/// Builds the configured module, checks the store and runs the walkthrough.
pub async fn run_app(
    config: &AppConfig,
    user_id: &UserId,
    pause: Duration,
) -> PrefCacheResult<WalkthroughReport> {
    let module = build_module(config)?;

    match module.cache().health_check().await {
        Ok(true) => info!("Cache store is reachable"),
        Ok(false) => warn!("Cache store is not reachable, lookups will fall back to the source"),
        Err(e) => warn!("Cache health check failed: {}", e),
    }

    let service = module.preference_service();
    let report = run_walkthrough(service.as_ref(), user_id, pause).await?;

    info!(
        consistent = report.first == report.after_invalidate,
        "Walkthrough complete"
    );

    Ok(report)
}
