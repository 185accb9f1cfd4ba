//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Log the loaded configuration without leaking secrets
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Log level configurable via `RUST_LOG`, defaulting to `infersched=info`

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

pub const DEFAULT_FILTER: &str = "infersched=info";

/// Install the global tracing subscriber.
///
/// Returns `false` if a subscriber was already installed.
pub fn init_logging() -> bool {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}

/// Emit one structured event describing the snapshot, secrets masked.
pub fn log_config_summary(config: &Config) {
    let config = config.redacted();
    let scheduler = &config.scheduler;

    tracing::info!(
        http_port = %config.server.http_port,
        grpc_port = %config.server.grpc_port,
        planner_mode = %scheduler.planner_mode,
        planner_timeout_ms = scheduler.planner_timeout_ms,
        aging_threshold_secs = scheduler.aging_threshold_secs,
        max_batch_size = scheduler.max_batch_size,
        flush_deadline_ms = scheduler.flush_deadline_ms,
        vram_safety_margin = scheduler.vram_safety_margin,
        health_interval_ms = scheduler.health_interval_ms,
        min_retry_tokens = scheduler.min_retry_tokens,
        redis_addr = %config.redis.addr,
        redis_auth = !config.redis.password.is_empty(),
        postgres_dsn = %config.postgres.dsn,
        "Configuration loaded"
    );
}
