//! Advisory configuration validation.
//!
//! # Responsibilities
//! - Semantic checks the loader deliberately skips
//! - Validate value ranges (ratios in [0, 1], ports valid, intervals > 0)
//! - Check addresses and connection strings are well-formed
//!
//! # Design Decisions
//! - Opt-in: `Config::load` never calls this, consumers decide what to enforce
//! - Returns all validation errors, not just first
//! - Validation is pure function: Config → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::Config;

/// A single semantic problem found in a loaded snapshot.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field}: unknown planner mode {value:?} (expected heuristic, llm or hybrid)")]
    UnknownPlannerMode { field: &'static str, value: String },

    #[error("{field}: {value} is outside [0, 1]")]
    RatioOutOfRange { field: &'static str, value: f64 },

    #[error("{field}: {value:?} is not a valid port")]
    InvalidPort { field: &'static str, value: String },

    #[error("{field}: must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: i64 },

    #[error("{field}: must not be negative, got {value}")]
    Negative { field: &'static str, value: i64 },

    #[error("{field}: {value:?} is not a host:port address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{field}: invalid connection string: {reason}")]
    InvalidDsn { field: &'static str, reason: String },
}

/// Check a snapshot for values the scheduler cannot use.
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let scheduler = &config.scheduler;

    check_port(&mut errors, "server.http_port", &config.server.http_port);
    check_port(&mut errors, "server.grpc_port", &config.server.grpc_port);

    if scheduler.parsed_planner_mode().is_err() {
        errors.push(ValidationError::UnknownPlannerMode {
            field: "scheduler.planner_mode",
            value: scheduler.planner_mode.clone(),
        });
    }

    for (field, value) in [
        ("scheduler.planner_timeout_ms", scheduler.planner_timeout_ms),
        ("scheduler.max_batch_size", scheduler.max_batch_size),
        ("scheduler.flush_deadline_ms", scheduler.flush_deadline_ms),
        ("scheduler.health_interval_ms", scheduler.health_interval_ms),
    ] {
        if value <= 0 {
            errors.push(ValidationError::NotPositive { field, value });
        }
    }

    for (field, value) in [
        ("scheduler.aging_threshold_secs", scheduler.aging_threshold_secs),
        ("scheduler.min_retry_tokens", scheduler.min_retry_tokens),
    ] {
        if value < 0 {
            errors.push(ValidationError::Negative { field, value });
        }
    }

    // NaN fails the range check too.
    if !(0.0..=1.0).contains(&scheduler.vram_safety_margin) {
        errors.push(ValidationError::RatioOutOfRange {
            field: "scheduler.vram_safety_margin",
            value: scheduler.vram_safety_margin,
        });
    }

    if !is_host_port(&config.redis.addr) {
        errors.push(ValidationError::InvalidAddress {
            field: "redis.addr",
            value: config.redis.addr.clone(),
        });
    }

    if let Err(reason) = check_dsn(&config.postgres.dsn) {
        errors.push(ValidationError::InvalidDsn {
            field: "postgres.dsn",
            reason,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_port(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if !matches!(value.parse::<u16>(), Ok(port) if port != 0) {
        errors.push(ValidationError::InvalidPort {
            field,
            value: value.to_string(),
        });
    }
}

fn is_host_port(addr: &str) -> bool {
    match addr.rsplit_once(':') {
        Some((host, port)) => !host.is_empty() && matches!(port.parse::<u16>(), Ok(p) if p != 0),
        None => false,
    }
}

fn check_dsn(dsn: &str) -> Result<(), String> {
    let parsed = url::Url::parse(dsn).map_err(|e| e.to_string())?;
    match parsed.scheme() {
        "postgres" | "postgresql" => {}
        other => return Err(format!("unsupported scheme {other:?}")),
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err("missing host".to_string());
    }
    Ok(())
}
