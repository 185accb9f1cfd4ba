//! Configuration loading from the environment.
//!
//! Every field resolves the same way: an unset or empty variable yields the
//! default, a string field takes the value verbatim, and a numeric field
//! takes the parsed value or silently keeps the default when parsing fails.
//! Loading never fails.

use std::fmt::Display;
use std::str::FromStr;

use crate::config::env::{keys, EnvSource, ProcessEnv};
use crate::config::schema::{
    CacheBackendSettings, Config, DatabaseSettings, SchedulerSettings, ServerSettings,
};

impl Config {
    /// Load the snapshot from the process environment.
    pub fn load() -> Config {
        Config::load_from(&ProcessEnv)
    }

    /// Load the snapshot from an arbitrary environment.
    pub fn load_from<E: EnvSource + ?Sized>(env: &E) -> Config {
        let server = ServerSettings::default();
        let scheduler = SchedulerSettings::default();
        let redis = CacheBackendSettings::default();
        let postgres = DatabaseSettings::default();

        Config {
            server: ServerSettings {
                http_port: string_or(env, keys::HTTP_PORT, server.http_port),
                grpc_port: string_or(env, keys::GRPC_PORT, server.grpc_port),
            },
            scheduler: SchedulerSettings {
                planner_mode: string_or(env, keys::PLANNER_MODE, scheduler.planner_mode),
                planner_timeout_ms: parse_or(
                    env,
                    keys::PLANNER_TIMEOUT_MS,
                    scheduler.planner_timeout_ms,
                ),
                aging_threshold_secs: parse_or(
                    env,
                    keys::AGING_THRESHOLD_S,
                    scheduler.aging_threshold_secs,
                ),
                max_batch_size: parse_or(env, keys::MAX_BATCH_SIZE, scheduler.max_batch_size),
                flush_deadline_ms: parse_or(
                    env,
                    keys::FLUSH_DEADLINE_MS,
                    scheduler.flush_deadline_ms,
                ),
                vram_safety_margin: parse_ratio_or(
                    env,
                    keys::VRAM_SAFETY_MARGIN,
                    scheduler.vram_safety_margin,
                ),
                health_interval_ms: parse_or(
                    env,
                    keys::HEALTH_INTERVAL_MS,
                    scheduler.health_interval_ms,
                ),
                min_retry_tokens: parse_or(
                    env,
                    keys::MIN_RETRY_TOKENS,
                    scheduler.min_retry_tokens,
                ),
            },
            redis: CacheBackendSettings {
                addr: string_or(env, keys::REDIS_ADDR, redis.addr),
                // Default is empty, so an explicit empty override and unset agree.
                password: string_or(env, keys::REDIS_PASSWORD, redis.password),
            },
            postgres: DatabaseSettings {
                dsn: string_or(env, keys::POSTGRES_DSN, postgres.dsn),
            },
        }
    }
}

/// Non-empty value of `key`, if any.
fn lookup<E: EnvSource + ?Sized>(env: &E, key: &str) -> Option<String> {
    env.var(key).filter(|value| !value.is_empty())
}

fn string_or<E: EnvSource + ?Sized>(env: &E, key: &str, default: String) -> String {
    lookup(env, key).unwrap_or(default)
}

fn parse_or<E, T>(env: &E, key: &str, default: T) -> T
where
    E: EnvSource + ?Sized,
    T: FromStr,
    T::Err: Display,
{
    let Some(raw) = lookup(env, key) else {
        return default;
    };

    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(key, value = %raw, error = %e, "Unparsable override, using default");
            default
        }
    }
}

/// Like [`parse_or`], but finite-looking text that overflows to infinity
/// counts as unparsable. Explicit `inf`/`infinity`/`nan` literals are kept.
fn parse_ratio_or<E: EnvSource + ?Sized>(env: &E, key: &str, default: f64) -> f64 {
    let Some(raw) = lookup(env, key) else {
        return default;
    };

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() || is_non_finite_literal(&raw) => value,
        Ok(value) => {
            tracing::debug!(key, value = %raw, parsed = value, "Out of range override, using default");
            default
        }
        Err(e) => {
            tracing::debug!(key, value = %raw, error = %e, "Unparsable override, using default");
            default
        }
    }
}

fn is_non_finite_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(&['+', '-'][..]).unwrap_or(raw);
    ["inf", "infinity", "nan"]
        .iter()
        .any(|literal| unsigned.eq_ignore_ascii_case(literal))
}
