//! Environment lookup abstraction.
//!
//! The loader never touches `std::env` directly; it reads through an
//! [`EnvSource`] so tests can hand it a synthetic environment instead of
//! mutating the real process environment.

use std::collections::{BTreeMap, HashMap};

/// Read-only access to named environment variables.
pub trait EnvSource {
    /// Returns the value of `key`, or `None` if it is unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
///
/// Values that are not valid Unicode are reported as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Variable names read by the loader.
pub mod keys {
    pub const HTTP_PORT: &str = "HTTP_PORT";
    pub const GRPC_PORT: &str = "GRPC_PORT";
    pub const PLANNER_MODE: &str = "PLANNER_MODE";
    pub const PLANNER_TIMEOUT_MS: &str = "PLANNER_TIMEOUT_MS";
    pub const AGING_THRESHOLD_S: &str = "AGING_THRESHOLD_S";
    pub const MAX_BATCH_SIZE: &str = "MAX_BATCH_SIZE";
    pub const FLUSH_DEADLINE_MS: &str = "FLUSH_DEADLINE_MS";
    pub const VRAM_SAFETY_MARGIN: &str = "VRAM_SAFETY_MARGIN";
    pub const HEALTH_INTERVAL_MS: &str = "HEALTH_INTERVAL_MS";
    pub const MIN_RETRY_TOKENS: &str = "MIN_RETRY_TOKENS";
    pub const REDIS_ADDR: &str = "REDIS_ADDR";
    pub const REDIS_PASSWORD: &str = "REDIS_PASSWORD";
    pub const POSTGRES_DSN: &str = "POSTGRES_DSN";

    /// Every variable, in snapshot field order.
    pub const ALL: [&str; 13] = [
        HTTP_PORT,
        GRPC_PORT,
        PLANNER_MODE,
        PLANNER_TIMEOUT_MS,
        AGING_THRESHOLD_S,
        MAX_BATCH_SIZE,
        FLUSH_DEADLINE_MS,
        VRAM_SAFETY_MARGIN,
        HEALTH_INTERVAL_MS,
        MIN_RETRY_TOKENS,
        REDIS_ADDR,
        REDIS_PASSWORD,
        POSTGRES_DSN,
    ];
}
