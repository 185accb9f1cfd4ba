//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → env.rs (EnvSource lookup)
//!     → loader.rs (parse or default, per field)
//!     → Config (fully populated, immutable)
//!     → handed by reference to each subsystem at startup
//!
//! Optional, consumer-driven:
//!     validation.rs (semantic checks, never run by the loader)
//! ```
//!
//! # Design Decisions
//! - Loading is total: absent, empty or unparsable values become defaults
//! - Config is immutable once loaded; there is no reload
//! - No global instance; callers own the snapshot and pass it down

pub mod env;
pub mod loader;
pub mod schema;
pub mod validation;

pub use env::{EnvSource, ProcessEnv};
pub use schema::{
    CacheBackendSettings, Config, DatabaseSettings, PlannerMode, SchedulerSettings,
    ServerSettings, UnknownPlannerMode,
};
pub use validation::{validate_config, ValidationError};
