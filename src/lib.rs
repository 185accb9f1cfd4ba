//! Environment configuration for the inference scheduler.
//!
//! Call [`Config::load`] once at startup and hand the resulting snapshot (or
//! the relevant sub-record) to each component that needs it.

pub mod config;
pub mod observability;

pub use config::schema::Config;
