//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! RUST_LOG → logging.rs (EnvFilter + fmt layer)
//! Config   → logging.rs (redacted startup summary)
//! ```

pub mod logging;
