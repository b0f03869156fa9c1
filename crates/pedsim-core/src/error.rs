//! Framework error type.
//!
//! Sub-crates define their own error enums (`ScenarioError`, `TraceError`,
//! `TickError`) rather than wrapping `CoreError` — it exists for errors
//! raised by `pedsim-core` itself (configuration validation) and as a
//! common convention reference for the per-crate enums.

use thiserror::Error;

/// Errors produced by `pedsim-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown backend name: {0}")]
    UnknownBackend(String),
}

/// Shorthand result type for `pedsim-core`.
pub type CoreResult<T> = Result<T, CoreError>;
