//! Error types for `pedsim-io`.

use thiserror::Error;

/// Errors raised while loading a scenario XML document.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("I/O error reading scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed scenario XML: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("agent references unknown waypoint id \"{0}\"")]
    DanglingWaypointReference(String),

    #[error("scenario defines no agents")]
    NoAgents,
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Errors raised while writing a binary trace.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("I/O error writing trace: {0}")]
    Io(#[from] std::io::Error),
}

pub type TraceResult<T> = Result<T, TraceError>;
