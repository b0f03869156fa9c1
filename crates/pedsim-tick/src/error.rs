//! Tick-engine error type.

use pedsim_core::AgentId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TickError {
    #[error("tick engine configuration error: {0}")]
    Config(String),

    /// Category (c) from the error taxonomy: an agent's region id fell
    /// outside `0..k*k` after migration. Fatal — indicates corrupted state,
    /// never expected in correct code.
    #[error("agent {agent} migrated to ({x}, {y}), which is outside the region map's bounds")]
    RegionOutOfRange { agent: AgentId, x: i32, y: i32 },
}

pub type TickResult<T> = Result<T, TickError>;
