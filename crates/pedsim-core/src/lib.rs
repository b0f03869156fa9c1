//! `pedsim-core` — foundational types for the pedestrian crowd simulator.
//!
//! This crate is a dependency of every other `pedsim-*` crate. It
//! intentionally has no `pedsim-*` dependencies and a minimal external one
//! (`thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `WaypointId`, `RegionId`                   |
//! | [`tick`]        | `Tick`                                                |
//! | [`config`]      | `RunConfig`, `Backend`, `RunMode`                     |
//! | [`math`]        | `EPSILON`, `round_half_to_even`                       |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod math;
pub mod tick;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Backend, RunConfig, RunMode};
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, RegionId, WaypointId};
pub use math::{round_half_to_even, EPSILON};
pub use tick::Tick;
