//! `pedsim-agent` — per-agent state, waypoint queues, and the SIMD-facing
//! SoA mirror for the pedestrian crowd simulator.
//!
//! # Crate layout
//!
//! | Module       | Contents                                           |
//! |--------------|-----------------------------------------------------|
//! | [`waypoint`] | `Waypoint`, `WaypointCatalogue`                    |
//! | [`agent`]    | `Agent` and the desired-position algorithm         |
//! | [`store`]    | `AgentStore` (agents + SIMD SoA mirrors)           |
//! | [`builder`]  | `AgentStoreBuilder` (fluent construction)          |
//! | [`simd_buffer`] | `AlignedF32Buffer`, the SoA mirrors' backing storage |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|-------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.    |

pub mod agent;
pub mod builder;
pub mod simd_buffer;
pub mod store;
pub mod waypoint;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use builder::AgentStoreBuilder;
pub use simd_buffer::AlignedF32Buffer;
pub use store::AgentStore;
pub use waypoint::{Waypoint, WaypointCatalogue};
