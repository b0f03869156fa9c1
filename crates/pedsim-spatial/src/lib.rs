//! `pedsim-spatial` — neighbour queries and the region partition that makes
//! collision avoidance safely parallel.
//!
//! # Crate layout
//!
//! | Module              | Contents                                          |
//! |----------------------|----------------------------------------------------|
//! | [`neighbour_index`]  | `NeighbourIndex`, `GlobalIndex`, `GridIndex`, `RegionFilteredIndex` |
//! | [`region_map`]       | `RegionMap`                                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.   |

pub mod neighbour_index;
pub mod region_map;


pub use neighbour_index::{GlobalIndex, GridIndex, NeighbourIndex, RegionFilteredIndex};
pub use region_map::RegionMap;
