//! `pedsim-tick` — the four benchmark backends plus the region-parallel
//! variant that makes Placement safe under parallelism.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-------------------------------------------------------------|
//! | [`placement`]  | Collision-free move resolution, shared by every backend   |
//! | [`engine`]      | `TickEngine`, `TickBackend`                               |
//! | [`backends`]    | One module per backend                                    |
//! | [`simulator`]   | `Simulator` — drives `TickEngine` to completion            |
//! | [`observer`]    | `SimObserver`, `NoopObserver`                              |
//! | [`error`]       | `TickError`, `TickResult`                                  |
//!
//! # Feature flags
//!
//! | Flag   | Effect                                                       |
//! |--------|------------------------------------------------------------------|
//! | `simd` | Builds `backends::simd` (requires nightly `portable_simd`).       |

#![cfg_attr(feature = "simd", feature(portable_simd))]

pub mod backends;
pub mod engine;
pub mod error;
pub mod observer;
pub mod placement;
pub mod simulator;


pub use engine::{TickBackend, TickEngine};
pub use error::{TickError, TickResult};
pub use observer::{NoopObserver, SimObserver};
pub use simulator::Simulator;
