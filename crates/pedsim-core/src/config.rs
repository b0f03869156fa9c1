//! Run configuration — the resolved, validated form of CLI arguments.

use std::fmt;
use std::path::PathBuf;

use crate::{CoreError, CoreResult};

/// Which per-tick update strategy drives the simulation, as named on the
/// command line: the four CLI-selectable backends.
///
/// The region-parallel variant that makes Placement safe under parallelism
/// is not a fifth CLI choice — it has no flag of its own — but is available
/// as `pedsim_tick::engine::TickBackend::RegionParallel` for direct
/// library use and for the region-parallel tests.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Backend {
    Seq,
    Pthread,
    Omp,
    Simd,
}

impl Backend {
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::Seq => "seq",
            Backend::Pthread => "pthread",
            Backend::Omp => "omp",
            Backend::Simd => "simd",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Backend {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "seq" => Ok(Backend::Seq),
            "pthread" => Ok(Backend::Pthread),
            "omp" => Ok(Backend::Omp),
            "simd" => Ok(Backend::Simd),
            other => Err(CoreError::UnknownBackend(other.to_string())),
        }
    }
}

/// Mutually-exclusive run mode.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum RunMode {
    /// Run the sequential backend once as a baseline, then the selected
    /// backend, and report the speedup.
    TimingMode,
    /// Run to completion, writing a binary trace to `path`.
    ExportTrace { path: PathBuf },
    /// Run under the interactive viewer's pull interface (default).
    Viewer,
}

/// Top-level, validated simulation configuration.
///
/// Built by the CLI from parsed arguments; `pedsim-tick` and `pedsim-io`
/// consume it without re-validating.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Path to the scenario XML file.
    pub scenario_path: PathBuf,

    pub mode: RunMode,

    pub backend: Backend,

    /// Maximum number of ticks to run. Must be positive.
    pub max_steps: u64,

    /// `K` in the `K * K` `RegionMap` partition. 2 in the reference
    /// configuration.
    pub region_grid: u8,

    /// Notify observers every N ticks. 1 = every tick.
    pub output_interval_ticks: u64,
}

impl RunConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_steps == 0 {
            return Err(CoreError::Config("max_steps must be positive".into()));
        }
        if self.region_grid == 0 {
            return Err(CoreError::Config("region_grid must be positive".into()));
        }
        Ok(())
    }
}
