//! `TickEngine` — dispatches one simulation tick to the selected backend.

use pedsim_agent::{AgentStore, WaypointCatalogue};
use pedsim_core::{Backend, Tick};
use pedsim_spatial::RegionMap;

use crate::backends;
use crate::error::{TickError, TickResult};

/// Which per-tick update strategy a [`TickEngine`] runs.
///
/// A superset of [`Backend`]: `RegionParallel` has no CLI flag of its own,
/// but is reachable through direct library use and is the only parallel
/// variant where Placement still applies.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TickBackend {
    Sequential,
    StaticThreadPool,
    WorkSharing,
    Simd,
    RegionParallel,
}

impl TickBackend {
    /// Map a CLI-selectable [`Backend`] to its engine counterpart.
    ///
    /// Never produces `RegionParallel` — that variant is library-only.
    pub fn from_cli(backend: Backend) -> Self {
        match backend {
            Backend::Seq => TickBackend::Sequential,
            Backend::Pthread => TickBackend::StaticThreadPool,
            Backend::Omp => TickBackend::WorkSharing,
            Backend::Simd => TickBackend::Simd,
        }
    }

    /// Whether Placement (collision avoidance) runs under this backend.
    ///
    /// `StaticThreadPool`, `WorkSharing`, and `Simd` commit the desired cell
    /// directly — only `Sequential` and `RegionParallel` can safely consult
    /// neighbours without a data race, so only they resolve candidates
    /// against taken cells.
    pub fn applies_placement(self) -> bool {
        matches!(self, TickBackend::Sequential | TickBackend::RegionParallel)
    }
}

/// Drives one backend, one tick at a time, over a shared [`AgentStore`].
pub struct TickEngine {
    backend: TickBackend,
    catalogue: WaypointCatalogue,
    worker_count: usize,
    region_grid: u8,
    region_map: Option<RegionMap>,
}

impl TickEngine {
    /// `region_grid` is ignored for every backend but `RegionParallel`.
    pub fn new(
        backend: TickBackend,
        catalogue: WaypointCatalogue,
        worker_count: usize,
        region_grid: u8,
    ) -> Self {
        Self { backend, catalogue, worker_count, region_grid, region_map: None }
    }

    pub fn backend(&self) -> TickBackend {
        self.backend
    }

    /// Run one tick: recompute every agent's desired move, resolve it
    /// (placement-aware backends only), and commit.
    pub fn tick(&mut self, store: &mut AgentStore, tick: Tick) -> TickResult<()> {
        let agent_count = store.count();

        match self.backend {
            TickBackend::Sequential => {
                backends::sequential::run(store, &self.catalogue);
            }
            TickBackend::StaticThreadPool => {
                backends::thread_pool::run(store, &self.catalogue, self.worker_count);
            }
            TickBackend::WorkSharing => {
                backends::work_sharing::run(store, &self.catalogue, self.worker_count);
            }
            TickBackend::Simd => {
                run_simd(store, &self.catalogue)?;
            }
            TickBackend::RegionParallel => {
                let region_map = self
                    .region_map
                    .get_or_insert_with(|| RegionMap::build(store, self.region_grid));
                backends::region_parallel::run(
                    store,
                    &self.catalogue,
                    region_map,
                    self.worker_count,
                )?;
            }
        }

        tracing::debug!(tick = tick.0, backend = ?self.backend, agent_count, "tick complete");
        Ok(())
    }
}

#[cfg(feature = "simd")]
fn run_simd(store: &mut AgentStore, catalogue: &WaypointCatalogue) -> TickResult<()> {
    backends::simd::run(store, catalogue);
    Ok(())
}

#[cfg(not(feature = "simd"))]
fn run_simd(_store: &mut AgentStore, _catalogue: &WaypointCatalogue) -> TickResult<()> {
    Err(TickError::Config(
        "the simd backend requires building pedsim-tick with `--features simd` on nightly".into(),
    ))
}
