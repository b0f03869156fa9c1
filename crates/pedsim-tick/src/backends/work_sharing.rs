//! The `WorkSharing` backend: a fixed-size `rayon` thread pool pulls agents
//! from a shared work queue instead of a static partition.
//!
//! Fast-path only, like `StaticThreadPool` — no Placement, so there is
//! nothing to synchronize beyond rayon's own work-stealing.

use pedsim_agent::{AgentStore, WaypointCatalogue};
use rayon::prelude::*;

pub fn run(store: &mut AgentStore, catalogue: &WaypointCatalogue, worker_count: usize) {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(worker_count.max(1))
        .build()
        .expect("failed to build work-sharing thread pool");

    pool.install(|| {
        store.agents_mut().par_iter_mut().for_each(|agent| {
            agent.recompute_desired(catalogue);
            let (dx, dy) = (agent.dx, agent.dy);
            agent.commit(dx, dy);
        });
    });

    store.sync_soa_from_agents();
}
