//! The `StaticThreadPool` backend: a fixed pool of OS threads, each given an
//! interleaved partition of the agent population.
//!
//! Fast-path only — Placement never runs here ([`TickBackend::applies_placement`]
//! returns `false` for this variant), so each thread commits its agent's
//! desired cell directly with no cross-thread coordination beyond the
//! initial partition.

use pedsim_agent::{Agent, AgentStore, WaypointCatalogue};

pub fn run(store: &mut AgentStore, catalogue: &WaypointCatalogue, worker_count: usize) {
    let worker_count = worker_count.max(1);
    let agents: &mut [Agent] = store.agents_mut();

    // Interleaved partition: worker `w` owns indices `w, w + T, w + 2T, ...`.
    // Collecting disjoint `&mut Agent` slices up front lets every worker run
    // on its own OS thread with no locking.
    let mut buckets: Vec<Vec<&mut Agent>> = (0..worker_count).map(|_| Vec::new()).collect();
    for (i, agent) in agents.iter_mut().enumerate() {
        buckets[i % worker_count].push(agent);
    }

    std::thread::scope(|scope| {
        for bucket in buckets {
            scope.spawn(|| {
                for agent in bucket {
                    agent.recompute_desired(catalogue);
                    let (dx, dy) = (agent.dx, agent.dy);
                    agent.commit(dx, dy);
                }
            });
        }
    });

    store.sync_soa_from_agents();
}
