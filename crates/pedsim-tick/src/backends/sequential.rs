//! The `Sequential` backend: the reference single-threaded baseline.
//!
//! Every agent recomputes its desired move, a fresh [`GridIndex`] is built
//! over the *committed* positions so far this tick, and Placement resolves
//! each move against it before committing — so an agent already moved this
//! tick is visible to the ones that move after it.

use pedsim_agent::{AgentStore, WaypointCatalogue};
use pedsim_spatial::GridIndex;

use crate::placement;

/// Cell size for the grid index: twice the Placement box radius.
const CELL_SIZE: i32 = 4;

pub fn run(store: &mut AgentStore, catalogue: &WaypointCatalogue) {
    let ids: Vec<_> = store.agent_ids().collect();

    for &id in &ids {
        store.agent_mut(id).recompute_desired(catalogue);
    }

    for &id in &ids {
        let index = GridIndex::build(store, CELL_SIZE);
        let (nx, ny) = placement::resolve(store, id, &index);
        store.agent_mut(id).commit(nx, ny);
    }
}
