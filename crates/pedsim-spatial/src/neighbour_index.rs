//! Neighbour queries: "which agents occupy cells within Chebyshev distance
//! `d` of `(x, y)`?"
//!
//! Three implementations share the [`NeighbourIndex`] contract — set
//! equality of results, not algorithm. [`GridIndex`] is the one that matters
//! for throughput: a linear scan is O(N) per query and Placement calls this
//! once per agent per tick.

use rustc_hash::FxHashMap;

use pedsim_agent::{Agent, AgentStore};
use pedsim_core::AgentId;

/// Common contract for all neighbour-query implementations.
pub trait NeighbourIndex {
    /// Agents `a'` with `|a'.x - x| <= d` and `|a'.y - y| <= d`.
    fn agents_within(&self, x: i32, y: i32, d: i32) -> Vec<AgentId>;
}

#[inline]
fn within_box(agent: &Agent, x: i32, y: i32, d: i32) -> bool {
    (agent.x - x).abs() <= d && (agent.y - y).abs() <= d
}

/// The trivial baseline: every query returns every agent. O(N) per query.
pub struct GlobalIndex<'a> {
    store: &'a AgentStore,
}

impl<'a> GlobalIndex<'a> {
    pub fn new(store: &'a AgentStore) -> Self {
        Self { store }
    }
}

impl NeighbourIndex for GlobalIndex<'_> {
    fn agents_within(&self, x: i32, y: i32, d: i32) -> Vec<AgentId> {
        self.store
            .agent_ids()
            .filter(|&id| within_box(self.store.agent(id), x, y, d))
            .collect()
    }
}

/// A spatial hash grid keyed by `(x / cell_size, y / cell_size)`.
///
/// `cell_size` should be twice the Placement box radius (Chebyshev distance
/// 2, so a `cell_size` of 4) per the grid-hash recommendation: any agent
/// within the query box falls into one of the 9 cells surrounding the
/// query's own cell, so a query only ever visits a constant number of
/// buckets instead of scanning every agent.
pub struct GridIndex<'a> {
    store: &'a AgentStore,
    cell_size: i32,
    cells: FxHashMap<(i32, i32), Vec<AgentId>>,
}

impl<'a> GridIndex<'a> {
    /// Build the grid from `store`'s currently committed positions.
    pub fn build(store: &'a AgentStore, cell_size: i32) -> Self {
        debug_assert!(cell_size > 0, "cell_size must be positive");
        let mut cells: FxHashMap<(i32, i32), Vec<AgentId>> = FxHashMap::default();
        for id in store.agent_ids() {
            let agent = store.agent(id);
            let key = (agent.x.div_euclid(cell_size), agent.y.div_euclid(cell_size));
            cells.entry(key).or_default().push(id);
        }
        Self { store, cell_size, cells }
    }
}

impl NeighbourIndex for GridIndex<'_> {
    fn agents_within(&self, x: i32, y: i32, d: i32) -> Vec<AgentId> {
        let lo = (x - d).div_euclid(self.cell_size);
        let hi = (x + d).div_euclid(self.cell_size);
        let lo_y = (y - d).div_euclid(self.cell_size);
        let hi_y = (y + d).div_euclid(self.cell_size);

        let mut out = Vec::new();
        for cx in lo..=hi {
            for cy in lo_y..=hi_y {
                let Some(bucket) = self.cells.get(&(cx, cy)) else { continue };
                out.extend(
                    bucket
                        .iter()
                        .copied()
                        .filter(|&id| within_box(self.store.agent(id), x, y, d)),
                );
            }
        }
        out
    }
}

/// Restricts queries to a pre-selected subset of agents — the members of one
/// `RegionMap` region. Used by the region-parallel backend, whose workers
/// must never see agents outside their own region's snapshot.
pub struct RegionFilteredIndex<'a> {
    store: &'a AgentStore,
    members: &'a [AgentId],
}

impl<'a> RegionFilteredIndex<'a> {
    pub fn new(store: &'a AgentStore, members: &'a [AgentId]) -> Self {
        Self { store, members }
    }
}

impl NeighbourIndex for RegionFilteredIndex<'_> {
    fn agents_within(&self, x: i32, y: i32, d: i32) -> Vec<AgentId> {
        self.members
            .iter()
            .copied()
            .filter(|&id| within_box(self.store.agent(id), x, y, d))
            .collect()
    }
}
