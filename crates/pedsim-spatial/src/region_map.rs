//! `RegionMap` — the fixed K×K spatial partition used by the region-parallel
//! tick backend to make Placement safe under parallelism.
//!
//! Each region's member list is a separate `Vec`, so no two workers ever
//! touch the same bucket; migrants are drained into a shared list, then
//! redrained per destination region.

use pedsim_agent::AgentStore;
use pedsim_core::{AgentId, RegionId};

/// Partitions the world into a `k x k` grid of regions and tracks which
/// agents currently belong to each one.
///
/// World bounds are fixed at construction time from the agent positions
/// present at that moment (taking the initial bounding box, inclusive, is
/// this implementation's resolution of that detail — region membership
/// itself is what matters, not where the bounds come from). `region_of`
/// returns `None` for a position outside those bounds; callers treat that
/// as a fatal invariant violation.
pub struct RegionMap {
    k: u8,
    min_x: i32,
    min_y: i32,
    width: i32,
    height: i32,
    members: Vec<Vec<AgentId>>,
}

impl RegionMap {
    /// Build a `k x k` region map from `store`'s current committed
    /// positions. `k` must be at least 1.
    pub fn build(store: &AgentStore, k: u8) -> Self {
        assert!(k >= 1, "region grid must be at least 1x1");

        let (min_x, max_x, min_y, max_y) = bounding_box(store);
        let width = (max_x - min_x + 1).max(1);
        let height = (max_y - min_y + 1).max(1);

        let mut map = Self {
            k,
            min_x,
            min_y,
            width,
            height,
            members: vec![Vec::new(); k as usize * k as usize],
        };
        map.rebuild(store);
        map
    }

    /// Total number of regions, `k * k`.
    pub fn region_count(&self) -> usize {
        self.k as usize * self.k as usize
    }

    pub fn k(&self) -> u8 {
        self.k
    }

    /// The region containing `(x, y)`, or `None` if it falls outside this
    /// map's world bounds.
    pub fn region_of(&self, x: i32, y: i32) -> Option<RegionId> {
        let col = ((x - self.min_x) as i64 * self.k as i64).div_euclid(self.width as i64);
        let row = ((y - self.min_y) as i64 * self.k as i64).div_euclid(self.height as i64);
        let k = self.k as i64;
        if (0..k).contains(&col) && (0..k).contains(&row) {
            Some(RegionId(row as u8 * self.k + col as u8))
        } else {
            None
        }
    }

    /// Agents currently mapped to `region`.
    pub fn agents_in(&self, region: RegionId) -> &[AgentId] {
        &self.members[region.index()]
    }

    /// Recompute every region's membership from `store`'s committed
    /// positions. Must be called once every tick completes.
    ///
    /// Returns the ids of any agents whose position fell outside this map's
    /// bounds; an empty `Vec` is the expected, correct-code case.
    pub fn rebuild(&mut self, store: &AgentStore) -> Vec<AgentId> {
        for bucket in &mut self.members {
            bucket.clear();
        }
        let mut out_of_range = Vec::new();
        for id in store.agent_ids() {
            let agent = store.agent(id);
            match self.region_of(agent.x, agent.y) {
                Some(region) => self.members[region.index()].push(id),
                None => out_of_range.push(id),
            }
        }
        out_of_range
    }

    /// Move a single agent into `region`'s member list. Used by the
    /// region-parallel backend's migration-queue drain phase; the caller
    /// holds that region's lock for the duration.
    pub fn insert(&mut self, region: RegionId, agent: AgentId) {
        self.members[region.index()].push(agent);
    }

    /// Empty every region's member list without touching `k` or the world
    /// bounds. Used by the region-parallel backend, which repopulates
    /// membership itself (in-region stays and cross-region migrants) rather
    /// than scanning every agent's committed position via `rebuild`.
    pub fn clear(&mut self) {
        for bucket in &mut self.members {
            bucket.clear();
        }
    }
}

fn bounding_box(store: &AgentStore) -> (i32, i32, i32, i32) {
    let mut min_x = 0;
    let mut max_x = 0;
    let mut min_y = 0;
    let mut max_y = 0;
    for (i, id) in store.agent_ids().enumerate() {
        let agent = store.agent(id);
        if i == 0 {
            min_x = agent.x;
            max_x = agent.x;
            min_y = agent.y;
            max_y = agent.y;
        } else {
            min_x = min_x.min(agent.x);
            max_x = max_x.max(agent.x);
            min_y = min_y.min(agent.y);
            max_y = max_y.max(agent.y);
        }
    }
    (min_x, max_x, min_y, max_y)
}
