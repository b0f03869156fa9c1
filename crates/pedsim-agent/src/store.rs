//! `AgentStore`: the authoritative `Vec<Agent>` plus the SIMD-facing SoA
//! mirrors kept alongside it.
//!
//! # Why two representations?
//!
//! Most tick backends (`Sequential`, `StaticThreadPool`, `WorkSharing`,
//! `RegionParallel`) operate agent-by-agent and are happiest walking
//! `Agent`'s own fields, queue included. The `Simd` backend instead wants
//! flat `f32` lanes it can load directly into vector registers. Keeping a
//! second, flat copy (`xs`, `ys`, `dest_xs`, `dest_ys`, `dest_rs`) avoids
//! forcing every backend through an array-of-structs-of-arrays compromise;
//! `sync_soa_from_agents` is the single seam between the two views.
//!
//! The mirrors here are backed by [`AlignedF32Buffer`], 32-byte aligned and
//! Pod by construction, so the `simd` backend can reinterpret chunks as
//! `std::simd::f32x8` via `bytemuck::cast_slice` without an unsafe cast at
//! the call site.

use pedsim_core::AgentId;

use crate::agent::Agent;
use crate::simd_buffer::AlignedF32Buffer;
use crate::waypoint::WaypointCatalogue;

/// All agents in the simulation, plus scratch SoA mirrors for the SIMD
/// backend.
///
/// `xs`/`ys`/`dest_xs`/`dest_ys`/`dest_rs` are derived data: they are valid
/// only immediately after a call to [`sync_soa_from_agents`](Self::sync_soa_from_agents)
/// and are never read by anything except the `simd` tick backend.
#[derive(Clone)]
pub struct AgentStore {
    agents: Vec<Agent>,

    pub xs: AlignedF32Buffer,
    pub ys: AlignedF32Buffer,
    pub dest_xs: AlignedF32Buffer,
    pub dest_ys: AlignedF32Buffer,
    pub dest_rs: AlignedF32Buffer,
}

impl AgentStore {
    /// Take ownership of a fully-populated `Vec<Agent>` and derive the
    /// initial SoA mirrors from it.
    pub fn new(agents: Vec<Agent>) -> Self {
        let count = agents.len();
        let mut store = Self {
            agents,
            xs: AlignedF32Buffer::zeroed(count),
            ys: AlignedF32Buffer::zeroed(count),
            dest_xs: AlignedF32Buffer::zeroed(count),
            dest_ys: AlignedF32Buffer::zeroed(count),
            dest_rs: AlignedF32Buffer::zeroed(count),
        };
        store.sync_soa_from_agents();
        store
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.agents.len() as u32).map(AgentId)
    }

    #[inline]
    pub fn agent(&self, id: AgentId) -> &Agent {
        &self.agents[id.index()]
    }

    #[inline]
    pub fn agent_mut(&mut self, id: AgentId) -> &mut Agent {
        &mut self.agents[id.index()]
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    /// Run `Agent::init_destination` over every agent, then refresh the SoA
    /// mirrors. Called once, right after loading.
    pub fn init_destinations(&mut self, catalogue: &WaypointCatalogue) {
        for agent in &mut self.agents {
            agent.init_destination(catalogue);
        }
        self.sync_soa_from_agents();
    }

    /// Refresh `xs`/`ys`/`dest_xs`/`dest_ys`/`dest_rs` from the authoritative
    /// per-agent state. The `simd` backend must call this before every tick's
    /// vectorized pass; no other backend needs it.
    pub fn sync_soa_from_agents(&mut self) {
        for (i, agent) in self.agents.iter().enumerate() {
            self.xs[i] = agent.x as f32;
            self.ys[i] = agent.y as f32;
            let (dest_x, dest_y, dest_r) = agent.dest();
            self.dest_xs[i] = dest_x as f32;
            self.dest_ys[i] = dest_y as f32;
            self.dest_rs[i] = dest_r as f32;
        }
    }

    /// Return mutable references to a set of agents.
    ///
    /// Used by the `region_parallel` tick backend, which hands each region's
    /// worker thread exclusive access to a disjoint slice of agents.
    ///
    /// # Precondition (enforced by caller)
    ///
    /// `ids` must contain no duplicates and every id must be in bounds. Both
    /// hold for agent ids partitioned by `RegionMap`, since a region map
    /// assigns each agent to exactly one region.
    pub fn get_many_mut(&mut self, ids: &[AgentId]) -> Vec<&mut Agent> {
        let ptr = self.agents.as_mut_ptr();
        // SAFETY: `ids` are unique and in-bounds (caller invariant), so each
        // pointer aliases a distinct element of `self.agents`.
        ids.iter().map(|a| unsafe { &mut *ptr.add(a.index()) }).collect()
    }
}
