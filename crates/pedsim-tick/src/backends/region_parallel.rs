//! The `RegionParallel` backend: per-region workers run Placement safely in
//! parallel, migrants are drained sequentially afterwards.
//!
//! # The five steps
//!
//! 1. The caller hands in a [`RegionMap`] snapshot of current membership.
//! 2. Each region's worker seeds a taken-set from every member's pre-tick
//!    cell, then recomputes each member's desired move in turn. If the
//!    desired cell stays inside the region, Placement resolves it against
//!    that taken-set, minus the mover's own pre-tick cell and plus whatever
//!    its region-mates have already committed to this tick, and commits
//!    immediately. If it escapes the region, the agent is left uncommitted
//!    (its pre-tick cell stays marked taken) and handed to the worker's
//!    outbox instead.
//! 3. A barrier joins all workers; their outboxes become one migration list.
//! 4. Migrants are drained one at a time: Placement resolves each against
//!    its destination region's *current* members (which may already include
//!    earlier migrants from this same drain), then commits.
//! 5. `region_map` is cleared and refilled from the regions' kept lists plus
//!    the drain's insertions, so it exactly reflects committed positions
//!    when this function returns.

use std::collections::HashSet;

use pedsim_agent::{Agent, AgentStore, WaypointCatalogue};
use pedsim_core::{AgentId, RegionId};
use pedsim_spatial::{RegionFilteredIndex, RegionMap};
use rayon::prelude::*;

use crate::error::{TickError, TickResult};
use crate::placement;

pub fn run(
    store: &mut AgentStore,
    catalogue: &WaypointCatalogue,
    region_map: &mut RegionMap,
    worker_count: usize,
) -> TickResult<()> {
    let region_count = region_map.region_count();
    let member_lists: Vec<Vec<AgentId>> =
        (0..region_count).map(|r| region_map.agents_in(RegionId(r as u8)).to_vec()).collect();

    let flat_ids: Vec<AgentId> = member_lists.iter().flatten().copied().collect();
    let mut flat_refs = store.get_many_mut(&flat_ids);

    let mut region_refs: Vec<Vec<&mut Agent>> = Vec::with_capacity(region_count);
    {
        let mut iter = flat_refs.drain(..);
        for members in &member_lists {
            region_refs.push(iter.by_ref().take(members.len()).collect());
        }
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(worker_count.max(1))
        .build()
        .expect("failed to build region-parallel thread pool");

    let results: Vec<(Vec<AgentId>, Vec<AgentId>)> = pool.install(|| {
        region_refs
            .into_par_iter()
            .zip(member_lists.par_iter())
            .enumerate()
            .map(|(r, (agents, members))| {
                process_region(RegionId(r as u8), agents, members, catalogue, region_map)
            })
            .collect()
    });

    region_map.clear();
    let mut migrants = Vec::new();
    for (r, (kept, outbox)) in results.into_iter().enumerate() {
        let region = RegionId(r as u8);
        for id in kept {
            region_map.insert(region, id);
        }
        migrants.extend(outbox);
    }

    for id in migrants {
        let agent = store.agent(id);
        let (dx, dy) = (agent.dx, agent.dy);
        let dest_region = region_map
            .region_of(dx, dy)
            .ok_or(TickError::RegionOutOfRange { agent: id, x: dx, y: dy })?;

        let dest_members = region_map.agents_in(dest_region).to_vec();
        let index = RegionFilteredIndex::new(store, &dest_members);
        let resolved = placement::resolve(store, id, &index);

        store.agent_mut(id).commit(resolved.0, resolved.1);
        region_map.insert(dest_region, id);
    }

    Ok(())
}

/// Process one region's members: recompute desired moves, commit the ones
/// that stay in-region, and hand the rest back as migrants.
///
/// `agents` and `members` are parallel: `agents[i]` is the mutable handle
/// for `members[i]`.
fn process_region(
    region: RegionId,
    agents: Vec<&mut Agent>,
    members: &[AgentId],
    catalogue: &WaypointCatalogue,
    region_map: &RegionMap,
) -> (Vec<AgentId>, Vec<AgentId>) {
    let mut kept = Vec::with_capacity(members.len());
    let mut outbox = Vec::new();

    // Every member still occupies its pre-tick cell until it commits (or,
    // for a migrant, until the drain in `run` moves it later), regardless of
    // iteration order. Seed `taken` from all of them up front rather than
    // growing it only from moves already committed this call.
    let mut taken: HashSet<(i32, i32)> = agents.iter().map(|a| (a.x, a.y)).collect();

    for (&id, agent) in members.iter().zip(agents) {
        agent.recompute_desired(catalogue);
        let (x, y, dx, dy) = (agent.x, agent.y, agent.dx, agent.dy);

        if region_map.region_of(dx, dy) == Some(region) {
            // Exclude the mover's own pre-tick cell so its desired move can
            // land back on it (the idle case) without being rejected as
            // self-occupied.
            taken.remove(&(x, y));
            let resolved = placement::resolve_against_taken(x, y, dx, dy, &taken);
            agent.commit(resolved.0, resolved.1);
            taken.insert(resolved);
            kept.push(id);
        } else {
            outbox.push(id);
        }
    }

    (kept, outbox)
}
