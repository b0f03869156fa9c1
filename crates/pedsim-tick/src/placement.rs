//! Placement — collision-free resolution of an agent's desired move.
//!
//! An agent tries its desired cell first, then one of two alternates, then
//! gives up and stays put. Pure functions here, independent of any backend,
//! so `sequential` and `region_parallel` can share the exact same
//! resolution logic against different [`NeighbourIndex`] scopes.

use std::collections::HashSet;

use pedsim_agent::AgentStore;
use pedsim_core::AgentId;
use pedsim_spatial::NeighbourIndex;

/// Chebyshev radius of the box a cell's occupants are drawn from before
/// Placement picks among `(dx, dy)` and its two alternates.
const NEIGHBOUR_RADIUS: i32 = 2;

/// The desired cell plus its two alternates, in try-order.
///
/// Axis-aligned desired moves (`diffX == 0 || diffY == 0`) swap the two
/// deltas to produce alternates that sidestep perpendicular to the move;
/// diagonal moves fall back to the two cells that share one coordinate with
/// `(x, y)` and one with `(dx, dy)`.
pub fn candidates(x: i32, y: i32, dx: i32, dy: i32) -> [(i32, i32); 3] {
    let diff_x = dx - x;
    let diff_y = dy - y;

    let (p1, p2) = if diff_x == 0 || diff_y == 0 {
        ((dx + diff_y, dy + diff_x), (dx - diff_y, dy - diff_x))
    } else {
        ((dx, y), (x, dy))
    };

    [(dx, dy), p1, p2]
}

/// Return the first of `(dx, dy)`'s candidates not present in `taken`, or
/// `(x, y)` (stay put) if all three are occupied.
pub fn resolve_against_taken(
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
    taken: &HashSet<(i32, i32)>,
) -> (i32, i32) {
    for candidate in candidates(x, y, dx, dy) {
        if !taken.contains(&candidate) {
            return candidate;
        }
    }
    (x, y)
}

/// Resolve `agent`'s desired move against the neighbours `index` reports
/// within [`NEIGHBOUR_RADIUS`] of its current cell.
///
/// Placement only needs to know which cells *nearby* agents already occupy,
/// not every agent in the simulation.
pub fn resolve(store: &AgentStore, agent: AgentId, index: &dyn NeighbourIndex) -> (i32, i32) {
    let a = store.agent(agent);
    let (x, y, dx, dy) = (a.x, a.y, a.dx, a.dy);

    let taken: HashSet<(i32, i32)> = index
        .agents_within(x, y, NEIGHBOUR_RADIUS)
        .into_iter()
        .filter(|&id| id != agent)
        .map(|id| {
            let other = store.agent(id);
            (other.x, other.y)
        })
        .collect();

    resolve_against_taken(x, y, dx, dy, &taken)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_aligned_move_swaps_deltas_for_alternates() {
        let [primary, p1, p2] = candidates(0, 0, 1, 0);
        assert_eq!(primary, (1, 0));
        assert_eq!(p1, (1, 1));
        assert_eq!(p2, (1, -1));
    }

    #[test]
    fn diagonal_move_shares_one_axis_with_start_and_end() {
        let [primary, p1, p2] = candidates(0, 0, 1, 1);
        assert_eq!(primary, (1, 1));
        assert_eq!(p1, (1, 0));
        assert_eq!(p2, (0, 1));
    }

    #[test]
    fn stationary_desired_move_has_itself_as_every_candidate() {
        let [primary, p1, p2] = candidates(3, 3, 3, 3);
        assert_eq!(primary, (3, 3));
        assert_eq!(p1, (3, 3));
        assert_eq!(p2, (3, 3));
    }

    #[test]
    fn falls_back_to_second_candidate_when_desired_is_taken() {
        let mut taken = HashSet::new();
        taken.insert((1, 0));
        let resolved = resolve_against_taken(0, 0, 1, 0, &taken);
        assert_eq!(resolved, (1, 1));
    }

    #[test]
    fn stays_put_when_all_three_candidates_are_taken() {
        let mut taken = HashSet::new();
        taken.insert((1, 0));
        taken.insert((1, 1));
        taken.insert((1, -1));
        let resolved = resolve_against_taken(0, 0, 1, 0, &taken);
        assert_eq!(resolved, (0, 0));
    }
}
