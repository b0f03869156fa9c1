//! `Agent` — per-agent mutable state and the desired-position algorithm.
//!
//! Direction vector toward the current waypoint, normalized and added to the
//! current cell; the queue rotates to the next waypoint once the agent is
//! within its radius.

use std::collections::VecDeque;

use pedsim_core::{round_half_to_even, WaypointId, EPSILON};

use crate::waypoint::WaypointCatalogue;

/// A simulated pedestrian: a current cell, a desired next cell, and an
/// ordered, rotating queue of waypoint destinations.
///
/// Invariants:
/// - `(x, y)` is always a cell `Placement`/`TickEngine` has committed to, or
///   the initial loader's placement — never a transient desired value.
/// - If `current` is `Some`, `dest_x`/`dest_y`/`dest_r` mirror its waypoint.
/// - `queue` is non-empty immediately after `init_destination` runs on a
///   non-empty queue.
/// - `dx`/`dy` are meaningful only between `recompute_desired` and `commit`
///   within the same tick.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub x: i32,
    pub y: i32,
    pub dx: i32,
    pub dy: i32,

    queue: VecDeque<WaypointId>,
    current: Option<WaypointId>,

    dest_x: i32,
    dest_y: i32,
    dest_r: i32,
}

impl Agent {
    /// A new agent at `(x, y)` with an empty waypoint queue.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            dx: x,
            dy: y,
            queue: VecDeque::new(),
            current: None,
            dest_x: 0,
            dest_y: 0,
            dest_r: 0,
        }
    }

    pub fn current_waypoint(&self) -> Option<WaypointId> {
        self.current
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// The cached `(dest_x, dest_y, dest_r)` of the current waypoint.
    ///
    /// Meaningless (all-zero) while `current_waypoint()` is `None`. Used by
    /// [`crate::store::AgentStore`] to refresh its SIMD-facing SoA mirrors.
    pub fn dest(&self) -> (i32, i32, i32) {
        (self.dest_x, self.dest_y, self.dest_r)
    }

    /// Append `w` to the tail of the waypoint queue.
    ///
    /// Precondition (caller's responsibility): `w` is a live id in the
    /// `WaypointCatalogue` this agent will be paired with.
    pub fn add_waypoint(&mut self, w: WaypointId) {
        self.queue.push_back(w);
    }

    /// If the queue is non-empty, set `current` to its front and populate
    /// the cached destination fields. Called once, after loading.
    pub fn init_destination(&mut self, catalogue: &WaypointCatalogue) {
        if let Some(&id) = self.queue.front() {
            self.current = Some(id);
            self.refresh_cached(catalogue, id);
        }
    }

    /// Advance `(dx, dy)` toward the current waypoint, rotating the queue
    /// when the waypoint has been reached.
    pub fn recompute_desired(&mut self, catalogue: &WaypointCatalogue) {
        if self.current.is_none() {
            // Step 1 / boundary behaviour: empty queue leaves (x, y)
            // unchanged and sets (dx, dy) = (x, y).
            self.dx = self.x;
            self.dy = self.y;
            return;
        }

        let (mut diff_x, mut diff_y, mut len) = self.direction_and_length();

        if len < self.dest_r as f32 {
            self.rotate_queue(catalogue);
            let refreshed = self.direction_and_length();
            diff_x = refreshed.0;
            diff_y = refreshed.1;
            len = refreshed.2;
        }

        // Epsilon guard: when diff_x == diff_y == 0, len == 0 and the
        // division below would be NaN without it; with the guard,
        // diff/len == 0 and (dx, dy) resolve to (x, y) exactly as the
        // degenerate case requires.
        let len = len + EPSILON;
        self.dx = round_half_to_even(self.x as f32 + diff_x / len) as i32;
        self.dy = round_half_to_even(self.y as f32 + diff_y / len) as i32;
    }

    /// Commit a new current cell. Only `Placement`/`TickEngine` should call
    /// this.
    pub fn commit(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    fn direction_and_length(&self) -> (f32, f32, f32) {
        let diff_x = (self.dest_x - self.x) as f32;
        let diff_y = (self.dest_y - self.y) as f32;
        let len = (diff_x * diff_x + diff_y * diff_y).sqrt();
        (diff_x, diff_y, len)
    }

    /// Pop the reached waypoint, push it to the tail (routes cycle), and
    /// make the new front current.
    ///
    /// `recompute_desired` calls this automatically when a waypoint is
    /// reached. Public so the `simd` tick backend — which reimplements the
    /// numeric steps of `recompute_desired` in vector form but still needs
    /// this same container mutation for reached lanes — can call it
    /// directly.
    pub fn rotate_queue(&mut self, catalogue: &WaypointCatalogue) {
        if let Some(reached) = self.queue.pop_front() {
            self.queue.push_back(reached);
        }
        self.current = self.queue.front().copied();
        if let Some(id) = self.current {
            self.refresh_cached(catalogue, id);
        }
    }

    fn refresh_cached(&mut self, catalogue: &WaypointCatalogue, id: WaypointId) {
        let wp = catalogue.get(id);
        self.dest_x = wp.x;
        self.dest_y = wp.y;
        self.dest_r = wp.r;
    }
}
