//! Waypoints — immutable named destinations shared by many agents.

use pedsim_core::WaypointId;

/// A named destination with an integer centre and an arrival radius.
///
/// Immutable after load; many agents reference the same `Waypoint` by
/// [`WaypointId`]. Lifetime equals the simulator's lifetime.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub id: WaypointId,
    pub name: String,
    pub x: i32,
    pub y: i32,
    /// Arrival radius. Must be positive.
    pub r: i32,
}

impl Waypoint {
    pub fn new(id: WaypointId, name: impl Into<String>, x: i32, y: i32, r: i32) -> Self {
        Self { id, name: name.into(), x, y, r }
    }
}

/// The load-time-built, shared waypoint catalogue.
///
/// A thin `Vec` wrapper indexed by [`WaypointId`] — every `Agent`'s queue
/// holds `WaypointId`s into one shared `WaypointCatalogue`, never owned
/// copies of `Waypoint`.
#[derive(Clone, Debug, Default)]
pub struct WaypointCatalogue {
    waypoints: Vec<Waypoint>,
}

impl WaypointCatalogue {
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        Self { waypoints }
    }

    #[inline]
    pub fn get(&self, id: WaypointId) -> &Waypoint {
        &self.waypoints[id.index()]
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.waypoints.iter()
    }
}
