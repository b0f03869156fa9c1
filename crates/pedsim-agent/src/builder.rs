//! Fluent builder for constructing an [`AgentStore`] from loaded agents.
//!
//! # Usage
//!
//! ```rust
//! use pedsim_agent::{Agent, AgentStoreBuilder, Waypoint, WaypointCatalogue};
//! use pedsim_core::WaypointId;
//!
//! let catalogue = WaypointCatalogue::new(vec![Waypoint::new(WaypointId(0), "a", 10, 10, 3)]);
//! let mut agent = Agent::new(0, 0);
//! agent.add_waypoint(WaypointId(0));
//!
//! let store = AgentStoreBuilder::new()
//!     .push_agent(agent)
//!     .build(&catalogue);
//!
//! assert_eq!(store.count(), 1);
//! ```

use crate::store::AgentStore;
use crate::agent::Agent;
use crate::waypoint::WaypointCatalogue;

/// Fluent builder for [`AgentStore`].
///
/// Agents are collected in load order; [`build`](Self::build) runs
/// `init_destination` on each of them against the supplied catalogue before
/// handing back the finished store.
#[derive(Default)]
pub struct AgentStoreBuilder {
    agents: Vec<Agent>,
}

impl AgentStoreBuilder {
    pub fn new() -> Self {
        Self { agents: Vec::new() }
    }

    pub fn with_capacity(count: usize) -> Self {
        Self { agents: Vec::with_capacity(count) }
    }

    /// Append one agent.
    pub fn push_agent(mut self, agent: Agent) -> Self {
        self.agents.push(agent);
        self
    }

    /// Append a batch of agents, e.g. one source-cell-rectangle's worth from
    /// a loaded scenario.
    pub fn extend_agents(mut self, agents: impl IntoIterator<Item = Agent>) -> Self {
        self.agents.extend(agents);
        self
    }

    /// Finish: initialize every agent's destination against `catalogue` and
    /// build the store.
    pub fn build(self, catalogue: &WaypointCatalogue) -> AgentStore {
        let mut store = AgentStore::new(self.agents);
        store.init_destinations(catalogue);
        store
    }
}
