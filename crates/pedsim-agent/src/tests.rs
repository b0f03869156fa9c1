//! Unit tests for pedsim-agent.

#[cfg(test)]
mod waypoint {
    use crate::{Waypoint, WaypointCatalogue};
    use pedsim_core::WaypointId;

    #[test]
    fn get_by_id() {
        let cat = WaypointCatalogue::new(vec![
            Waypoint::new(WaypointId(0), "a", 0, 0, 1),
            Waypoint::new(WaypointId(1), "b", 10, 10, 2),
        ]);
        assert_eq!(cat.get(WaypointId(1)).name, "b");
        assert_eq!(cat.len(), 2);
        assert!(!cat.is_empty());
    }
}

#[cfg(test)]
mod agent {
    use crate::{Agent, Waypoint, WaypointCatalogue};
    use pedsim_core::WaypointId;

    fn catalogue() -> WaypointCatalogue {
        WaypointCatalogue::new(vec![
            Waypoint::new(WaypointId(0), "a", 10, 0, 1),
            Waypoint::new(WaypointId(1), "b", 0, 0, 1),
        ])
    }

    #[test]
    fn empty_queue_leaves_position_and_sets_dx_dy_to_xy() {
        let mut agent = Agent::new(5, 5);
        agent.recompute_desired(&catalogue());
        assert_eq!((agent.dx, agent.dy), (5, 5));
    }

    #[test]
    fn moves_toward_current_waypoint() {
        let cat = catalogue();
        let mut agent = Agent::new(0, 0);
        agent.add_waypoint(WaypointId(0)); // (10, 0), r = 1
        agent.init_destination(&cat);

        agent.recompute_desired(&cat);
        // Straight line along +x: dx should move toward 10, dy stay at 0.
        assert!(agent.dx > 0);
        assert_eq!(agent.dy, 0);
    }

    #[test]
    fn rotates_queue_on_arrival_and_cycles() {
        let cat = catalogue();
        let mut agent = Agent::new(10, 0); // already at waypoint 0's centre
        agent.add_waypoint(WaypointId(0));
        agent.add_waypoint(WaypointId(1));
        agent.init_destination(&cat);
        assert_eq!(agent.current_waypoint(), Some(WaypointId(0)));

        agent.recompute_desired(&cat);
        // Within radius of waypoint 0 -> rotates to waypoint 1.
        assert_eq!(agent.current_waypoint(), Some(WaypointId(1)));
        assert_eq!(agent.queue_len(), 2);
    }

    #[test]
    fn single_waypoint_queue_cycles_on_itself() {
        let cat = catalogue();
        let mut agent = Agent::new(10, 0);
        agent.add_waypoint(WaypointId(0));
        agent.init_destination(&cat);

        agent.recompute_desired(&cat);
        assert_eq!(agent.current_waypoint(), Some(WaypointId(0)));
        assert_eq!(agent.queue_len(), 1);
    }

    #[test]
    fn commit_updates_position_only() {
        let mut agent = Agent::new(0, 0);
        agent.recompute_desired(&catalogue());
        agent.commit(agent.dx, agent.dy);
        assert_eq!((agent.x, agent.y), (0, 0));
    }
}

#[cfg(test)]
mod store {
    use crate::{Agent, AgentStoreBuilder, Waypoint, WaypointCatalogue};
    use pedsim_core::{AgentId, WaypointId};

    fn catalogue() -> WaypointCatalogue {
        WaypointCatalogue::new(vec![Waypoint::new(WaypointId(0), "a", 20, 20, 2)])
    }

    #[test]
    fn agent_ids_iterator() {
        let store = AgentStoreBuilder::new()
            .extend_agents((0..5).map(|i| Agent::new(i, i)))
            .build(&catalogue());
        let ids: Vec<AgentId> = store.agent_ids().collect();
        assert_eq!(ids, vec![AgentId(0), AgentId(1), AgentId(2), AgentId(3), AgentId(4)]);
    }

    #[test]
    fn zero_agents() {
        let store = AgentStoreBuilder::new().build(&catalogue());
        assert!(store.is_empty());
    }

    #[test]
    fn soa_mirror_matches_agents_after_sync() {
        let mut agent = Agent::new(3, 4);
        agent.add_waypoint(WaypointId(0));
        let mut store = AgentStoreBuilder::new().push_agent(agent).build(&catalogue());
        store.sync_soa_from_agents();
        assert_eq!(store.xs[0], 3.0);
        assert_eq!(store.ys[0], 4.0);
        assert_eq!(store.dest_xs[0], 20.0);
        assert_eq!(store.dest_ys[0], 20.0);
        assert_eq!(store.dest_rs[0], 2.0);
    }

    #[test]
    fn get_many_mut_returns_disjoint_agents() {
        let mut store = AgentStoreBuilder::new()
            .extend_agents((0..4).map(|i| Agent::new(i, 0)))
            .build(&catalogue());
        let refs = store.get_many_mut(&[AgentId(0), AgentId(2)]);
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].x, 0);
        assert_eq!(refs[1].x, 2);
    }
}
