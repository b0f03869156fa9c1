//! Runs a small population through the sequential tick engine twice: once
//! recording positions directly, once through a real [`TraceWriter`] via
//! [`TraceObserver`]. Reads the trace file back with the documented wire
//! format and checks it matches the directly-recorded reference.

use pedsim_agent::{Agent, AgentStoreBuilder, Waypoint, WaypointCatalogue};
use pedsim_core::{Tick, WaypointId};
use pedsim_io::{TraceObserver, TraceWriter};
use pedsim_tick::{SimObserver, Simulator, TickBackend, TickEngine};

fn three_agent_scenario() -> (pedsim_agent::AgentStore, WaypointCatalogue) {
    let catalogue = WaypointCatalogue::new(vec![Waypoint::new(WaypointId(0), "goal", 50, 0, 1)]);
    let mut builder = AgentStoreBuilder::with_capacity(3);
    for &(x, y) in &[(0, 0), (5, 0), (10, 5)] {
        let mut agent = Agent::new(x, y);
        agent.add_waypoint(WaypointId(0));
        builder = builder.push_agent(agent);
    }
    let store = builder.build(&catalogue);
    (store, catalogue)
}

/// Records every snapshot's positions, in agent-index order, as a reference
/// to compare the trace file against.
struct RecordingObserver {
    frames: Vec<Vec<(i16, i16)>>,
}

impl SimObserver for RecordingObserver {
    fn on_snapshot(&mut self, _tick: Tick, positions: &pedsim_agent::AgentStore) {
        let frame = positions
            .agent_ids()
            .map(|id| {
                let a = positions.agent(id);
                (a.x as i16, a.y as i16)
            })
            .collect();
        self.frames.push(frame);
    }
}

fn read_trace_frames(path: &std::path::Path) -> Vec<Vec<(i16, i16)>> {
    let bytes = std::fs::read(path).unwrap();
    let tick_count = u32::from_le_bytes(bytes[0..4].try_into().unwrap());

    let mut offset = 4;
    let mut frames = Vec::with_capacity(tick_count as usize);
    for _ in 0..tick_count {
        let agent_count = u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap());
        offset += 4;

        let mut frame = Vec::with_capacity(agent_count as usize);
        for _ in 0..agent_count {
            let x = i16::from_le_bytes(bytes[offset..offset + 2].try_into().unwrap());
            offset += 2;
            let y = i16::from_le_bytes(bytes[offset..offset + 2].try_into().unwrap());
            offset += 2;
            frame.push((x, y));
        }
        frames.push(frame);

        let sentinel = u64::from_le_bytes(bytes[offset..offset + 8].try_into().unwrap());
        assert_eq!(sentinel, 0xFFFF_0000_FFFF_0000);
        offset += 8 + 800 * 600;
    }

    frames
}

#[test]
fn trace_file_matches_positions_recorded_directly_from_the_sequential_backend() {
    const TICKS: u64 = 10;

    let (reference_store, reference_catalogue) = three_agent_scenario();
    let reference_engine = TickEngine::new(TickBackend::Sequential, reference_catalogue, 1, 2);
    let mut reference_sim = Simulator::new(reference_store, reference_engine, TICKS, 1);
    let mut recorder = RecordingObserver { frames: Vec::new() };
    reference_sim.run(&mut recorder).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let trace_path = dir.path().join("trace.bin");

    let (trace_store, trace_catalogue) = three_agent_scenario();
    let trace_engine = TickEngine::new(TickBackend::Sequential, trace_catalogue, 1, 2);
    let mut trace_sim = Simulator::new(trace_store, trace_engine, TICKS, 1);
    let writer = TraceWriter::new(&trace_path).unwrap();
    let mut observer = TraceObserver::new(writer);
    trace_sim.run(&mut observer).unwrap();
    assert!(observer.take_error().is_none());

    let trace_frames = read_trace_frames(&trace_path);
    assert_eq!(trace_frames.len(), recorder.frames.len());
    assert_eq!(trace_frames, recorder.frames);
}
