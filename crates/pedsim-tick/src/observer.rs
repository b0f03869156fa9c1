//! Simulation observer trait for progress reporting and position recording.

use pedsim_agent::AgentStore;
use pedsim_core::Tick;

/// Callbacks invoked by [`Simulator::run`][crate::Simulator::run] at key
/// points in the tick loop.
///
/// All methods default to no-ops so implementors only override what they
/// need. `pedsim-io::TraceWriter` implements this to record a position
/// snapshot every `output_interval_ticks` ticks.
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    ///
    /// `agent_count` is the number of agents that were processed this tick
    /// (every agent, every tick — this domain has no sparse wake schedule).
    fn on_tick_end(&mut self, _tick: Tick, _agent_count: usize) {}

    /// Called at snapshot intervals (every `output_interval_ticks` ticks).
    ///
    /// Read-only access to committed positions so output writers can record
    /// a frame without the simulator needing to know the trace format.
    fn on_snapshot(&mut self, _tick: Tick, _positions: &AgentStore) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing. Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
