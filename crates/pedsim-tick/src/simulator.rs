//! `Simulator` — drives a [`TickEngine`] to completion over a shared
//! [`AgentStore`].

use pedsim_agent::AgentStore;
use pedsim_core::Tick;

use crate::engine::TickEngine;
use crate::error::TickResult;
use crate::observer::SimObserver;

/// Owns the agent population and the tick engine driving it.
///
/// Every tick, every agent is processed — there is no sparse wake schedule:
/// pedestrians move (or attempt to) on every tick until `max_steps` is
/// reached.
pub struct Simulator {
    agents: AgentStore,
    engine: TickEngine,
    current_tick: Tick,
    max_steps: u64,
    output_interval_ticks: u64,
}

impl Simulator {
    pub fn new(
        agents: AgentStore,
        engine: TickEngine,
        max_steps: u64,
        output_interval_ticks: u64,
    ) -> Self {
        Self {
            agents,
            engine,
            current_tick: Tick::ZERO,
            max_steps,
            output_interval_ticks: output_interval_ticks.max(1),
        }
    }

    /// Read-only access to committed agent positions — the viewer's
    /// pull-interface reads this after every [`Self::step`].
    pub fn positions(&self) -> &AgentStore {
        &self.agents
    }

    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    /// Advance exactly one tick.
    pub fn step(&mut self) -> TickResult<()> {
        self.engine.tick(&mut self.agents, self.current_tick)?;
        self.current_tick = self.current_tick.offset(1);
        Ok(())
    }

    /// Run to completion (`max_steps` ticks), calling observer hooks at
    /// every tick boundary and at snapshot intervals.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> TickResult<()> {
        while self.current_tick.0 < self.max_steps {
            let now = self.current_tick;
            observer.on_tick_start(now);
            self.step()?;
            observer.on_tick_end(now, self.agents.count());

            if now.0 % self.output_interval_ticks == 0 {
                observer.on_snapshot(now, &self.agents);
            }
        }
        observer.on_sim_end(self.current_tick);
        Ok(())
    }
}
