//! `TraceObserver` — bridges [`SimObserver`] to a [`TraceWriter`].

use pedsim_agent::AgentStore;
use pedsim_core::Tick;
use pedsim_tick::SimObserver;

use crate::error::TraceError;
use crate::trace::TraceWriter;

/// A [`SimObserver`] that writes one trace frame per snapshot tick.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value. After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct TraceObserver {
    writer: TraceWriter,
    last_error: Option<TraceError>,
}

impl TraceObserver {
    /// Create an observer backed by `writer`.
    pub fn new(writer: TraceWriter) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<TraceError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect the file after the sim).
    pub fn into_writer(self) -> TraceWriter {
        self.writer
    }

    fn store_err(&mut self, result: Result<(), TraceError>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl SimObserver for TraceObserver {
    fn on_snapshot(&mut self, _tick: Tick, positions: &AgentStore) {
        let result = self.writer.write_frame(positions);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
