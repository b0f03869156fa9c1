//! `pedsim-io` — scenario loading and trace output for the pedestrian
//! crowd simulator.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pedsim_io::{load_scenario, TraceObserver, TraceWriter};
//!
//! let (agents, catalogue) = load_scenario(Path::new("scenario.xml"))?;
//! let writer = TraceWriter::new(Path::new("trace.bin"))?;
//! let mut obs = TraceObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("trace write error: {e}");
//! }
//! ```

pub mod error;
pub mod observer;
pub mod scenario;
pub mod trace;


pub use error::{ScenarioError, ScenarioResult, TraceError, TraceResult};
pub use observer::TraceObserver;
pub use scenario::load_scenario;
pub use trace::TraceWriter;
