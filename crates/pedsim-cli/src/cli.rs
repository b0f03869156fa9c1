//! Command-line argument surface — `clap` derive API.
//!
//! A mutually exclusive mode selector, a mutually exclusive backend
//! selector, a `--max-steps` override, and one positional scenario path.

use std::path::PathBuf;

use clap::Parser;

use pedsim_core::{Backend, RunConfig, RunMode};

use crate::{DEFAULT_OUTPUT_INTERVAL_TICKS, DEFAULT_REGION_GRID};

const DEFAULT_MAX_STEPS: u64 = 10_000;
const DEFAULT_TRACE_PATH: &str = "trace.bin";

#[derive(Parser, Debug)]
#[command(name = "pedsim", about = "Pedestrian crowd simulation benchmark")]
pub struct Cli {
    /// Scenario XML file to load.
    #[arg(default_value = "scenario.xml")]
    scenario: PathBuf,

    /// Run the sequential backend as a baseline, then the selected backend,
    /// and report the speedup.
    #[arg(long, conflicts_with_all = ["export_trace", "viewer"])]
    timing_mode: bool,

    /// Run to completion and write a binary trace. Defaults to `trace.bin`
    /// when no path is given.
    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = DEFAULT_TRACE_PATH,
        conflicts_with_all = ["timing_mode", "viewer"]
    )]
    export_trace: Option<PathBuf>,

    /// Run under the interactive viewer's pull interface. This is the
    /// default mode; the flag exists so it can be named explicitly.
    #[arg(long, conflicts_with_all = ["timing_mode", "export_trace"])]
    viewer: bool,

    /// Per-tick update strategy.
    #[arg(long, default_value = "seq")]
    backend: Backend,

    /// Maximum number of ticks to run.
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: u64,
}

impl Cli {
    /// Resolve parsed arguments into a [`RunConfig`].
    pub fn into_run_config(self) -> RunConfig {
        let mode = if self.timing_mode {
            RunMode::TimingMode
        } else if let Some(path) = self.export_trace {
            RunMode::ExportTrace { path }
        } else {
            RunMode::Viewer
        };

        RunConfig {
            scenario_path: self.scenario,
            mode,
            backend: self.backend,
            max_steps: self.max_steps,
            region_grid: DEFAULT_REGION_GRID,
            output_interval_ticks: DEFAULT_OUTPUT_INTERVAL_TICKS,
        }
    }
}
