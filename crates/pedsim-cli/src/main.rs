//! `pedsim` — command-line driver for the pedestrian crowd simulation
//! benchmark.
//!
//! Three mutually exclusive run modes (`--timing-mode`, `--export-trace
//! [=PATH]`, `--viewer`, the last being the default) over four backend
//! choices (`seq`, `pthread`, `omp`, `simd`).

mod cli;

use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use pedsim_agent::{AgentStore, AgentStoreBuilder};
use pedsim_core::{Backend, RunConfig, RunMode};
use pedsim_io::{load_scenario, TraceObserver, TraceWriter};
use pedsim_tick::{NoopObserver, Simulator, TickBackend, TickEngine};

use cli::Cli;

// Fixed, not auto-detected from hardware: the parallel backends are
// compared at a constant thread count across machines, not scaled to
// whatever ran the binary.
const WORKER_COUNT: usize = 4;
const DEFAULT_REGION_GRID: u8 = 2;
const DEFAULT_OUTPUT_INTERVAL_TICKS: u64 = 1;

fn main() -> ExitCode {
    tracing_subscriber::fmt::try_init().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(1);
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.into_run_config();
    config.validate().context("invalid configuration")?;

    println!("=== pedsim — pedestrian crowd simulation ===");
    println!(
        "scenario: {}  |  backend: {}  |  max_steps: {}",
        config.scenario_path.display(),
        config.backend,
        config.max_steps
    );

    let (agents, catalogue) =
        load_scenario(&config.scenario_path).context("failed to load scenario")?;
    println!("loaded {} agents, {} waypoints", agents.len(), catalogue.len());

    let store = AgentStoreBuilder::with_capacity(agents.len())
        .extend_agents(agents)
        .build(&catalogue);

    match &config.mode {
        RunMode::TimingMode => run_timing_mode(&config, &store, &catalogue),
        RunMode::ExportTrace { path } => run_export_trace(&config, store, catalogue, path),
        RunMode::Viewer => run_viewer(&config, store, catalogue),
    }
}

fn build_engine(backend: TickBackend, catalogue: pedsim_agent::WaypointCatalogue, config: &RunConfig) -> TickEngine {
    TickEngine::new(backend, catalogue, WORKER_COUNT, config.region_grid)
}

fn run_timing_mode(
    config: &RunConfig,
    store: &AgentStore,
    catalogue: &pedsim_agent::WaypointCatalogue,
) -> Result<()> {
    println!();
    println!("running sequential baseline ({} ticks)...", config.max_steps);
    let mut baseline_sim = Simulator::new(
        store.clone(),
        build_engine(TickBackend::Sequential, catalogue.clone(), config),
        config.max_steps,
        DEFAULT_OUTPUT_INTERVAL_TICKS,
    );
    let t0 = Instant::now();
    baseline_sim.run(&mut NoopObserver)?;
    let baseline_elapsed = t0.elapsed();
    println!("  baseline: {:.3} s", baseline_elapsed.as_secs_f64());

    let selected_backend = TickBackend::from_cli(config.backend);
    println!("running {} backend ({} ticks)...", config.backend, config.max_steps);
    let mut selected_sim = Simulator::new(
        store.clone(),
        build_engine(selected_backend, catalogue.clone(), config),
        config.max_steps,
        DEFAULT_OUTPUT_INTERVAL_TICKS,
    );
    let t0 = Instant::now();
    selected_sim.run(&mut NoopObserver)?;
    let selected_elapsed = t0.elapsed();
    println!("  {}: {:.3} s", config.backend, selected_elapsed.as_secs_f64());

    println!();
    let speedup = baseline_elapsed.as_secs_f64() / selected_elapsed.as_secs_f64().max(f64::EPSILON);
    println!("speedup over seq: {speedup:.2}x");

    Ok(())
}

fn run_export_trace(
    config: &RunConfig,
    store: AgentStore,
    catalogue: pedsim_agent::WaypointCatalogue,
    path: &std::path::Path,
) -> Result<()> {
    println!();
    println!("exporting trace to {} ({} ticks)...", path.display(), config.max_steps);

    let engine = build_engine(TickBackend::from_cli(config.backend), catalogue, config);
    let mut sim = Simulator::new(store, engine, config.max_steps, config.output_interval_ticks);

    let writer = TraceWriter::new(path).context("failed to create trace file")?;
    let mut observer = TraceObserver::new(writer);

    let t0 = Instant::now();
    sim.run(&mut observer)?;
    let elapsed = t0.elapsed();

    if let Some(e) = observer.take_error() {
        return Err(e).context("failed while writing trace");
    }

    println!("done in {:.3} s", elapsed.as_secs_f64());
    Ok(())
}

fn run_viewer(
    config: &RunConfig,
    store: AgentStore,
    catalogue: pedsim_agent::WaypointCatalogue,
) -> Result<()> {
    println!();
    println!("running to completion under the viewer's pull interface ({} ticks)...", config.max_steps);
    println!("(no renderer is built here; a viewer would call Simulator::positions() after each paint tick)");

    let engine = build_engine(TickBackend::from_cli(config.backend), catalogue, config);
    let mut sim = Simulator::new(store, engine, config.max_steps, config.output_interval_ticks);

    let t0 = Instant::now();
    sim.run(&mut NoopObserver)?;
    let elapsed = t0.elapsed();

    println!("done in {:.3} s  |  final tick: {}", elapsed.as_secs_f64(), sim.current_tick().0);
    Ok(())
}
