//! arena: headless driver for the boids/hoiks steering engine.
//!
//! Loads a `WorldConfig` (defaults, optionally overridden from a TOML file
//! and then from the command line), runs it to completion, and prints a
//! summary.  `--json PATH` writes the final frame for an external renderer.
//!
//! Logging goes through `tracing`; set `RUST_LOG=debug` for per-tick lines
//! or `RUST_LOG=boid_sim=trace` to see every hoik retarget.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use boid_core::{Tick, WorldConfig};
use boid_sim::{Frame, TickMode, TickStats, TracingObserver, WorldBuilder, WorldObserver};
use boid_steer::{ClassicSteering, TargetState};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Mode {
    Sequential,
    Snapshot,
}

impl From<Mode> for TickMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Sequential => TickMode::Sequential,
            Mode::Snapshot => TickMode::Snapshot,
        }
    }
}

#[derive(Debug, Parser)]
#[command(about = "Run a boids/hoiks world headless and report what happened")]
struct Args {
    /// TOML file with WorldConfig overrides.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ticks to simulate (overrides `total_ticks`).
    #[arg(short, long)]
    ticks: Option<u64>,

    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(long)]
    boids: Option<usize>,

    #[arg(long)]
    hoiks: Option<usize>,

    #[arg(long, value_enum, default_value_t = Mode::Sequential)]
    mode: Mode,

    /// Log a tick summary every N ticks.
    #[arg(long, default_value_t = 100)]
    log_every: u64,

    /// Write the final frame as JSON to this path.
    #[arg(long)]
    json: Option<PathBuf>,
}

// ── Observer wrapper to collect run totals ────────────────────────────────────

struct SummaryObserver {
    inner:         TracingObserver,
    ticks:         u64,
    retargets:     usize,
    shared:        usize,
    peak_tracking: usize,
    frames:        usize,
}

impl SummaryObserver {
    fn new(inner: TracingObserver) -> Self {
        Self { inner, ticks: 0, retargets: 0, shared: 0, peak_tracking: 0, frames: 0 }
    }
}

impl WorldObserver for SummaryObserver {
    fn on_tick_end(&mut self, stats: &TickStats) {
        self.ticks += 1;
        self.retargets += stats.retargets;
        self.shared += stats.shared;
        self.peak_tracking = self.peak_tracking.max(stats.tracking);
        self.inner.on_tick_end(stats);
    }

    fn on_frame(&mut self, frame: &Frame) {
        self.frames += 1;
        self.inner.on_frame(frame);
    }

    fn on_run_end(&mut self, final_tick: Tick) {
        self.inner.on_run_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    // 1. Config: defaults, then file, then flags.
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => WorldConfig::default(),
    };
    if let Some(ticks) = args.ticks {
        config.total_ticks = ticks;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(boids) = args.boids {
        config.boid_count = boids;
    }
    if let Some(hoiks) = args.hoiks {
        config.hoik_count = hoiks;
    }

    println!("=== arena: boids & hoiks ===");
    println!(
        "Boids: {}  |  Hoiks: {}  |  Obstacles: {}  |  Ticks: {}  |  Seed: {}  |  Mode: {:?}",
        config.boid_count,
        config.hoik_count,
        config.obstacles.count,
        config.total_ticks,
        config.seed,
        args.mode,
    );
    println!();

    // 2. Build the world.
    let mut world = WorldBuilder::new(config, ClassicSteering)
        .mode(args.mode.into())
        .build()
        .context("building world")?;

    // 3. Run.
    let mut obs = SummaryObserver::new(TracingObserver::new(args.log_every));
    let t0 = Instant::now();
    world.run(&mut obs);
    let elapsed = t0.elapsed();
    info!(elapsed_ms = elapsed.as_millis() as u64, "simulation complete");

    // 4. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  ticks          : {}", obs.ticks);
    println!("  frames         : {}", obs.frames);
    println!("  retargets      : {}", obs.retargets);
    println!("  shared targets : {}", obs.shared);
    println!("  peak tracking  : {}", obs.peak_tracking);
    println!();

    // 5. Final hoik table.
    println!("{:<14} {:<22} {:<14}", "Hoik", "Position", "Target");
    println!("{}", "-".repeat(50));
    for hoik in world.agents().hoik_ids() {
        let view = world.agent(hoik)?;
        let target = match world.target_state(hoik)? {
            TargetState::Tracking(t) => t.to_string(),
            TargetState::Untargeted => "-".to_string(),
        };
        println!(
            "{:<14} {:<22} {:<14}",
            hoik.to_string(),
            format!("({:.1}, {:.1})", view.position.x, view.position.y),
            target,
        );
    }

    // 6. Optional frame dump.
    if let Some(path) = &args.json {
        let frame = world.frame();
        let json = serde_json::to_string_pretty(&frame)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        println!();
        println!("Final frame ({} agents) written to {}", frame.agents.len(), path.display());
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<WorldConfig> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}
