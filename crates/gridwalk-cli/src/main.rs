//! gridwalk CLI - memory-augmented random walk on a grid.
//!
//! Single binary that provides:
//! - `gridwalk run` - one simulation to completion
//! - `gridwalk batch` - many seeded simulations, summarized
//! - `gridwalk init` - write a default gridwalk.yaml

use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use gridwalk_cli::config::{DEFAULT_CONFIG_FILE, DEFAULT_CONFIG_YAML};
use gridwalk_cli::{run_batch, run_single, SimConfig};
use gridwalk_nav::StepBudget;
use gridwalk_tools::AsciiRenderer;

#[derive(Parser)]
#[command(name = "gridwalk")]
#[command(about = "Memory-augmented random walk on a grid", version)]
struct Cli {
    /// Config file (defaults to ./gridwalk.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one simulation until the goal is reached
    Run {
        #[command(flatten)]
        overrides: Overrides,

        /// Draw every step in the terminal
        #[arg(long)]
        render: bool,

        /// Pause after each rendered frame
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Write the recorded frames as JSON
        #[arg(long)]
        frames_out: Option<PathBuf>,
    },

    /// Run many independent simulations and summarize them
    Batch {
        #[command(flatten)]
        overrides: Overrides,

        /// Number of runs
        #[arg(long, default_value_t = 100)]
        runs: usize,
    },

    /// Write a default config file
    Init,
}

#[derive(clap::Args)]
struct Overrides {
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Step cap before reporting NoProgress
    #[arg(long, conflicts_with = "unbounded")]
    max_steps: Option<usize>,

    /// Never give up
    #[arg(long)]
    unbounded: bool,
}

impl Overrides {
    fn apply(&self, config: &mut SimConfig) {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(max_steps) = self.max_steps {
            config.max_steps = Some(max_steps);
        }
    }

    fn budget(&self, config: &SimConfig, grid: &gridwalk_nav::Grid) -> StepBudget {
        if self.unbounded {
            StepBudget::Unlimited
        } else {
            config.budget(grid)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cwd = std::env::current_dir().context("Failed to get current directory")?;

    match cli.command {
        Some(Commands::Run {
            overrides,
            render,
            delay_ms,
            frames_out,
        }) => {
            let mut config = SimConfig::resolve(cli.config.as_deref(), &cwd)?;
            overrides.apply(&mut config);
            if render {
                config.render.enabled = true;
            }
            if let Some(delay_ms) = delay_ms {
                config.render.delay_ms = delay_ms;
            }
            run_once(&config, &overrides, frames_out.as_deref())
        }
        Some(Commands::Batch { overrides, runs }) => {
            let mut config = SimConfig::resolve(cli.config.as_deref(), &cwd)?;
            overrides.apply(&mut config);
            batch(&config, &overrides, runs)
        }
        Some(Commands::Init) => {
            let path = cli.config.unwrap_or_else(|| SimConfig::default_path(&cwd));
            init_config(&path)
        }
        None => {
            println!("gridwalk - memory-augmented random walk on a grid");
            println!();
            println!("Usage: gridwalk <COMMAND>");
            println!();
            println!("Commands:");
            println!("  run    Run one simulation until the goal is reached");
            println!("  batch  Run many simulations and summarize them");
            println!("  init   Write a default {DEFAULT_CONFIG_FILE}");
            println!();
            println!("Run 'gridwalk --help' for more information.");
            Ok(())
        }
    }
}

fn run_once(config: &SimConfig, overrides: &Overrides, frames_out: Option<&Path>) -> Result<()> {
    let grid = config.build_grid()?;
    let seed = config.seed.unwrap_or_else(clock_seed);
    let budget = overrides.budget(config, &grid);

    tracing::info!(
        width = grid.width(),
        height = grid.height(),
        start = %config.start_cell(),
        goal = %grid.goal(),
        seed,
        max_steps = ?budget.max_steps(),
        "Starting simulation"
    );

    let ascii = config.render.enabled.then(|| {
        AsciiRenderer::new(io::stdout().lock())
            .with_delay(config.render.delay())
            .with_clear_screen(config.render.clear_screen)
    });
    let outcome = run_single(&grid, config.start_cell(), budget, seed, ascii)?;

    // Frames first, then the run's own outcome; a broken terminal must not hide either.
    if let Some(path) = frames_out {
        let json = serde_json::to_string_pretty(&outcome.frames)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write frames to {}", path.display()))?;
        tracing::info!(path = %path.display(), frames = outcome.frames.len(), "Frames written");
    }

    let steps = outcome
        .result
        .with_context(|| format!("Simulation failed (seed {seed})"))?;
    if let Some(err) = outcome.render_error {
        return Err(anyhow::Error::new(err).context("Failed to render frames"));
    }
    println!("Goal reached in {steps} steps!");
    Ok(())
}

fn batch(config: &SimConfig, overrides: &Overrides, runs: usize) -> Result<()> {
    let grid = config.build_grid()?;
    let seed = config.seed.unwrap_or_else(clock_seed);
    let budget = overrides.budget(config, &grid);

    tracing::info!(runs, seed, max_steps = ?budget.max_steps(), "Starting batch");

    let report = run_batch(&grid, config.start_cell(), budget, seed, runs)?;

    println!("gridwalk batch");
    println!("==============");
    println!();
    println!("Grid: {}x{}, goal {}", grid.width(), grid.height(), grid.goal());
    println!("Seed: {seed}");
    println!();
    println!("{}", report.summary());
    println!("Success rate: {:.1}%", report.success_rate() * 100.0);

    Ok(())
}

fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        println!("{} already exists, leaving it unchanged", path.display());
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, DEFAULT_CONFIG_YAML)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Wrote {}", path.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit the grid, obstacles and goal");
    println!("  2. Run: gridwalk run --render");

    Ok(())
}

/// Seed from the wall clock for runs without an explicit seed.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
