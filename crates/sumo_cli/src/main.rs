//! Sumo bout CLI
//!
//! Replays scripted scenarios and runs seeded bouts against the toy arena,
//! printing the bout summary (and optionally the tick-by-tick trace) as
//! JSON. `RUST_LOG=debug` surfaces the engine's transition log.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sumo_core::sim::{load_scenario, run_demo, run_scenario};
use sumo_core::BoutRecorder;

#[derive(Parser)]
#[command(name = "sumo_cli")]
#[command(about = "Replay scripted bouts or run seeded demo bouts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSON scenario through the behavior loop
    Replay {
        /// Scenario JSON file
        #[arg(long)]
        scenario: PathBuf,

        /// Print the full tick-by-tick trace as well
        #[arg(long, default_value = "false")]
        trace: bool,
    },

    /// Run a seeded bout in the toy arena
    Demo {
        /// RNG seed (same seed = same bout)
        #[arg(long, default_value = "7")]
        seed: u64,

        /// Tick budget
        #[arg(long, default_value = "400")]
        ticks: u32,

        /// Print the full tick-by-tick trace as well
        #[arg(long, default_value = "false")]
        trace: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Replay { scenario, trace } => {
            let spec = load_scenario(&scenario)
                .with_context(|| format!("failed to load scenario {}", scenario.display()))?;
            eprintln!("scenario: {} ({} ticks)", spec.name, spec.ticks.len());
            report(&run_scenario(&spec), trace)
        }
        Commands::Demo { seed, ticks, trace } => {
            eprintln!("demo bout: seed {seed}, {ticks} ticks");
            report(&run_demo(seed, ticks), trace)
        }
    }
}

fn report(recorder: &BoutRecorder, trace: bool) -> Result<()> {
    if trace {
        println!("{}", serde_json::to_string_pretty(recorder.entries())?);
    }
    println!("{}", serde_json::to_string_pretty(&recorder.summary())?);
    Ok(())
}
