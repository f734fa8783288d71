//! `court` — drive the Elsinore court simulation from the command line.
//!
//! ```text
//! court run --turns 20 --seed 7
//! court step --count 3 --log turn.log
//! court watch --delay-ms 250 --every-ms 1000 --csv out
//! ```
//!
//! Diagnostics go to stderr through `tracing` (`RUST_LOG`, default `info`);
//! event lines, summaries, and JSON snapshots go to stdout.

mod config;
mod console;

use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use hs_output::{CsvWriter, HistoryLog};
use hs_sim::{BackgroundRunner, Sim, SimBuilder, SimObserver, share, to_json};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{CourtConfig, Overrides};
use crate::console::{ConsoleObserver, Writers};

#[derive(Parser, Debug)]
#[command(name = "court")]
#[command(about = "Intrigue at the court of Elsinore, one turn at a time")]
struct Cli {
    /// TOML configuration file; flags override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Maximum number of turns
    #[arg(long, global = true)]
    turns: Option<u64>,

    /// Random seed for a reproducible run
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Pause between turns in background runs, in milliseconds
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    /// History log path
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    /// Directory for events.csv and turn_summaries.csv
    #[arg(long, global = true)]
    csv: Option<PathBuf>,

    /// Directory for court.db
    #[cfg(feature = "sqlite")]
    #[arg(long, global = true)]
    sqlite: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Play until the simulation ends, printing every event
    Run,
    /// Play a fixed number of turns with a summary after each
    Step {
        #[arg(long, default_value_t = 1)]
        count: u64,
    },
    /// Play on a background thread and print JSON state snapshots
    Watch {
        /// Interval between snapshots, in milliseconds
        #[arg(long, default_value_t = 1_000)]
        every_ms: u64,
    },
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            turns:      self.turns,
            seed:       self.seed,
            delay_ms:   self.delay_ms,
            log:        self.log.clone(),
            csv_dir:    self.csv.clone(),
            #[cfg(feature = "sqlite")]
            sqlite_dir: self.sqlite.clone(),
            #[cfg(not(feature = "sqlite"))]
            sqlite_dir: None,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut cfg = CourtConfig::load_or_default(cli.config.as_deref())?;
    cfg.apply(cli.overrides());

    let sim = SimBuilder::elsinore(cfg.sim.clone()).build()?;
    let writers = open_writers(&cfg)?;
    info!(
        max_turns = cfg.sim.max_turns,
        seed = ?cfg.sim.seed,
        log = %cfg.output.log.display(),
        "court assembled"
    );

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => run(sim, writers),
        Command::Step { count } => step(sim, writers, count),
        Command::Watch { every_ms } => watch(sim, writers, &cfg, Duration::from_millis(every_ms)),
    }
}

fn open_writers(cfg: &CourtConfig) -> anyhow::Result<Writers> {
    let mut writers: Writers = Vec::new();
    let log = HistoryLog::create(&cfg.output.log)
        .with_context(|| format!("creating history log {}", cfg.output.log.display()))?;
    writers.push(Box::new(log));

    if let Some(dir) = &cfg.output.csv_dir {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        writers.push(Box::new(CsvWriter::new(dir)?));
    }

    if let Some(dir) = &cfg.output.sqlite_dir {
        #[cfg(feature = "sqlite")]
        {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
            writers.push(Box::new(hs_output::SqliteWriter::new(dir)?));
        }
        #[cfg(not(feature = "sqlite"))]
        tracing::warn!(dir = %dir.display(), "built without the sqlite feature; ignoring sqlite_dir");
    }
    Ok(writers)
}

fn run(mut sim: Sim, writers: Writers) -> anyhow::Result<()> {
    let mut obs = ConsoleObserver::new(writers, true);
    sim.run(None, &mut obs)?;
    println!();
    println!("{}", sim.summary());
    obs.finish()
}

fn step(mut sim: Sim, writers: Writers, count: u64) -> anyhow::Result<()> {
    let mut obs = ConsoleObserver::new(writers, false);
    for _ in 0..count {
        if sim.is_ended() {
            println!("Simulation has ended: {}", sim.status());
            break;
        }
        sim.step(&mut obs)?;
        if let Some(msg) = obs.fault() {
            return Err(anyhow!("output failed: {msg}"));
        }
        println!("{}", sim.event_log().summary_for_turn(sim.turn()));
        println!("{}", sim.summary());
    }
    obs.finish()
}

fn watch(sim: Sim, writers: Writers, cfg: &CourtConfig, every: Duration) -> anyhow::Result<()> {
    let shared = share(sim);
    let obs = ConsoleObserver::new(writers, false);
    let runner = BackgroundRunner::spawn(shared.clone(), None, cfg.sim.turn_delay(), obs)?;

    while !runner.is_finished() {
        thread::sleep(every);
        let view = {
            let sim = shared.read().map_err(|_| anyhow!("simulation lock poisoned"))?;
            sim.state_view()
        };
        println!("{}", to_json(&view)?);
    }

    let (played, mut obs) = runner.join()?;
    obs.finish()?;
    let sim = shared.read().map_err(|_| anyhow!("simulation lock poisoned"))?;
    info!(played, status = %sim.status(), "watch finished");
    println!("{}", to_json(&sim.state_view())?);
    println!("{}", to_json(&sim.alliance_views())?);
    println!("{}", to_json(&sim.conflict_views())?);
    Ok(())
}
