// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Airspace CLI entrypoint.
//!
//! Drives a [`Session`] from the command line:
//!
//! ```text
//! airspace run --count 40 --threshold 12 --ticks 5 --seed 7
//! airspace scenario --point 0,0 --point 100,0 --point 3,4 --threshold 5 --json
//! airspace config --write-defaults
//! ```
//!
//! Logs go to stderr (filter with `RUST_LOG`); reports go to stdout.

// The CLI is expected to print to stdout/stderr.
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod report;

use std::io::IsTerminal;
use std::path::PathBuf;

use airspace_app_core::config::ConfigService;
use airspace_app_core::settings::{load_settings, save_settings};
use airspace_config_fs::FsConfigStore;
use airspace_core::{Session, SimSettings, TickReport};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "airspace", author, version, about = "Aircraft proximity detection")]
struct Cli {
    /// Settings directory (defaults to the platform config dir)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a random fleet and run detection ticks
    Run(RunArgs),
    /// Run one tick over explicit positions
    Scenario(ScenarioArgs),
    /// Show effective settings
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Aircraft to generate (defaults to `initial_count`)
    #[arg(long)]
    count: Option<usize>,
    /// Alert threshold (defaults to `default_threshold`)
    #[arg(long)]
    threshold: Option<f64>,
    /// Detection ticks to run; the last report is printed
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    ticks: u64,
    /// RNG seed, overriding the stored one
    #[arg(long)]
    seed: Option<u64>,
    /// Print JSON instead of tables
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct ScenarioArgs {
    /// Aircraft position as `X,Y` (repeatable; ids follow argument order)
    #[arg(long = "point", value_name = "X,Y", value_parser = parse_point, required = true)]
    points: Vec<(f64, f64)>,
    /// Alert threshold (defaults to `default_threshold`)
    #[arg(long)]
    threshold: Option<f64>,
    /// Print JSON instead of tables
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Persist default settings before printing them
    #[arg(long)]
    write_defaults: bool,
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn parse_point(raw: &str) -> Result<(f64, f64), String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got `{raw}`"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .ok_or_else(|| format!("`{v}` is not a finite number"))
    };
    Ok((parse(x)?, parse(y)?))
}

fn settings_service(config_dir: Option<&PathBuf>) -> Result<ConfigService<FsConfigStore>> {
    let store = match config_dir {
        Some(dir) => FsConfigStore::at(dir),
        None => FsConfigStore::new(),
    }
    .context("opening settings store")?;
    Ok(ConfigService::new(store))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let service = settings_service(cli.config_dir.as_ref())?;
    match cli.command {
        Command::Run(args) => run(&service, &args),
        Command::Scenario(args) => scenario(&service, &args),
        Command::Config(args) => config(&service, &args),
    }
}

fn run(service: &ConfigService<FsConfigStore>, args: &RunArgs) -> Result<()> {
    let mut settings = load_settings(service).context("loading settings")?;
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    let count = args.count.unwrap_or(settings.initial_count);
    let threshold = args.threshold.unwrap_or(settings.default_threshold);

    let mut session = Session::new(settings)?;
    session
        .apply_parameters(count, threshold)
        .with_context(|| format!("generating {count} aircraft"))?;

    let mut last = session.tick();
    for _ in 1..args.ticks {
        session.record_positions();
        last = session.tick();
    }
    print_report(&last, args.json)
}

fn scenario(service: &ConfigService<FsConfigStore>, args: &ScenarioArgs) -> Result<()> {
    let settings = load_settings(service).context("loading settings")?;
    let threshold = args.threshold.unwrap_or(settings.default_threshold);
    let speed = settings.speed_min;

    let mut session = Session::new(settings)?;
    session.set_threshold(threshold)?;
    let registry = session.registry_mut();
    for &(x, y) in &args.points {
        registry.spawn(x, y, speed, 0.0);
    }
    registry.begin_batch(args.points.len());
    info!(aircraft = args.points.len(), threshold, "scenario loaded");

    print_report(&session.tick(), args.json)
}

fn config(service: &ConfigService<FsConfigStore>, args: &ConfigArgs) -> Result<()> {
    if args.write_defaults {
        save_settings(service, &SimSettings::default()).context("writing default settings")?;
        eprintln!("wrote defaults to {}", service.store().base().display());
    }
    let settings = load_settings(service).context("loading settings")?;
    if args.json {
        println!("{}", report::to_json(&settings)?);
    } else {
        println!("{}", report::settings_table(&settings));
    }
    Ok(())
}

fn print_report(report: &TickReport, json: bool) -> Result<()> {
    if json {
        println!("{}", report::to_json(report)?);
    } else {
        println!("{}", report::tick_table(report));
    }
    Ok(())
}
