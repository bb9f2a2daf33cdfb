mod render;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};
use routesim::prelude::*;
use serde_json::json;
use simplelog::*;

/// Computes distance-vector and link-state routing tables for a cost matrix file.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// topology file: node count n followed by n*n costs, 0 meaning no link
    input_file: PathBuf,
    /// output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// also print the direct-link tables before the first DVR pass
    #[arg(long)]
    initial: bool,
    /// more logging on stderr, repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Copy, Clone, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn init_logging(args: &Args) -> anyhow::Result<()> {
    let level = match (args.quiet, args.verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Info,
        (false, 2) => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .context("Failed to set up logging")
}

fn run(args: Args) -> anyhow::Result<()> {
    init_logging(&args)?;

    let text = fs::read_to_string(&args.input_file)
        .with_context(|| format!("Could not open file {}", args.input_file.display()))?;
    let topology: Topology = text
        .parse()
        .with_context(|| format!("Could not load topology from {}", args.input_file.display()))?;
    info!(
        "Loaded {} nodes, {} warnings, symmetric: {}",
        topology.node_count(),
        topology.warnings().len(),
        topology.is_symmetric()
    );

    let dvr_engine = DistanceVector::new(EngineParams {
        include_initial_snapshot: args.initial,
        ..Default::default()
    });
    let lsr_engine = LinkState::new();
    // both engines finish before anything reaches stdout
    let dvr = dvr_engine
        .run(&topology)
        .with_context(|| format!("{} failed", dvr_engine.name()))?;
    let lsr = lsr_engine
        .run(&topology)
        .with_context(|| format!("{} failed", lsr_engine.name()))?;
    info!("{} converged after {} improving passes", dvr_engine.name(), dvr.improving_passes);

    let output = match args.format {
        Format::Text => render::text(&dvr, &lsr).context("Failed to render tables")?,
        Format::Json => serde_json::to_string_pretty(&json!({
            "nodes": topology.node_count(),
            "dvr": dvr,
            "lsr": lsr,
        }))?,
    };
    println!("{output}");
    Ok(())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
