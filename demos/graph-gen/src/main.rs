use std::collections::BTreeMap;
use std::fmt::Write;
use std::process::ExitCode;
use anyhow::{ensure, Context};
use clap::Parser;
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use routesim::prelude::Topology;
use simplelog::*;

/// Writes a random cost matrix in the format table-sim reads.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// number of nodes
    #[arg(short, long, default_value_t = 10)]
    nodes: usize,
    /// number of distinct links (pairs when symmetric)
    #[arg(short, long, default_value_t = 20)]
    edges: usize,
    /// largest link cost, costs are drawn from 1..=max_cost
    #[arg(long, default_value_t = 100)]
    max_cost: u32,
    /// give both directions of a link the same cost
    #[arg(short, long)]
    symmetric: bool,
    /// seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

/// Picks `edges` distinct links at random. Costs are never zero, zero means no link.
fn generate(rng: &mut impl Rng, nodes: usize, edges: usize, max_cost: u32, symmetric: bool) -> Vec<Vec<u32>> {
    let mut links = BTreeMap::new();
    while links.len() < edges {
        let a = rng.gen_range(0..nodes);
        let b = rng.gen_range(0..nodes);
        if a == b {
            continue;
        }
        let key = if symmetric { (a.min(b), a.max(b)) } else { (a, b) };
        links.entry(key).or_insert_with(|| rng.gen_range(1..=max_cost));
    }

    let mut matrix = vec![vec![0; nodes]; nodes];
    for ((a, b), cost) in links {
        matrix[a][b] = cost;
        if symmetric {
            matrix[b][a] = cost;
        }
    }
    matrix
}

fn format_matrix(matrix: &[Vec<u32>]) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{}", matrix.len())?;
    for row in matrix {
        let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        writeln!(out, "{}", line.join(" "))?;
    }
    Ok(out)
}

fn run(args: Args) -> anyhow::Result<()> {
    TermLogger::init(LevelFilter::Info, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .context("Failed to set up logging")?;

    ensure!(args.nodes > 0, "Need at least one node");
    ensure!(args.max_cost > 0, "Max cost must be positive, a zero cost means no link");
    let possible = args.nodes * (args.nodes - 1) / if args.symmetric { 2 } else { 1 };
    ensure!(
        args.edges <= possible,
        "{} nodes only have room for {possible} links",
        args.nodes
    );

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Generating {} nodes, {} links, seed {seed}", args.nodes, args.edges);
    let mut rng = StdRng::seed_from_u64(seed);
    let matrix = generate(&mut rng, args.nodes, args.edges, args.max_cost, args.symmetric);
    let text = format_matrix(&matrix)?;

    // the output must be loadable as-is
    let topology: Topology = text.parse().context("Generated an unreadable topology")?;
    info!("Symmetric: {}", topology.is_symmetric());

    print!("{text}");
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
