//! Betwixt CLI - parallel betweenness centrality over edge-list files.
//!
//! One binary covers all three execution modes: the shared-memory thread
//! pool, the distributed coordinator, and the remote worker. Results land
//! next to the input with a `.btw` extension.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::net::{SocketAddr, TcpListener};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};

use betwixt_core::io::{self, EdgeList};
use betwixt_engine::coordinator::{CoordinatorConfig, run_coordinator};
use betwixt_engine::local::compute_local;
use betwixt_engine::protocol::{DEFAULT_BATCH_SIZE, Policy};
use betwixt_engine::worker::run_worker;

/// Betwixt betweenness centrality tool.
///
/// Reads an undirected edge list, scores every node with Brandes'
/// algorithm, and writes one centrality value per line.
#[derive(Parser)]
#[command(name = "betwixt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress progress and info messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

/// Distribution policy options for a coordinator run.
#[derive(Clone, Copy, ValueEnum, Default)]
enum PolicyArg {
    /// Equal planner ranges; the coordinator computes alongside the workers
    #[default]
    Static,
    /// Pull-based batches; the coordinator only dispatches
    Dynamic,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Score a graph using a local thread pool
    Run {
        /// Path to the input edge list
        input: PathBuf,

        /// Worker thread count (default: available parallelism)
        #[arg(long, short)]
        threads: Option<usize>,
    },

    /// Coordinate a distributed run
    Coordinate {
        /// Path to the input edge list
        input: PathBuf,

        /// Number of remote workers to wait for
        #[arg(long, short)]
        workers: usize,

        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:7321")]
        listen: SocketAddr,

        /// Distribution policy
        #[arg(long, value_enum, default_value = "static")]
        policy: PolicyArg,

        /// Sources per batch under the dynamic policy
        #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
        batch_size: usize,
    },

    /// Join a distributed run as a remote worker
    Work {
        /// Coordinator address to connect to
        #[arg(long)]
        connect: SocketAddr,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    let result = match cli.command {
        Commands::Run { input, threads } => run_local(&input, threads),
        Commands::Coordinate {
            input,
            workers,
            listen,
            policy,
            batch_size,
        } => coordinate(&input, workers, listen, policy, batch_size),
        Commands::Work { connect } => run_worker(connect).map_err(Into::into),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn load(input: &Path) -> Result<EdgeList> {
    let file = File::open(input).with_context(|| format!("cannot read {}", input.display()))?;
    io::read_edge_list(BufReader::new(file))
        .with_context(|| format!("cannot parse {}", input.display()))
}

fn write_output(input: &Path, centrality: &[f64]) -> Result<()> {
    let output = io::output_path(input);
    let file =
        File::create(&output).with_context(|| format!("cannot write {}", output.display()))?;
    io::write_centrality(BufWriter::new(file), centrality)?;
    tracing::info!(path = %output.display(), "centrality written");
    Ok(())
}

fn run_local(input: &Path, threads: Option<usize>) -> Result<()> {
    let edge_list = load(input)?;
    let threads = match threads {
        Some(0) => bail!("thread count must be at least 1"),
        Some(threads) => threads,
        None => std::thread::available_parallelism().map_or(1, usize::from),
    };

    let graph = edge_list.build_graph();
    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        threads,
        "starting local run"
    );
    let centrality = compute_local(&graph, threads);
    write_output(input, &centrality)
}

fn coordinate(
    input: &Path,
    workers: usize,
    listen: SocketAddr,
    policy: PolicyArg,
    batch_size: usize,
) -> Result<()> {
    let edge_list = load(input)?;
    let listener =
        TcpListener::bind(listen).with_context(|| format!("cannot listen on {listen}"))?;
    let policy = match policy {
        PolicyArg::Static => Policy::Static,
        PolicyArg::Dynamic => Policy::Dynamic { batch_size },
    };

    let config = CoordinatorConfig { workers, policy };
    let centrality = run_coordinator(&listener, &edge_list, &config)?;
    write_output(input, &centrality)
}
