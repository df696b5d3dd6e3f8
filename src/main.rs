use anyhow::Context;
use clap::Parser;
use shortpath::{load_graph, render, EngineConfig, NodeId, OutputFormat, ShortestPathEngine};
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Find the cheapest path between two nodes of a weighted digraph
#[derive(Parser, Debug)]
#[command(name = "shortpath")]
#[command(about = "Find the cheapest path between two nodes of a weighted digraph", long_about = None)]
struct Args {
    /// Graph file: node count followed by the row-major weight matrix
    graph_file: PathBuf,

    /// Source node id
    source: NodeId,

    /// Destination node id
    dest: NodeId,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Recurse without tracking in-progress nodes (cycles never terminate)
    #[arg(long)]
    no_cycle_guard: bool,

    /// Fail instead of warning when a computed path revisits a node
    #[arg(long)]
    strict_cycles: bool,

    /// Maximum recursion depth, counted from the destination
    #[arg(long)]
    max_depth: Option<usize>,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            visitation_guard: !self.no_cycle_guard,
            strict_cycles: self.strict_cycles,
            max_depth: self.max_depth,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    // stdout carries the result only
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("shortpath v{}", env!("CARGO_PKG_VERSION"));
    let graph = load_graph(&args.graph_file)
        .with_context(|| format!("failed to load graph from {:?}", args.graph_file))?;

    let config = args.engine_config();
    debug!("Engine config: {:?}", config);
    let engine = ShortestPathEngine::with_config(&graph, config);
    let path = engine
        .find_shortest(args.source, args.dest)
        .with_context(|| format!("query {} -> {} failed", args.source, args.dest))?;

    println!("{}", render(&path, args.format)?);
    Ok(())
}
