use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;

use tierroute::config::NetworkConfig;
use tierroute::config_loader::{self, CliOverrides};
use tierroute::orchestrator::{self, BuiltNetwork};
use tierroute::report::{self, NetworkSnapshot, NetworkSummary};

/// Tiered network topology generator with shortest-path routing
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Path to a topology configuration YAML file (defaults when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for reproducible generation
    #[arg(long)]
    seed: Option<u64>,

    /// Generation attempts before giving up on a connected topology
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Node the connectivity check starts from
    #[arg(long)]
    start_node: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Number of parallel workers for routing table construction (0 = auto-detect)
    #[arg(short = 'j', long, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a JSON summary of the generated network
    Summary,

    /// Print the shortest path between two nodes
    Path {
        /// Source node index
        #[arg(short, long)]
        source: usize,

        /// Destination node index
        #[arg(short, long)]
        destination: usize,
    },

    /// Show a node's tier and links
    Node {
        /// Node index
        #[arg(long)]
        id: usize,
    },

    /// Write a JSON snapshot of the network for an external renderer
    Export {
        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,

        /// Source of a path to highlight
        #[arg(long, requires = "destination")]
        source: Option<usize>,

        /// Destination of a path to highlight
        #[arg(long, requires = "source")]
        destination: Option<usize>,
    },
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(&args.log_level)).init();

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .wrap_err("Failed to configure thread pool")?;
    }

    let mut config = match &args.config {
        Some(path) => config_loader::load_config(path)
            .wrap_err_with(|| format!("Failed to load configuration '{}'", path.display()))?,
        None => {
            info!("No configuration file given, using defaults");
            NetworkConfig::default()
        }
    };

    let overrides = CliOverrides {
        seed: args.seed,
        max_attempts: args.max_attempts,
        start_node: args.start_node,
    };
    config_loader::apply_overrides(&mut config, &overrides)?;

    let built = orchestrator::build_network(&config)?;
    info!(
        "Network ready: {} nodes, {} links (seed {})",
        built.network.graph().len(),
        built.network.graph().link_count(),
        built.seed
    );

    run_command(&args.command, &built)
}

fn run_command(command: &Commands, built: &BuiltNetwork) -> Result<()> {
    let network = &built.network;
    match command {
        Commands::Summary => {
            let summary = NetworkSummary::new(built);
            let json = serde_json::to_string_pretty(&summary)
                .wrap_err("Failed to serialize summary")?;
            println!("{}", json);
        }
        Commands::Path { source, destination } => {
            let path = network.route(*source, *destination)?;
            println!("Path from {} to {}: {}", source, destination, path);
            println!("Hops: {}", path.hop_count());
            if let Some(weight) = path.total_weight(network.graph()) {
                println!("Total weight: {}", weight);
            }
        }
        Commands::Node { id } => {
            let node = network.graph().node(*id)?;
            let links: Vec<String> = node
                .edges()
                .iter()
                .map(|edge| format!("{} (weight {})", edge.neighbor, edge.weight))
                .collect();
            println!("Node: {} | {} | Links: [{}]", id, node.tier(), links.join(", "));
        }
        Commands::Export { output, source, destination } => {
            let highlighted = match (source, destination) {
                (Some(s), Some(d)) => Some(network.route(*s, *d)?),
                _ => None,
            };
            let snapshot = NetworkSnapshot::capture(network, highlighted);
            report::write_json_report(&snapshot, output)?;
        }
    }

    Ok(())
}
