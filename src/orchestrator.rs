//! Pipeline orchestration.
//!
//! This module owns the regenerate-until-connected policy and composes a
//! connected [`Graph`] with its [`PredecessorTable`]. Renderers and query
//! front-ends hold a [`RoutedNetwork`] by reference; nothing here mutates a
//! graph once it is built.

use log::{info, warn};

use crate::config::{NetworkConfig, ValidationError};
use crate::random::{entropy_seed, RandomSource, SeededRandom};
use crate::routing::{build_routing_table, reconstruct, Path, PredecessorTable, RoutingError};
use crate::topology::{generate, is_connected, unreachable_nodes, Graph, NodeId, TopologyError};

#[derive(Debug, thiserror::Error)]
pub enum OrchestrationError {
    #[error(transparent)]
    Config(#[from] ValidationError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error("unable to produce a connected topology after {attempts} attempts")]
    Disconnected { attempts: u32 },
}

/// A graph that passed the connectivity gate
#[derive(Debug, Clone)]
pub struct ConnectedTopology {
    pub graph: Graph,
    /// Generation attempts it took, including the successful one
    pub attempts: u32,
}

/// Generates topologies until one is connected from `routing.start_node`.
///
/// Gives up with [`OrchestrationError::Disconnected`] after
/// `routing.max_attempts` disconnected graphs.
pub fn generate_connected<R: RandomSource + ?Sized>(
    config: &NetworkConfig,
    random: &mut R,
) -> Result<ConnectedTopology, OrchestrationError> {
    config.validate()?;
    let max_attempts = config.routing.max_attempts;
    let start = config.routing.start_node;

    for attempt in 1..=max_attempts {
        let graph = generate(config.tiers, random)?;
        if is_connected(&graph, start)? {
            info!("Topology is connected (attempt {}/{})", attempt, max_attempts);
            return Ok(ConnectedTopology {
                graph,
                attempts: attempt,
            });
        }
        let cut_off = unreachable_nodes(&graph, start)?;
        warn!(
            "Topology is not connected: {} nodes unreachable from node {}, regenerating (attempt {}/{})",
            cut_off.len(),
            start,
            attempt,
            max_attempts
        );
    }

    Err(OrchestrationError::Disconnected {
        attempts: max_attempts,
    })
}

/// A graph together with its routing table
#[derive(Debug, Clone)]
pub struct RoutedNetwork {
    graph: Graph,
    table: PredecessorTable,
}

impl RoutedNetwork {
    pub fn new(graph: Graph) -> Self {
        let table = build_routing_table(&graph);
        Self { graph, table }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn table(&self) -> &PredecessorTable {
        &self.table
    }

    /// Shortest path from `source` to `destination`
    pub fn route(&self, source: NodeId, destination: NodeId) -> Result<Path, RoutingError> {
        reconstruct(&self.table, source, destination)
    }
}

/// Output of [`build_network`]
#[derive(Debug, Clone)]
pub struct BuiltNetwork {
    pub network: RoutedNetwork,
    /// Generation attempts it took, including the successful one
    pub attempts: u32,
    /// Seed the run used; passing it back as `seed` replays the run
    pub seed: u64,
}

/// Runs the whole pipeline from a configuration.
///
/// Uses `config.seed` when set. Otherwise a seed is drawn from OS entropy and
/// logged, so every run can be replayed.
pub fn build_network(config: &NetworkConfig) -> Result<BuiltNetwork, OrchestrationError> {
    let seed = match config.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            seed
        }
        None => {
            let seed = entropy_seed();
            info!("No seed configured, using seed {} (pass --seed {} to replay)", seed, seed);
            seed
        }
    };

    let mut random = SeededRandom::from_seed(seed);
    let connected = generate_connected(config, &mut random)?;
    Ok(BuiltNetwork {
        network: RoutedNetwork::new(connected.graph),
        attempts: connected.attempts,
        seed,
    })
}
