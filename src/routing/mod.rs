//! Shortest-path routing.
//!
//! Single-source shortest paths are computed per node and folded into a
//! [`PredecessorTable`], from which point-to-point [`Path`]s are rebuilt on
//! demand.

pub mod queue;
pub mod shortest_path;
pub mod table;
pub mod path;

use crate::topology::NodeId;

pub use queue::DistanceQueue;
pub use shortest_path::{shortest_paths_from, Distance, ShortestPaths};
pub use table::{build_routing_table, PredecessorTable};
pub use path::{reconstruct, Path};

/// Errors raised by routing queries
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoutingError {
    #[error("node index {index} is out of range (graph has {node_count} nodes)")]
    InvalidNodeIndex { index: NodeId, node_count: usize },

    #[error("node {to} is unreachable from node {from}")]
    UnreachableDestination { from: NodeId, to: NodeId },
}

pub(crate) fn check_index(index: NodeId, node_count: usize) -> Result<(), RoutingError> {
    if index < node_count {
        Ok(())
    } else {
        Err(RoutingError::InvalidNodeIndex { index, node_count })
    }
}
