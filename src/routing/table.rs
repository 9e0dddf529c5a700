//! All-pairs routing table built from one shortest-path run per source.
//!
//! Entry `[s][d]` is the node immediately before `d` on the shortest-path
//! tree rooted at `s`. It is not the first hop out of `s`; paths are recovered
//! by walking these entries backwards from `d` (see [`crate::routing::path`]).

use std::collections::BTreeMap;

use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;

use crate::routing::shortest_path;
use crate::topology::{Graph, NodeId};

/// Serializes as one JSON object per source, keyed by destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PredecessorTable {
    entries: Vec<BTreeMap<NodeId, NodeId>>,
}

impl PredecessorTable {
    /// Runs a shortest-path computation from every node.
    ///
    /// Sources are processed in parallel; each worker owns its scratch state
    /// and writes only its own row, and rows are collected in source order.
    pub fn build(graph: &Graph) -> Self {
        info!("Building routing table for {} nodes", graph.len());

        let entries: Vec<BTreeMap<NodeId, NodeId>> = (0..graph.len())
            .into_par_iter()
            .map(|source| {
                let paths = shortest_path::run(graph, source);
                let row: BTreeMap<NodeId, NodeId> = paths
                    .reachable()
                    .filter_map(|dest| paths.predecessor(dest).map(|pred| (dest, pred)))
                    .collect();
                debug!("Source {}: {} reachable destinations", source, row.len());
                row
            })
            .collect();

        let total: usize = entries.iter().map(BTreeMap::len).sum();
        info!("Routing table ready: {} entries", total);

        Self { entries }
    }

    /// Number of sources (equal to the graph's node count)
    pub fn node_count(&self) -> usize {
        self.entries.len()
    }

    /// Predecessor of `destination` on the tree rooted at `source`.
    ///
    /// `None` when the destination is unreachable, equals the source, or
    /// either index is out of range.
    pub fn predecessor(&self, source: NodeId, destination: NodeId) -> Option<NodeId> {
        self.entries.get(source)?.get(&destination).copied()
    }

    /// All entries for `source`
    pub fn row(&self, source: NodeId) -> Option<&BTreeMap<NodeId, NodeId>> {
        self.entries.get(source)
    }
}

/// Builds the predecessor table for `graph`.
pub fn build_routing_table(graph: &Graph) -> PredecessorTable {
    PredecessorTable::build(graph)
}
