//! Single-source shortest paths over non-negative link weights.

use crate::routing::queue::DistanceQueue;
use crate::routing::{check_index, RoutingError};
use crate::topology::{Graph, NodeId};

/// Accumulated path cost
pub type Distance = u64;

const UNREACHED: Distance = Distance::MAX;

/// Distances and shortest-path-tree predecessors from one source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: NodeId,
    distances: Vec<Distance>,
    predecessors: Vec<Option<NodeId>>,
}

impl ShortestPaths {
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Shortest distance to `node`, `None` when unreachable or out of range
    pub fn distance(&self, node: NodeId) -> Option<Distance> {
        self.distances.get(node).copied().filter(|&d| d != UNREACHED)
    }

    /// Node preceding `node` on the shortest-path tree; `None` for the source
    /// itself and for unreachable nodes.
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(node).copied().flatten()
    }

    /// Nodes reachable from the source, excluding the source
    pub fn reachable(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.predecessors
            .iter()
            .enumerate()
            .filter_map(|(node, pred)| pred.map(|_| node))
    }
}

/// Computes shortest paths from `source` to every node of `graph`.
pub fn shortest_paths_from(graph: &Graph, source: NodeId) -> Result<ShortestPaths, RoutingError> {
    check_index(source, graph.len())?;
    Ok(run(graph, source))
}

/// Lazy-deletion Dijkstra. Stale queue entries are skipped on pop, and a
/// predecessor is only replaced by a strictly shorter path.
pub(crate) fn run(graph: &Graph, source: NodeId) -> ShortestPaths {
    let nodes = graph.nodes();
    let mut distances = vec![UNREACHED; nodes.len()];
    let mut predecessors = vec![None; nodes.len()];
    let mut queue = DistanceQueue::new();

    distances[source] = 0;
    queue.push(0, source);

    while let Some((distance, current)) = queue.pop() {
        if distance > distances[current] {
            continue;
        }

        for edge in nodes[current].edges() {
            let candidate = distance + Distance::from(edge.weight);
            if candidate < distances[edge.neighbor] {
                distances[edge.neighbor] = candidate;
                predecessors[edge.neighbor] = Some(current);
                queue.push(candidate, edge.neighbor);
            }
        }
    }

    ShortestPaths {
        source,
        distances,
        predecessors,
    }
}
