//! Breadth-first reachability over a generated topology.

use std::collections::VecDeque;

use crate::topology::types::{Graph, NodeId, TopologyError};

/// Visits every node reachable from `start`, each exactly once.
///
/// Returns the per-node visited flags.
pub fn reachable_from(graph: &Graph, start: NodeId) -> Result<Vec<bool>, TopologyError> {
    graph.node(start)?;

    let mut visited = vec![false; graph.len()];
    let mut queue = VecDeque::new();
    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for edge in graph.nodes()[current].edges() {
            if !visited[edge.neighbor] {
                visited[edge.neighbor] = true;
                queue.push_back(edge.neighbor);
            }
        }
    }

    Ok(visited)
}

/// True iff every node is reachable from `start`.
pub fn is_connected(graph: &Graph, start: NodeId) -> Result<bool, TopologyError> {
    let visited = reachable_from(graph, start)?;
    Ok(visited.iter().all(|&seen| seen))
}

/// Nodes not reachable from `start`, in index order
pub fn unreachable_nodes(graph: &Graph, start: NodeId) -> Result<Vec<NodeId>, TopologyError> {
    let visited = reachable_from(graph, start)?;
    Ok(visited
        .iter()
        .enumerate()
        .filter(|(_, &seen)| !seen)
        .map(|(id, _)| id)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::types::{GraphBuilder, TierSizes};

    fn path_graph(n: usize) -> Graph {
        let mut builder = GraphBuilder::new(TierSizes::new(n, 0, 0));
        for i in 1..n {
            builder.add_link(i - 1, i, 1).unwrap();
        }
        builder.build()
    }

    #[test]
    fn test_connected_chain() {
        let graph = path_graph(5);
        assert!(is_connected(&graph, 0).unwrap());
        assert!(is_connected(&graph, 4).unwrap());
    }

    #[test]
    fn test_isolated_node_breaks_connectivity() {
        let mut builder = GraphBuilder::new(TierSizes::new(4, 0, 0));
        builder.add_link(0, 1, 2).unwrap();
        builder.add_link(1, 2, 2).unwrap();
        let graph = builder.build();

        assert!(!is_connected(&graph, 0).unwrap());
        assert_eq!(unreachable_nodes(&graph, 0).unwrap(), vec![3]);
        // From the isolated node nothing else is reachable.
        assert_eq!(unreachable_nodes(&graph, 3).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_single_node_is_connected() {
        let graph = GraphBuilder::new(TierSizes::new(1, 0, 0)).build();
        assert!(is_connected(&graph, 0).unwrap());
    }

    #[test]
    fn test_start_out_of_range() {
        let graph = path_graph(3);
        assert_eq!(
            is_connected(&graph, 3),
            Err(TopologyError::InvalidNodeIndex { index: 3, node_count: 3 })
        );
    }
}
