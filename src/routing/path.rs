//! Path reconstruction from a predecessor table.

use std::fmt;

use serde::Serialize;

use crate::routing::shortest_path::Distance;
use crate::routing::{check_index, PredecessorTable, RoutingError};
use crate::topology::{Graph, NodeId};

/// Ordered node sequence from source to destination, both inclusive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn source(&self) -> NodeId {
        self.nodes[0]
    }

    pub fn destination(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    pub fn hop_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Consecutive node pairs along the path
    pub fn links(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Sum of link weights along the path, `None` if a hop has no link in `graph`
    pub fn total_weight(&self, graph: &Graph) -> Option<Distance> {
        self.links()
            .map(|(a, b)| graph.edge_weight(a, b).map(Distance::from))
            .sum()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}

/// Rebuilds the shortest path from `source` to `destination`.
///
/// Walks predecessor entries of `source`'s row backwards from `destination`
/// until `source` is reached, then reverses the walk.
pub fn reconstruct(
    table: &PredecessorTable,
    source: NodeId,
    destination: NodeId,
) -> Result<Path, RoutingError> {
    check_index(source, table.node_count())?;
    check_index(destination, table.node_count())?;

    let mut nodes = vec![destination];
    let mut cursor = destination;
    while cursor != source {
        cursor = table
            .predecessor(source, cursor)
            .ok_or(RoutingError::UnreachableDestination {
                from: source,
                to: destination,
            })?;
        nodes.push(cursor);
    }
    nodes.reverse();

    Ok(Path { nodes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::build_routing_table;
    use crate::topology::{GraphBuilder, TierSizes};

    fn diamond_with_isolated() -> Graph {
        let mut builder = GraphBuilder::new(TierSizes::new(5, 0, 0));
        builder.add_link(0, 1, 4).unwrap();
        builder.add_link(1, 2, 3).unwrap();
        builder.add_link(0, 2, 10).unwrap();
        builder.add_link(2, 3, 1).unwrap();
        builder.build()
    }

    #[test]
    fn test_reconstruct_diamond() {
        let graph = diamond_with_isolated();
        let table = build_routing_table(&graph);

        let path = reconstruct(&table, 0, 3).unwrap();
        assert_eq!(path.nodes(), &[0, 1, 2, 3]);
        assert_eq!(path.source(), 0);
        assert_eq!(path.destination(), 3);
        assert_eq!(path.hop_count(), 3);
        assert_eq!(path.total_weight(&graph), Some(8));
        assert_eq!(path.to_string(), "0 -> 1 -> 2 -> 3");

        let back = reconstruct(&table, 3, 0).unwrap();
        assert_eq!(back.nodes(), &[3, 2, 1, 0]);
    }

    #[test]
    fn test_same_source_and_destination() {
        let table = build_routing_table(&diamond_with_isolated());
        let path = reconstruct(&table, 2, 2).unwrap();
        assert_eq!(path.nodes(), &[2]);
        assert_eq!(path.hop_count(), 0);

        // Even an isolated node reaches itself.
        assert_eq!(reconstruct(&table, 4, 4).unwrap().nodes(), &[4]);
    }

    #[test]
    fn test_unreachable_destination() {
        let table = build_routing_table(&diamond_with_isolated());
        for source in 0..4 {
            assert_eq!(
                reconstruct(&table, source, 4),
                Err(RoutingError::UnreachableDestination { from: source, to: 4 })
            );
        }
    }

    #[test]
    fn test_invalid_indices() {
        let table = build_routing_table(&diamond_with_isolated());
        assert_eq!(
            reconstruct(&table, 5, 0),
            Err(RoutingError::InvalidNodeIndex { index: 5, node_count: 5 })
        );
        assert_eq!(
            reconstruct(&table, 0, 17),
            Err(RoutingError::InvalidNodeIndex { index: 17, node_count: 5 })
        );
    }

    #[test]
    fn test_reconstruct_is_repeatable() {
        let table = build_routing_table(&diamond_with_isolated());
        let first = reconstruct(&table, 1, 3).unwrap();
        for _ in 0..5 {
            assert_eq!(reconstruct(&table, 1, 3).unwrap(), first);
        }
    }
}
