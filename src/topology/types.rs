//! Topology type definitions.
//!
//! A [`Graph`] is a fixed set of tiered nodes whose edge lists are frozen at
//! construction. Links are undirected: every `(u, v, w)` entry in `u`'s edge
//! list has a matching `(v, u, w)` entry in `v`'s list.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Index of a node, in `[0, graph.len())`
pub type NodeId = usize;

/// Positive link cost
pub type Weight = u32;

/// Errors raised while building or querying a topology
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    #[error("node index {index} is out of range (graph has {node_count} nodes)")]
    InvalidNodeIndex { index: NodeId, node_count: usize },

    #[error("{tier} needs {required} nodes to sample from but only {available} exist")]
    InsufficientPopulation {
        tier: Tier,
        required: usize,
        available: usize,
    },

    #[error("self-loop on node {node}")]
    SelfLoop { node: NodeId },

    #[error("link {from} - {to} has zero weight")]
    ZeroWeight { from: NodeId, to: NodeId },
}

/// Topology class governing a node's attachment rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Tier 1: backbone operators
    Core,
    /// Tier 2: transit operators
    Transit,
    /// Tier 3: access networks
    Access,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Core, Tier::Transit, Tier::Access];

    /// Conventional tier number (1, 2 or 3)
    pub fn number(self) -> u8 {
        match self {
            Self::Core => 1,
            Self::Transit => 2,
            Self::Access => 3,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Core => "core",
            Self::Transit => "transit",
            Self::Access => "access",
        };
        write!(f, "tier {} ({})", self.number(), name)
    }
}

/// Number of nodes in each tier.
///
/// Nodes are laid out contiguously: core nodes first, then transit, then
/// access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierSizes {
    pub core: usize,
    pub transit: usize,
    pub access: usize,
}

impl TierSizes {
    pub fn new(core: usize, transit: usize, access: usize) -> Self {
        Self { core, transit, access }
    }

    pub fn total(&self) -> usize {
        self.core + self.transit + self.access
    }

    pub fn count(&self, tier: Tier) -> usize {
        match tier {
            Tier::Core => self.core,
            Tier::Transit => self.transit,
            Tier::Access => self.access,
        }
    }

    /// Index range occupied by `tier`
    pub fn range(&self, tier: Tier) -> Range<NodeId> {
        match tier {
            Tier::Core => 0..self.core,
            Tier::Transit => self.core..self.core + self.transit,
            Tier::Access => self.core + self.transit..self.total(),
        }
    }

    /// Tier of the node at `index`, if the index is in range
    pub fn tier_of(&self, index: NodeId) -> Option<Tier> {
        Tier::ALL
            .into_iter()
            .find(|&tier| self.range(tier).contains(&index))
    }
}

impl Default for TierSizes {
    fn default() -> Self {
        Self {
            core: 10,
            transit: 20,
            access: 70,
        }
    }
}

/// One directed half of an undirected link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub neighbor: NodeId,
    pub weight: Weight,
}

/// A network element with a fixed tier and a frozen edge list
#[derive(Debug, Clone)]
pub struct Node {
    tier: Tier,
    edges: Box<[Edge]>,
}

impl Node {
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

/// Immutable tiered graph
#[derive(Debug, Clone)]
pub struct Graph {
    sizes: TierSizes,
    nodes: Vec<Node>,
}

impl Graph {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn sizes(&self) -> TierSizes {
        self.sizes
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Looks up a node, rejecting out-of-range indices
    pub fn node(&self, id: NodeId) -> Result<&Node, TopologyError> {
        self.nodes.get(id).ok_or(TopologyError::InvalidNodeIndex {
            index: id,
            node_count: self.nodes.len(),
        })
    }

    pub fn neighbors(&self, id: NodeId) -> Result<&[Edge], TopologyError> {
        self.node(id).map(Node::edges)
    }

    /// Weight of the lightest link between `a` and `b`.
    ///
    /// Transit nodes may be joined by parallel links when both ends sampled
    /// each other.
    pub fn edge_weight(&self, a: NodeId, b: NodeId) -> Option<Weight> {
        self.nodes
            .get(a)?
            .edges
            .iter()
            .filter(|edge| edge.neighbor == b)
            .map(|edge| edge.weight)
            .min()
    }

    /// Number of undirected links, parallel links counted separately
    pub fn link_count(&self) -> usize {
        self.nodes.iter().map(Node::degree).sum::<usize>() / 2
    }
}

/// Accumulates symmetric links before freezing them into a [`Graph`].
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    sizes: TierSizes,
    adjacency: Vec<Vec<Edge>>,
}

impl GraphBuilder {
    pub fn new(sizes: TierSizes) -> Self {
        Self {
            sizes,
            adjacency: vec![Vec::new(); sizes.total()],
        }
    }

    /// Adds the link to both endpoints' edge lists.
    pub fn add_link(&mut self, a: NodeId, b: NodeId, weight: Weight) -> Result<(), TopologyError> {
        let node_count = self.adjacency.len();
        for index in [a, b] {
            if index >= node_count {
                return Err(TopologyError::InvalidNodeIndex { index, node_count });
            }
        }
        if a == b {
            return Err(TopologyError::SelfLoop { node: a });
        }
        if weight == 0 {
            return Err(TopologyError::ZeroWeight { from: a, to: b });
        }

        self.adjacency[a].push(Edge { neighbor: b, weight });
        self.adjacency[b].push(Edge { neighbor: a, weight });
        Ok(())
    }

    pub fn build(self) -> Graph {
        let sizes = self.sizes;
        let nodes = self
            .adjacency
            .into_iter()
            .enumerate()
            .map(|(index, edges)| Node {
                // Indices come from `sizes.total()`, so every one has a tier.
                tier: sizes.tier_of(index).unwrap_or(Tier::Access),
                edges: edges.into_boxed_slice(),
            })
            .collect();

        Graph { sizes, nodes }
    }
}
