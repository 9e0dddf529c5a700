//! Network topology module.
//!
//! This module contains the tiered graph model, the random generator that
//! populates it, and the connectivity gate applied to generated graphs.

pub mod types;
pub mod generator;
pub mod connectivity;

// Re-export key types and functions for easier access
pub use types::{Edge, Graph, GraphBuilder, Node, NodeId, Tier, TierSizes, TopologyError, Weight};
pub use generator::generate;
pub use connectivity::{is_connected, unreachable_nodes};
