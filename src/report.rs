//! Report generation for routed networks.
//!
//! Produces a JSON summary of a generated topology and a read-only snapshot
//! that an external renderer can draw (nodes, tiers, links and an optional
//! highlighted path, plus the routing table).

use std::fs;
use std::path::Path as FsPath;

use color_eyre::eyre::{Context, Result};
use serde::Serialize;

use crate::orchestrator::{BuiltNetwork, RoutedNetwork};
use crate::routing::{Path, PredecessorTable};
use crate::topology::{Edge, Graph, NodeId, Tier};

/// Degree statistics for one tier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierSummary {
    pub tier: Tier,
    pub nodes: usize,
    pub min_degree: usize,
    pub max_degree: usize,
    pub mean_degree: f64,
}

/// Overview of a routed network
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkSummary {
    pub total_nodes: usize,
    pub links: usize,
    pub generation_attempts: u32,
    /// Seed that reproduces this network
    pub seed: u64,
    pub routing_entries: usize,
    pub tiers: Vec<TierSummary>,
}

impl NetworkSummary {
    pub fn new(built: &BuiltNetwork) -> Self {
        let graph = built.network.graph();
        let table = built.network.table();
        let routing_entries = (0..table.node_count())
            .filter_map(|source| table.row(source))
            .map(|row| row.len())
            .sum();

        Self {
            total_nodes: graph.len(),
            links: graph.link_count(),
            generation_attempts: built.attempts,
            seed: built.seed,
            routing_entries,
            tiers: Tier::ALL
                .into_iter()
                .map(|tier| summarize_tier(graph, tier))
                .collect(),
        }
    }
}

fn summarize_tier(graph: &Graph, tier: Tier) -> TierSummary {
    let degrees: Vec<usize> = graph.nodes()[graph.sizes().range(tier)]
        .iter()
        .map(|node| node.degree())
        .collect();

    let mean_degree = if degrees.is_empty() {
        0.0
    } else {
        degrees.iter().sum::<usize>() as f64 / degrees.len() as f64
    };

    TierSummary {
        tier,
        nodes: degrees.len(),
        min_degree: degrees.iter().min().copied().unwrap_or(0),
        max_degree: degrees.iter().max().copied().unwrap_or(0),
        mean_degree,
    }
}

/// One node as seen by a renderer
#[derive(Debug, Clone, Serialize)]
pub struct NodeSnapshot {
    pub id: NodeId,
    pub tier: Tier,
    pub links: Vec<Edge>,
}

/// Read-only hand-off of a routed network and an optional path to a renderer
#[derive(Debug, Clone, Serialize)]
pub struct NetworkSnapshot {
    pub nodes: Vec<NodeSnapshot>,
    pub routing_table: PredecessorTable,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted_path: Option<Path>,
}

impl NetworkSnapshot {
    pub fn capture(network: &RoutedNetwork, highlighted_path: Option<Path>) -> Self {
        let nodes = network
            .graph()
            .nodes()
            .iter()
            .enumerate()
            .map(|(id, node)| NodeSnapshot {
                id,
                tier: node.tier(),
                links: node.edges().to_vec(),
            })
            .collect();

        Self {
            nodes,
            routing_table: network.table().clone(),
            highlighted_path,
        }
    }
}

/// Serialize `value` as pretty JSON into `output_path`
pub fn write_json_report<T: Serialize>(value: &T, output_path: &FsPath) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .context("Failed to serialize report to JSON")?;

    fs::write(output_path, json)
        .with_context(|| format!("Failed to write JSON report to {}", output_path.display()))?;

    log::info!("JSON report written to {}", output_path.display());
    Ok(())
}
