//! # TierRoute - Tiered network topologies with shortest-path routing tables
//!
//! This library generates synthetic three-tier network topologies, checks
//! that they are connected, and computes a predecessor-based routing table
//! for every node so that point-to-point paths can be answered on demand.
//!
//! ## Overview
//!
//! Data flows strictly one way:
//!
//! 1. `topology::generate` draws a tiered graph from an injectable
//!    `random::RandomSource`.
//! 2. `topology::is_connected` gates it with a breadth-first traversal.
//! 3. `routing::build_routing_table` runs a single-source shortest-path
//!    computation from every node (in parallel) and keeps each destination's
//!    predecessor.
//! 4. `routing::reconstruct` walks a table row backwards to produce a path.
//!
//! The bounded regenerate-until-connected loop lives in `orchestrator`, not in
//! the generator.
//!
//! ## Tiers
//!
//! - **Core** (tier 1): a random mesh, each pair linked with probability 0.75,
//!   weights 5-10.
//! - **Transit** (tier 2): 1-2 core uplinks and 2-3 sampled transit peers,
//!   weights 10-20.
//! - **Access** (tier 3): exactly two transit uplinks, weights 20-50.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use tierroute::config::NetworkConfig;
//! use tierroute::orchestrator;
//!
//! let config = NetworkConfig { seed: Some(42), ..NetworkConfig::default() };
//! let built = orchestrator::build_network(&config)?;
//!
//! let path = built.network.route(0, 99)?;
//! println!("{} (seed {}, after {} attempts)", path, built.seed, built.attempts);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Configuration Format
//!
//! ```yaml
//! tiers:
//!   core: 10
//!   transit: 20
//!   access: 70
//! routing:
//!   max_attempts: 100
//!   start_node: 0
//! seed: 42
//! ```
//!
//! ## Error Handling
//!
//! Library functions return typed errors (`TopologyError`, `RoutingError`,
//! `OrchestrationError`, `ValidationError`). The binary reports them through
//! `color_eyre`.

pub mod config;
pub mod config_loader;
pub mod random;
pub mod topology;
pub mod routing;
pub mod orchestrator;
pub mod report;
