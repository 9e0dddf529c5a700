//! Random tiered topology generation.
//!
//! The generator is a pure, non-retrying builder: it draws one topology from
//! the attachment rules below and hands it back whether or not it is
//! connected. Regenerating disconnected output is the orchestrator's job.
//!
//! - **Core mesh**: every pair of core nodes is linked with probability 0.75,
//!   weight in `[5, 10]`.
//! - **Transit**: each transit node links to 1-2 distinct core nodes, then
//!   samples 2-3 distinct transit nodes and links to each one that is not
//!   itself, weight in `[10, 20]`. A sample that hits the node itself is
//!   dropped, not redrawn, so the realized peer count can fall short.
//! - **Access**: each access node links to exactly 2 distinct transit nodes,
//!   weight in `[20, 50]`.

use std::ops::{Range, RangeInclusive};

use log::{debug, info};

use crate::random::RandomSource;
use crate::topology::types::{Graph, GraphBuilder, NodeId, Tier, TierSizes, TopologyError, Weight};

/// Chance that a given pair of core nodes is linked
pub const CORE_LINK_PROBABILITY: f64 = 0.75;

pub const CORE_WEIGHTS: RangeInclusive<Weight> = 5..=10;
pub const TRANSIT_WEIGHTS: RangeInclusive<Weight> = 10..=20;
pub const ACCESS_WEIGHTS: RangeInclusive<Weight> = 20..=50;

/// Core nodes each transit node attaches to
const TRANSIT_UPLINKS: RangeInclusive<u32> = 1..=2;
/// Transit candidates each transit node samples
const TRANSIT_PEERS: RangeInclusive<u32> = 2..=3;
/// Transit nodes each access node attaches to
const ACCESS_UPLINKS: usize = 2;

/// Checks that every tier that samples has a large enough pool to draw the
/// largest count its rule can ask for.
pub fn check_populations(sizes: &TierSizes) -> Result<(), TopologyError> {
    let mut demands = Vec::new();
    if sizes.transit > 0 {
        demands.push((Tier::Core, *TRANSIT_UPLINKS.end() as usize));
        demands.push((Tier::Transit, *TRANSIT_PEERS.end() as usize));
    }
    if sizes.access > 0 {
        demands.push((Tier::Transit, ACCESS_UPLINKS));
    }

    for (tier, required) in demands {
        let available = sizes.count(tier);
        if available < required {
            return Err(TopologyError::InsufficientPopulation {
                tier,
                required,
                available,
            });
        }
    }
    Ok(())
}

/// Generates one topology with the given tier sizes.
///
/// The result may be disconnected.
pub fn generate<R: RandomSource + ?Sized>(
    sizes: TierSizes,
    random: &mut R,
) -> Result<Graph, TopologyError> {
    check_populations(&sizes)?;

    let mut builder = GraphBuilder::new(sizes);
    let core = sizes.range(Tier::Core);
    let transit = sizes.range(Tier::Transit);

    for i in core.clone() {
        for j in i + 1..core.end {
            if random.uniform_float() < CORE_LINK_PROBABILITY {
                let weight = draw_weight(random, &CORE_WEIGHTS);
                builder.add_link(i, j, weight)?;
            }
        }
    }
    debug!("Core mesh built over {} nodes", core.len());

    let mut skipped_self = 0usize;
    for node in transit.clone() {
        let uplinks = random.uniform_int(*TRANSIT_UPLINKS.start(), *TRANSIT_UPLINKS.end()) as usize;
        for target in sample(random, Tier::Core, core.clone(), uplinks)? {
            let weight = draw_weight(random, &TRANSIT_WEIGHTS);
            builder.add_link(node, target, weight)?;
        }

        let peers = random.uniform_int(*TRANSIT_PEERS.start(), *TRANSIT_PEERS.end()) as usize;
        for target in sample(random, Tier::Transit, transit.clone(), peers)? {
            if target == node {
                skipped_self += 1;
                continue;
            }
            let weight = draw_weight(random, &TRANSIT_WEIGHTS);
            builder.add_link(node, target, weight)?;
        }
    }
    debug!(
        "Transit tier attached ({} self-samples dropped)",
        skipped_self
    );

    for node in sizes.range(Tier::Access) {
        for target in sample(random, Tier::Transit, transit.clone(), ACCESS_UPLINKS)? {
            let weight = draw_weight(random, &ACCESS_WEIGHTS);
            builder.add_link(node, target, weight)?;
        }
    }

    let graph = builder.build();
    info!(
        "Generated topology: {} nodes ({} core, {} transit, {} access), {} links",
        graph.len(),
        sizes.core,
        sizes.transit,
        sizes.access,
        graph.link_count()
    );
    Ok(graph)
}

fn draw_weight<R: RandomSource + ?Sized>(random: &mut R, range: &RangeInclusive<Weight>) -> Weight {
    random.uniform_int(*range.start(), *range.end())
}

fn sample<R: RandomSource + ?Sized>(
    random: &mut R,
    tier: Tier,
    population: Range<NodeId>,
    k: usize,
) -> Result<Vec<NodeId>, TopologyError> {
    random
        .sample_without_replacement(population, k)
        .map_err(|e| TopologyError::InsufficientPopulation {
            tier,
            required: e.requested,
            available: e.available,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{SampleError, SeededRandom};
    use crate::topology::types::Edge;

    fn tier_pair_weights(a: Tier, b: Tier) -> RangeInclusive<Weight> {
        match (a.min(b), a.max(b)) {
            (Tier::Core, Tier::Core) => CORE_WEIGHTS,
            (Tier::Core, Tier::Transit) | (Tier::Transit, Tier::Transit) => TRANSIT_WEIGHTS,
            (Tier::Transit, Tier::Access) => ACCESS_WEIGHTS,
            other => panic!("no rule links {:?}", other),
        }
    }

    #[test]
    fn test_links_are_symmetric() {
        let mut random = SeededRandom::from_seed(11);
        let graph = generate(TierSizes::default(), &mut random).unwrap();

        for (u, node) in graph.nodes().iter().enumerate() {
            for edge in node.edges() {
                let back = Edge { neighbor: u, weight: edge.weight };
                assert!(
                    graph.neighbors(edge.neighbor).unwrap().contains(&back),
                    "missing reverse of {} -> {} ({})",
                    u,
                    edge.neighbor,
                    edge.weight
                );
            }
        }
    }

    #[test]
    fn test_weights_follow_tier_rules() {
        for seed in 0..20 {
            let mut random = SeededRandom::from_seed(seed);
            let graph = generate(TierSizes::default(), &mut random).unwrap();

            for (u, node) in graph.nodes().iter().enumerate() {
                for edge in node.edges() {
                    let other = graph.node(edge.neighbor).unwrap().tier();
                    let range = tier_pair_weights(node.tier(), other);
                    assert!(
                        range.contains(&edge.weight),
                        "link {} - {} has weight {} outside {:?}",
                        u,
                        edge.neighbor,
                        edge.weight,
                        range
                    );
                }
            }
        }
    }

    #[test]
    fn test_access_nodes_have_two_transit_uplinks() {
        let mut random = SeededRandom::from_seed(5);
        let sizes = TierSizes::default();
        let graph = generate(sizes, &mut random).unwrap();

        for id in sizes.range(Tier::Access) {
            let edges = graph.neighbors(id).unwrap();
            assert_eq!(edges.len(), 2, "access node {} degree", id);
            assert_ne!(edges[0].neighbor, edges[1].neighbor);
            for edge in edges {
                assert_eq!(graph.node(edge.neighbor).unwrap().tier(), Tier::Transit);
            }
        }
    }

    #[test]
    fn test_no_self_loops() {
        let mut random = SeededRandom::from_seed(8);
        let graph = generate(TierSizes::default(), &mut random).unwrap();
        for (u, node) in graph.nodes().iter().enumerate() {
            assert!(node.edges().iter().all(|edge| edge.neighbor != u));
        }
    }

    #[test]
    fn test_same_seed_same_topology() {
        let a = generate(TierSizes::default(), &mut SeededRandom::from_seed(99)).unwrap();
        let b = generate(TierSizes::default(), &mut SeededRandom::from_seed(99)).unwrap();

        assert_eq!(a.len(), b.len());
        for (x, y) in a.nodes().iter().zip(b.nodes()) {
            assert_eq!(x.edges(), y.edges());
        }
    }

    #[test]
    fn test_insufficient_populations() {
        let mut random = SeededRandom::from_seed(0);

        let err = generate(TierSizes::new(1, 5, 0), &mut random).unwrap_err();
        assert_eq!(
            err,
            TopologyError::InsufficientPopulation { tier: Tier::Core, required: 2, available: 1 }
        );

        let err = generate(TierSizes::new(4, 2, 0), &mut random).unwrap_err();
        assert_eq!(
            err,
            TopologyError::InsufficientPopulation { tier: Tier::Transit, required: 3, available: 2 }
        );

        let err = generate(TierSizes::new(4, 0, 3), &mut random).unwrap_err();
        assert_eq!(
            err,
            TopologyError::InsufficientPopulation { tier: Tier::Transit, required: 2, available: 0 }
        );
    }

    #[test]
    fn test_core_only_topology() {
        let mut random = SeededRandom::from_seed(3);
        let graph = generate(TierSizes::new(6, 0, 0), &mut random).unwrap();
        assert_eq!(graph.len(), 6);
        assert!(graph.link_count() <= 15);
    }

    /// Replays fixed draws so the self-skip can be observed directly.
    struct Scripted {
        floats: Vec<f64>,
        ints: Vec<u32>,
        samples: Vec<Vec<usize>>,
    }

    impl RandomSource for Scripted {
        fn uniform_float(&mut self) -> f64 {
            self.floats.remove(0)
        }

        fn uniform_int(&mut self, lo: u32, _hi: u32) -> u32 {
            if self.ints.is_empty() { lo } else { self.ints.remove(0) }
        }

        fn sample_without_replacement(
            &mut self,
            _population: Range<usize>,
            _k: usize,
        ) -> Result<Vec<usize>, SampleError> {
            Ok(self.samples.remove(0))
        }
    }

    #[test]
    fn test_self_sample_is_dropped_not_redrawn() {
        // 2 core nodes, 3 transit nodes (ids 2..5), no access.
        let mut random = Scripted {
            floats: vec![0.9],
            // per node: uplink count, uplink weights, peer count, peer weights
            ints: vec![1, 10, 3, 10, 10, 1, 10, 2, 10, 1, 10, 2, 10],
            samples: vec![
                vec![0],
                vec![2, 3, 4],
                vec![1],
                vec![3, 4],
                vec![0],
                vec![2, 4],
            ],
        };
        let graph = generate(TierSizes::new(2, 3, 0), &mut random).unwrap();

        // Node 2 drew itself among three peers and linked only to 3 and 4;
        // the second 2 - 4 link comes from node 4's own draw.
        let peers_of_2: Vec<NodeId> = graph
            .neighbors(2)
            .unwrap()
            .iter()
            .map(|edge| edge.neighbor)
            .filter(|&n| n >= 2)
            .collect();
        assert_eq!(peers_of_2, vec![3, 4, 4]);
        assert_eq!(graph.edge_weight(0, 1), None);
    }
}
