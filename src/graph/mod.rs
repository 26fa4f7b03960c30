//! Graph model: entities, relations and their per-node physical state.

mod load;
mod sample;

use std::collections::HashMap;

use eframe::egui::{Vec2, vec2};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use load::{load_graph_spec, parse_graph_spec};
pub use sample::sample_graph_spec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Person,
    #[serde(alias = "organization")]
    Org,
    Concept,
    Location,
    #[serde(other)]
    Other,
}

impl NodeKind {
    pub const ALL: [NodeKind; 5] = [
        NodeKind::Person,
        NodeKind::Org,
        NodeKind::Concept,
        NodeKind::Location,
        NodeKind::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Person => "Person",
            Self::Org => "Organization",
            Self::Concept => "Concept",
            Self::Location => "Location",
            Self::Other => "Other",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    #[serde(alias = "name")]
    pub id: String,
    #[serde(alias = "type")]
    pub kind: NodeKind,
}

impl NodeSpec {
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub source: String,
    pub target: String,
}

impl EdgeSpec {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Node and edge lists as produced by text analysis.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Undirected relation between two entries of [`Graph::nodes`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
}

/// Plain data holder mutated in place by the simulator and the controller.
///
/// Every edge indexes into `nodes`; ids are unique.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    index_by_id: HashMap<String, usize>,
}

/// Where freshly built nodes are scattered.
#[derive(Clone, Copy, Debug)]
pub struct Placement {
    pub center: Vec2,
    /// Full width and height of the scatter box.
    pub spread: Vec2,
}

impl Graph {
    /// Builds a graph, dropping duplicate ids and edges whose endpoints are unknown.
    pub fn build(spec: &GraphSpec, placement: Placement, rng: &mut impl Rng) -> Self {
        let mut nodes = Vec::with_capacity(spec.nodes.len());
        let mut index_by_id = HashMap::with_capacity(spec.nodes.len());

        for node_spec in &spec.nodes {
            if index_by_id.contains_key(&node_spec.id) {
                tracing::debug!(id = %node_spec.id, "dropping duplicate node id");
                continue;
            }

            let x = placement.center.x + (rng.random::<f32>() - 0.5) * placement.spread.x;
            let y = placement.center.y + (rng.random::<f32>() - 0.5) * placement.spread.y;

            index_by_id.insert(node_spec.id.clone(), nodes.len());
            nodes.push(Node {
                id: node_spec.id.clone(),
                kind: node_spec.kind,
                position: vec2(x, y),
                velocity: Vec2::ZERO,
            });
        }

        let mut edges = Vec::with_capacity(spec.edges.len());
        let mut dropped = 0usize;
        for edge_spec in &spec.edges {
            let (Some(&source), Some(&target)) = (
                index_by_id.get(&edge_spec.source),
                index_by_id.get(&edge_spec.target),
            ) else {
                tracing::debug!(
                    source = %edge_spec.source,
                    target = %edge_spec.target,
                    "dropping edge with unknown endpoint"
                );
                dropped += 1;
                continue;
            };

            edges.push(Edge { source, target });
        }

        tracing::info!(
            nodes = nodes.len(),
            edges = edges.len(),
            dropped_edges = dropped,
            "built graph"
        );

        Self {
            nodes,
            edges,
            index_by_id,
        }
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index_of(id).map(|index| &self.nodes[index])
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn kind_counts(&self) -> Vec<(NodeKind, usize)> {
        NodeKind::ALL
            .iter()
            .map(|&kind| {
                (
                    kind,
                    self.nodes.iter().filter(|node| node.kind == kind).count(),
                )
            })
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn placement() -> Placement {
        Placement {
            center: vec2(400.0, 300.0),
            spread: vec2(300.0, 200.0),
        }
    }

    fn spec() -> GraphSpec {
        GraphSpec {
            nodes: vec![
                NodeSpec::new("Elon Musk", NodeKind::Person),
                NodeSpec::new("Tesla", NodeKind::Org),
                NodeSpec::new("SpaceX", NodeKind::Org),
            ],
            edges: vec![
                EdgeSpec::new("Elon Musk", "Tesla"),
                EdgeSpec::new("Elon Musk", "SpaceX"),
            ],
        }
    }

    #[test]
    fn test_build_resolves_edges_to_indices() {
        let graph = Graph::build(&spec(), placement(), &mut StdRng::seed_from_u64(7));

        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(
            graph.edges,
            vec![
                Edge {
                    source: 0,
                    target: 1
                },
                Edge {
                    source: 0,
                    target: 2
                }
            ]
        );
        assert_eq!(graph.index_of("SpaceX"), Some(2));
        assert_eq!(graph.node("Tesla").map(|node| node.kind), Some(NodeKind::Org));
    }

    #[test]
    fn test_build_drops_dangling_edges() {
        let mut spec = spec();
        spec.edges.push(EdgeSpec::new("Tesla", "Twitter"));
        spec.edges.push(EdgeSpec::new("Nobody", "Elon Musk"));

        let graph = Graph::build(&spec, placement(), &mut StdRng::seed_from_u64(7));
        assert_eq!(graph.edges.len(), 2);
        assert!(
            graph
                .edges
                .iter()
                .all(|edge| edge.source < graph.nodes.len() && edge.target < graph.nodes.len())
        );
    }

    #[test]
    fn test_build_keeps_first_duplicate() {
        let mut spec = spec();
        spec.nodes.push(NodeSpec::new("Tesla", NodeKind::Concept));

        let graph = Graph::build(&spec, placement(), &mut StdRng::seed_from_u64(7));
        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(graph.node("Tesla").map(|node| node.kind), Some(NodeKind::Org));
    }

    #[test]
    fn test_initial_positions_within_spread() {
        let graph = Graph::build(&spec(), placement(), &mut StdRng::seed_from_u64(99));
        for node in &graph.nodes {
            assert!((node.position.x - 400.0).abs() <= 150.0);
            assert!((node.position.y - 300.0).abs() <= 100.0);
            assert_eq!(node.velocity, Vec2::ZERO);
        }
    }

    #[test]
    fn test_same_seed_same_placement() {
        let a = Graph::build(&spec(), placement(), &mut StdRng::seed_from_u64(3));
        let b = Graph::build(&spec(), placement(), &mut StdRng::seed_from_u64(3));
        let positions_a: Vec<_> = a.nodes.iter().map(|node| node.position).collect();
        let positions_b: Vec<_> = b.nodes.iter().map(|node| node.position).collect();
        assert_eq!(positions_a, positions_b);
    }

    #[test]
    fn test_empty_spec() {
        let graph = Graph::build(
            &GraphSpec::default(),
            placement(),
            &mut StdRng::seed_from_u64(1),
        );
        assert!(graph.is_empty());
        assert!(graph.edges.is_empty());
        assert!(graph.kind_counts().is_empty());
    }

    #[test]
    fn test_kind_counts() {
        let graph = Graph::build(&spec(), placement(), &mut StdRng::seed_from_u64(1));
        assert_eq!(
            graph.kind_counts(),
            vec![(NodeKind::Person, 1), (NodeKind::Org, 2)]
        );
    }
}
