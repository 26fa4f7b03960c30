//! Repulsion-plus-spring layout with velocity damping.
//!
//! Repulsion is evaluated for every ordered pair of nodes, which is fine for
//! the tens to low hundreds of entities a text yields.

mod forces;

use crate::config::LayoutConfig;
use crate::graph::Graph;
use forces::{repulsion_between, spring_between};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForceParams {
    pub repulsion: f32,
    pub repulsion_step: f32,
    pub rest_length: f32,
    pub spring_constant: f32,
    pub position_damping: f32,
    pub velocity_damping: f32,
    pub min_distance: f32,
}

impl Default for ForceParams {
    fn default() -> Self {
        Self::from(&LayoutConfig::default())
    }
}

impl From<&LayoutConfig> for ForceParams {
    fn from(config: &LayoutConfig) -> Self {
        Self {
            repulsion: config.repulsion,
            repulsion_step: config.repulsion_step,
            rest_length: config.rest_length,
            spring_constant: config.spring_constant,
            position_damping: config.position_damping,
            velocity_damping: config.velocity_damping,
            min_distance: config.min_distance,
        }
    }
}

/// Advances the layout by one integration step.
pub fn step(graph: &mut Graph, params: &ForceParams) {
    let node_count = graph.nodes.len();

    for i in 0..node_count {
        for j in 0..node_count {
            if i == j {
                continue;
            }
            let push = repulsion_between(graph.nodes[i].position, graph.nodes[j].position, params);
            graph.nodes[i].velocity += push;
        }
    }

    for edge_index in 0..graph.edges.len() {
        let edge = graph.edges[edge_index];
        if edge.source >= node_count || edge.target >= node_count {
            continue;
        }

        let pull = spring_between(
            graph.nodes[edge.source].position,
            graph.nodes[edge.target].position,
            params,
        );
        graph.nodes[edge.source].velocity += pull;
        graph.nodes[edge.target].velocity -= pull;
    }

    for node in &mut graph.nodes {
        node.position += node.velocity * params.position_damping;
        node.velocity *= params.velocity_damping;
    }
}

/// Runs `iterations` steps in place.
pub fn simulate(graph: &mut Graph, params: &ForceParams, iterations: usize) {
    for _ in 0..iterations {
        step(graph, params);
    }
}

pub fn average_speed(graph: &Graph) -> f32 {
    if graph.nodes.is_empty() {
        return 0.0;
    }

    graph
        .nodes
        .iter()
        .map(|node| node.velocity.length())
        .sum::<f32>()
        / graph.nodes.len() as f32
}

/// A settle pass that can be spread across several frames.
///
/// Advancing it to completion gives the same positions as [`simulate`] with
/// the same iteration count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettlePass {
    total: usize,
    remaining: usize,
}

impl SettlePass {
    pub fn new(iterations: usize) -> Self {
        Self {
            total: iterations,
            remaining: iterations,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    pub fn completed(&self) -> usize {
        self.total - self.remaining
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Runs at most `max_steps` iterations; returns whether the pass is done.
    pub fn advance(&mut self, graph: &mut Graph, params: &ForceParams, max_steps: usize) -> bool {
        let steps = max_steps.min(self.remaining);
        simulate(graph, params, steps);
        self.remaining -= steps;

        if self.is_finished() && steps > 0 {
            tracing::info!(
                iterations = self.total,
                average_speed = average_speed(graph),
                "settle pass complete"
            );
        }
        self.is_finished()
    }

    pub fn run_to_completion(&mut self, graph: &mut Graph, params: &ForceParams) {
        self.advance(graph, params, self.remaining);
    }
}
