//! Pointer handling: node dragging, panning and hit-testing.

use eframe::egui::{Pos2, Vec2};

use crate::graph::Graph;
use crate::viewport::Viewport;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PointerState {
    #[default]
    Idle,
    /// `anchor` is the last pointer position in world space.
    Dragging { node: usize, anchor: Vec2 },
    /// `anchor` is the last pointer position in screen space.
    Panning { anchor: Pos2 },
}

/// Nearest node whose center lies strictly within `radius` of `world`.
pub fn hit_test(graph: &Graph, world: Vec2, radius: f32) -> Option<usize> {
    let radius_sq = radius * radius;
    graph
        .nodes
        .iter()
        .enumerate()
        .filter_map(|(index, node)| {
            let distance_sq = (node.position - world).length_sq();
            (distance_sq < radius_sq).then_some((index, distance_sq))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _)| index)
}

#[derive(Clone, Debug)]
pub struct InteractionController {
    state: PointerState,
    pick_radius: f32,
    pan_on_empty_drag: bool,
}

impl InteractionController {
    pub fn new(pick_radius: f32, pan_on_empty_drag: bool) -> Self {
        Self {
            state: PointerState::Idle,
            pick_radius,
            pan_on_empty_drag,
        }
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn dragged_node(&self) -> Option<usize> {
        match self.state {
            PointerState::Dragging { node, .. } => Some(node),
            _ => None,
        }
    }

    pub fn node_at(&self, graph: &Graph, viewport: &Viewport, screen: Pos2) -> Option<usize> {
        hit_test(graph, viewport.screen_to_world(screen), self.pick_radius)
    }

    pub fn pointer_down(&mut self, graph: &Graph, viewport: &Viewport, screen: Pos2) {
        let world = viewport.screen_to_world(screen);

        self.state = match hit_test(graph, world, self.pick_radius) {
            Some(node) => {
                tracing::debug!(node = %graph.nodes[node].id, "drag start");
                PointerState::Dragging {
                    node,
                    anchor: world,
                }
            }
            None if self.pan_on_empty_drag => {
                tracing::debug!("pan start");
                PointerState::Panning { anchor: screen }
            }
            None => PointerState::Idle,
        };
    }

    /// Returns whether anything moved and the surface needs a redraw.
    pub fn pointer_move(&mut self, graph: &mut Graph, viewport: &mut Viewport, screen: Pos2) -> bool {
        match self.state {
            PointerState::Idle => false,
            PointerState::Dragging { node, anchor } => {
                let Some(dragged) = graph.nodes.get_mut(node) else {
                    self.state = PointerState::Idle;
                    return false;
                };

                let world = viewport.screen_to_world(screen);
                dragged.position += world - anchor;
                dragged.velocity = Vec2::ZERO;
                self.state = PointerState::Dragging {
                    node,
                    anchor: world,
                };
                true
            }
            PointerState::Panning { anchor } => {
                viewport.pan_by(screen - anchor);
                self.state = PointerState::Panning { anchor: screen };
                true
            }
        }
    }

    /// Returns the node that was being dragged, if any.
    pub fn pointer_up(&mut self) -> Option<usize> {
        let released = self.dragged_node();
        if !matches!(self.state, PointerState::Idle) {
            tracing::debug!(?released, "pointer released");
        }
        self.state = PointerState::Idle;
        released
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{pos2, vec2};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::graph::{GraphSpec, NodeKind, NodeSpec, Placement};

    fn graph_at(points: &[Vec2]) -> Graph {
        let spec = GraphSpec {
            nodes: (0..points.len())
                .map(|index| NodeSpec::new(format!("n{index}"), NodeKind::Person))
                .collect(),
            edges: Vec::new(),
        };
        let mut graph = Graph::build(
            &spec,
            Placement {
                center: Vec2::ZERO,
                spread: Vec2::ZERO,
            },
            &mut StdRng::seed_from_u64(0),
        );
        for (node, point) in graph.nodes.iter_mut().zip(points) {
            node.position = *point;
        }
        graph
    }

    fn scaled_view() -> Viewport {
        let mut viewport = Viewport::default();
        viewport.set_scale(2.0);
        viewport.set_offset(vec2(50.0, 50.0));
        viewport
    }

    #[test]
    fn test_hit_test_under_transform() {
        let graph = graph_at(&[vec2(100.0, 100.0)]);
        let viewport = scaled_view();
        let controller = InteractionController::new(20.0, true);

        let on_node = viewport.world_to_screen(vec2(100.0, 100.0));
        assert_eq!(controller.node_at(&graph, &viewport, on_node), Some(0));

        let away = viewport.world_to_screen(vec2(150.0, 100.0));
        assert_eq!(away, pos2(350.0, 250.0));
        assert_eq!(controller.node_at(&graph, &viewport, away), None);
    }

    #[test]
    fn test_hit_test_prefers_nearest() {
        let graph = graph_at(&[vec2(0.0, 0.0), vec2(12.0, 0.0)]);
        assert_eq!(hit_test(&graph, vec2(10.0, 0.0), 20.0), Some(1));
        assert_eq!(hit_test(&graph, vec2(2.0, 0.0), 20.0), Some(0));
        assert_eq!(hit_test(&graph, vec2(0.0, 20.0), 20.0), None);
    }

    #[test]
    fn test_drag_moves_by_screen_delta_over_scale() {
        let mut graph = graph_at(&[vec2(100.0, 100.0), vec2(300.0, 100.0)]);
        graph.nodes[0].velocity = vec2(3.0, -1.0);
        let mut viewport = scaled_view();
        let mut controller = InteractionController::new(20.0, true);

        controller.pointer_down(&graph, &viewport, pos2(250.0, 250.0));
        assert!(matches!(
            controller.state(),
            PointerState::Dragging { node: 0, .. }
        ));

        assert!(controller.pointer_move(&mut graph, &mut viewport, pos2(270.0, 240.0)));
        assert_eq!(graph.nodes[0].position, vec2(110.0, 95.0));
        assert_eq!(graph.nodes[0].velocity, Vec2::ZERO);

        assert!(controller.pointer_move(&mut graph, &mut viewport, pos2(290.0, 240.0)));
        assert_eq!(graph.nodes[0].position, vec2(120.0, 95.0));

        assert_eq!(graph.nodes[1].position, vec2(300.0, 100.0));
        assert_eq!(viewport.offset(), vec2(50.0, 50.0));
        assert_eq!(controller.pointer_up(), Some(0));
        assert_eq!(controller.state(), PointerState::Idle);
    }

    #[test]
    fn test_empty_space_pans() {
        let mut graph = graph_at(&[vec2(100.0, 100.0)]);
        let mut viewport = scaled_view();
        let mut controller = InteractionController::new(20.0, true);

        controller.pointer_down(&graph, &viewport, pos2(10.0, 10.0));
        assert!(matches!(controller.state(), PointerState::Panning { .. }));

        controller.pointer_move(&mut graph, &mut viewport, pos2(30.0, 5.0));
        controller.pointer_move(&mut graph, &mut viewport, pos2(40.0, 5.0));
        assert_eq!(viewport.offset(), vec2(80.0, 45.0));
        assert_eq!(graph.nodes[0].position, vec2(100.0, 100.0));
        assert_eq!(controller.pointer_up(), None);
    }

    #[test]
    fn test_empty_space_is_noop_without_panning() {
        let mut graph = graph_at(&[vec2(100.0, 100.0)]);
        let mut viewport = scaled_view();
        let mut controller = InteractionController::new(20.0, false);

        controller.pointer_down(&graph, &viewport, pos2(10.0, 10.0));
        assert_eq!(controller.state(), PointerState::Idle);
        assert!(!controller.pointer_move(&mut graph, &mut viewport, pos2(90.0, 90.0)));
        assert_eq!(viewport.offset(), vec2(50.0, 50.0));
    }

    #[test]
    fn test_idle_move_does_nothing() {
        let mut graph = graph_at(&[vec2(0.0, 0.0)]);
        let mut viewport = Viewport::default();
        let mut controller = InteractionController::new(20.0, true);
        assert!(!controller.pointer_move(&mut graph, &mut viewport, pos2(0.0, 0.0)));
        assert_eq!(controller.pointer_up(), None);
    }

    #[test]
    fn test_drag_on_empty_graph_is_safe() {
        let mut graph = graph_at(&[]);
        let mut viewport = Viewport::default();
        let mut controller = InteractionController::new(20.0, false);
        controller.pointer_down(&graph, &viewport, pos2(0.0, 0.0));
        assert!(!controller.pointer_move(&mut graph, &mut viewport, pos2(5.0, 5.0)));
        assert_eq!(controller.pointer_up(), None);
    }
}
