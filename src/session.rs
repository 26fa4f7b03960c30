//! One open graph: its layout, its view and the pointer state acting on them.

use eframe::egui::{Pos2, Vec2};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::LayoutConfig;
use crate::graph::{Graph, GraphSpec, Placement};
use crate::interaction::{InteractionController, PointerState};
use crate::physics::{ForceParams, SettlePass};
use crate::render::{RenderStyle, Surface, render};
use crate::viewport::Viewport;

pub struct GraphSession {
    graph: Graph,
    viewport: Viewport,
    controller: InteractionController,
    config: LayoutConfig,
    params: ForceParams,
    style: RenderStyle,
    settle: SettlePass,
    surface_size: Vec2,
    hovered: Option<usize>,
}

impl GraphSession {
    /// Builds a fresh graph scattered around the middle of the surface and
    /// starts its settle pass.
    ///
    /// With `steps_per_frame == 0` the pass completes before this returns.
    /// A `config` that fails [`LayoutConfig::validate`] is replaced by the defaults.
    pub fn analyze(spec: &GraphSpec, config: LayoutConfig, surface_size: Vec2, seed: u64) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(error) => {
                tracing::warn!("{error}; using default layout config");
                LayoutConfig::default()
            }
        };

        let placement = Placement {
            center: surface_size * 0.5,
            spread: Vec2::from(config.jitter),
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = Graph::build(spec, placement, &mut rng);

        let mut session = Self {
            graph,
            viewport: Viewport::from(&config),
            controller: InteractionController::new(config.pick_radius, config.pan_on_empty_drag),
            params: ForceParams::from(&config),
            style: RenderStyle::from(&config),
            settle: SettlePass::new(config.iterations),
            config,
            surface_size,
            hovered: None,
        };

        if session.config.steps_per_frame == 0 {
            session
                .settle
                .run_to_completion(&mut session.graph, &session.params);
        }
        session
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn pointer_state(&self) -> PointerState {
        self.controller.state()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn is_settling(&self) -> bool {
        !self.settle.is_finished()
    }

    /// Settle progress as `(completed, total)` iterations.
    pub fn settle_progress(&self) -> (usize, usize) {
        (self.settle.completed(), self.settle.total())
    }

    pub fn set_surface_size(&mut self, surface_size: Vec2) {
        self.surface_size = surface_size;
    }

    /// Advances a chunked settle pass by one frame's worth of steps.
    ///
    /// Paused while a node is being dragged. Returns whether anything moved.
    pub fn tick(&mut self) -> bool {
        if self.settle.is_finished() || self.controller.dragged_node().is_some() {
            return false;
        }

        let steps = self.config.steps_per_frame.max(1);
        self.settle.advance(&mut self.graph, &self.params, steps);
        true
    }

    /// Starts another settle pass from the current positions.
    pub fn resimulate(&mut self) {
        self.start_settle(self.config.iterations);
    }

    fn start_settle(&mut self, iterations: usize) {
        self.settle = SettlePass::new(iterations);
        if self.config.steps_per_frame == 0 {
            self.settle.run_to_completion(&mut self.graph, &self.params);
        }
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_by(self.config.zoom_in_factor);
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_by(self.config.zoom_out_factor);
    }

    pub fn zoom_at(&mut self, factor: f32, screen: Pos2) {
        self.viewport.zoom_at(factor, screen);
    }

    pub fn pan_by(&mut self, screen_delta: Vec2) {
        self.viewport.pan_by(screen_delta);
    }

    pub fn reset_view(&mut self) {
        self.viewport.reset();
    }

    /// Centers the view on the node with `id`; returns false when there is none.
    pub fn focus_node(&mut self, id: &str) -> bool {
        let Some(node) = self.graph.node(id) else {
            return false;
        };
        self.viewport.center_on(node.position, self.surface_size);
        true
    }

    pub fn node_at(&self, screen: Pos2) -> Option<usize> {
        self.controller.node_at(&self.graph, &self.viewport, screen)
    }

    /// Returns whether the hovered node changed.
    pub fn update_hover(&mut self, screen: Option<Pos2>) -> bool {
        let hovered = screen.and_then(|screen| self.node_at(screen));
        let changed = hovered != self.hovered;
        self.hovered = hovered;
        changed
    }

    pub fn pointer_down(&mut self, screen: Pos2) {
        self.controller
            .pointer_down(&self.graph, &self.viewport, screen);
    }

    /// Returns whether the surface needs a redraw.
    pub fn pointer_move(&mut self, screen: Pos2) -> bool {
        self.controller
            .pointer_move(&mut self.graph, &mut self.viewport, screen)
    }

    pub fn pointer_up(&mut self) {
        let released = self.controller.pointer_up();
        if released.is_some()
            && self.config.resettle_after_drag
            && self.config.resettle_iterations > 0
        {
            self.start_settle(self.config.resettle_iterations);
        }
    }

    pub fn render(&self, surface: &mut impl Surface) {
        render(
            &self.graph,
            &self.viewport,
            &self.style,
            self.hovered,
            surface,
        );
    }
}
