//! Stateless draw routine over a minimal drawing capability.

mod painter;

use eframe::egui::{Color32, Pos2};

use crate::config::LayoutConfig;
use crate::graph::{Graph, NodeKind};
use crate::util::short_label;
use crate::viewport::Viewport;

pub use painter::PainterSurface;

pub const BACKGROUND_COLOR: Color32 = Color32::from_rgb(19, 23, 29);
pub const EDGE_COLOR: Color32 = Color32::from_rgb(71, 85, 105);
pub const LABEL_COLOR: Color32 = Color32::WHITE;
pub const HOVER_COLOR: Color32 = Color32::from_rgb(245, 206, 93);

/// Drawing primitives in screen space, relative to the surface origin.
pub trait Surface {
    fn clear(&mut self, color: Color32);
    fn draw_line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32);
    fn draw_circle(&mut self, center: Pos2, radius: f32, fill: Color32);
    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32);
    /// Draws `text` centered on `center`.
    fn draw_text(&mut self, center: Pos2, text: &str, size: f32, color: Color32);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderStyle {
    pub node_radius: f32,
    pub label_max_chars: usize,
    pub label_font_size: f32,
    pub edge_width: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::from(&LayoutConfig::default())
    }
}

impl From<&LayoutConfig> for RenderStyle {
    fn from(config: &LayoutConfig) -> Self {
        Self {
            node_radius: config.node_radius,
            label_max_chars: config.label_max_chars,
            label_font_size: config.label_font_size,
            edge_width: 1.0,
        }
    }
}

pub fn kind_color(kind: NodeKind) -> Color32 {
    match kind {
        NodeKind::Person => Color32::from_rgb(244, 114, 182),
        NodeKind::Org => Color32::from_rgb(96, 165, 250),
        NodeKind::Concept => Color32::from_rgb(167, 139, 250),
        NodeKind::Location => Color32::from_rgb(52, 211, 153),
        NodeKind::Other => Color32::from_rgb(136, 136, 136),
    }
}

/// Clears the surface and draws edges, then nodes, then labels.
///
/// Sizes are world units, so they scale with the viewport like positions do.
pub fn render(
    graph: &Graph,
    viewport: &Viewport,
    style: &RenderStyle,
    hovered: Option<usize>,
    surface: &mut impl Surface,
) {
    surface.clear(BACKGROUND_COLOR);

    let scale = viewport.scale();
    let node_count = graph.nodes.len();

    for edge in &graph.edges {
        if edge.source >= node_count || edge.target >= node_count {
            continue;
        }
        surface.draw_line(
            viewport.world_to_screen(graph.nodes[edge.source].position),
            viewport.world_to_screen(graph.nodes[edge.target].position),
            style.edge_width * scale,
            EDGE_COLOR,
        );
    }

    let radius = style.node_radius * scale;
    for (index, node) in graph.nodes.iter().enumerate() {
        let center = viewport.world_to_screen(node.position);
        surface.draw_circle(center, radius, kind_color(node.kind));
        if hovered == Some(index) {
            surface.stroke_circle(center, radius + 2.0, 2.0, HOVER_COLOR);
        }
    }

    let font_size = style.label_font_size * scale;
    for node in &graph.nodes {
        surface.draw_text(
            viewport.world_to_screen(node.position),
            &short_label(&node.id, style.label_max_chars),
            font_size,
            LABEL_COLOR,
        );
    }
}
