use eframe::egui::{self, Align2, Color32, FontId, PointerButton, Pos2, Sense, Ui, vec2};

use crate::graph::Graph;
use crate::interaction::PointerState;
use crate::render::PainterSurface;
use crate::session::GraphSession;

use super::ViewModel;

fn degree(graph: &Graph, index: usize) -> usize {
    graph
        .edges
        .iter()
        .filter(|edge| edge.source == index || edge.target == index)
        .count()
}

impl ViewModel {
    pub(in crate::app) fn draw_graph(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        let session = self.session.get_or_insert_with(|| {
            GraphSession::analyze(&self.spec, self.config.clone(), rect.size(), self.seed)
        });
        session.set_surface_size(rect.size());

        let to_local = |screen: Pos2| (screen - rect.min).to_pos2();

        if response.drag_started_by(PointerButton::Primary) {
            let press = ui
                .input(|input| input.pointer.press_origin())
                .or_else(|| response.interact_pointer_pos());
            if let Some(press) = press {
                session.pointer_down(to_local(press));
            }
        }
        if response.dragged_by(PointerButton::Primary)
            && let Some(pointer) = response.interact_pointer_pos()
        {
            session.pointer_move(to_local(pointer));
        }
        if response.drag_stopped_by(PointerButton::Primary) {
            session.pointer_up();
        }

        if response.dragged_by(PointerButton::Secondary)
            || response.dragged_by(PointerButton::Middle)
        {
            session.pan_by(response.drag_delta());
        }

        if response.hovered() {
            let scroll = ui.input(|input| input.raw_scroll_delta.y);
            if scroll.abs() > f32::EPSILON {
                let pointer = response.hover_pos().unwrap_or_else(|| rect.center());
                let zoom_factor = (1.0 + (scroll * 0.0018)).clamp(0.85, 1.15);
                session.zoom_at(zoom_factor, to_local(pointer));
            }
        }

        session.update_hover(response.hover_pos().map(to_local));
        if session.pointer_state() != PointerState::Idle {
            ui.output_mut(|output| output.cursor_icon = egui::CursorIcon::Grabbing);
        } else if session.hovered().is_some() {
            ui.output_mut(|output| output.cursor_icon = egui::CursorIcon::PointingHand);
        }

        if session.tick() {
            ui.ctx().request_repaint();
        }

        session.render(&mut PainterSurface::new(&painter, rect));

        let graph = session.graph();
        if graph.is_empty() {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "No entities to display.",
                FontId::proportional(14.0),
                Color32::from_gray(200),
            );
            return;
        }

        if let Some(index) = session.hovered() {
            let node = &graph.nodes[index];
            let panel_text = format!(
                "{}  |  {}  |  relations {}",
                node.id,
                node.kind.label(),
                degree(graph, index)
            );
            painter.text(
                rect.left_top() + vec2(10.0, 10.0),
                Align2::LEFT_TOP,
                panel_text,
                FontId::proportional(13.0),
                Color32::from_gray(240),
            );
        }
    }
}
