use eframe::egui::{self, Align, Context, Layout};

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn show(
        &mut self,
        ctx: &Context,
        source: &str,
        reload_requested: &mut bool,
        is_loading: bool,
    ) {
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("kgraph");
                    ui.separator();
                    ui.label(format!("source: {source}"));
                    ui.label(format!("entities: {}", self.spec.nodes.len()));
                    ui.separator();

                    let has_session = self.session.is_some();
                    ui.add_enabled_ui(has_session, |ui| self.draw_view_buttons(ui));

                    if ui
                        .button("Re-layout")
                        .on_hover_text("Scatter the nodes again and run a fresh settle pass.")
                        .clicked()
                    {
                        self.relayout();
                    }

                    let reload_button = ui.add_enabled(!is_loading, egui::Button::new("Reload"));
                    if reload_button.clicked() {
                        *reload_requested = true;
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if let Some(status) = self.status_text() {
                            ui.label(status);
                        }
                    });
                });
            });

        egui::SidePanel::left("entities")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| self.draw_entities(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                if is_loading {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Reloading graph...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                } else {
                    self.draw_graph(ui);
                }
            });
    }

    fn draw_view_buttons(&mut self, ui: &mut egui::Ui) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        if ui.button("Zoom in").clicked() {
            session.zoom_in();
        }
        if ui.button("Zoom out").clicked() {
            session.zoom_out();
        }
        if ui.button("Reset view").clicked() {
            session.reset_view();
        }
        if ui
            .button("Re-simulate")
            .on_hover_text("Run another settle pass from the current positions.")
            .clicked()
        {
            session.resimulate();
        }
    }

    fn status_text(&self) -> Option<String> {
        let session = self.session.as_ref()?;
        let graph = session.graph();
        let mut text = format!(
            "{} nodes / {} edges  |  zoom {:.0}%",
            graph.nodes.len(),
            graph.edges.len(),
            session.viewport().scale() * 100.0
        );
        if session.is_settling() {
            let (completed, total) = session.settle_progress();
            text.push_str(&format!("  |  settling {completed}/{total}"));
        }
        Some(text)
    }
}
