use eframe::egui::{self, RichText, Ui};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::graph::NodeKind;
use crate::render::kind_color;

use super::super::ViewModel;

fn fuzzy_match_score(matcher: &SkimMatcherV2, text: &str, query: &str) -> Option<i64> {
    matcher
        .fuzzy_match(text, query)
        .or_else(|| matcher.fuzzy_match(&text.to_lowercase(), &query.to_lowercase()))
}

/// Ids of `kind` matching `query`, best match first; all of them in input order when `query` is blank.
pub(in crate::app) fn filter_entities<'a>(
    ids: impl Iterator<Item = (&'a str, NodeKind)>,
    kind: NodeKind,
    query: &str,
) -> Vec<&'a str> {
    let query = query.trim();
    let of_kind = ids.filter(|(_, node_kind)| *node_kind == kind);

    if query.is_empty() {
        return of_kind.map(|(id, _)| id).collect();
    }

    let matcher = SkimMatcherV2::default();
    let mut scored = of_kind
        .filter_map(|(id, _)| fuzzy_match_score(&matcher, id, query).map(|score| (score, id)))
        .collect::<Vec<_>>();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, id)| id).collect()
}

impl ViewModel {
    pub(in crate::app) fn draw_entities(&mut self, ui: &mut Ui) {
        ui.heading("Entities");
        ui.add_space(4.0);
        ui.text_edit_singleline(&mut self.entity_filter)
            .on_hover_text("Fuzzy filter; click an entity to center the view on it.");
        ui.separator();

        let Some(session) = self.session.as_mut() else {
            ui.label("Waiting for layout...");
            return;
        };

        let mut focus = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            let graph = session.graph();
            for (kind, count) in graph.kind_counts() {
                let matches = filter_entities(
                    graph.nodes.iter().map(|node| (node.id.as_str(), node.kind)),
                    kind,
                    &self.entity_filter,
                );
                ui.label(
                    RichText::new(format!("{} ({count})", kind.label()))
                        .strong()
                        .color(kind_color(kind)),
                );
                for id in matches {
                    if ui.selectable_label(false, id).clicked() {
                        focus = Some(id.to_owned());
                    }
                }
                ui.add_space(6.0);
            }
        });

        if let Some(id) = focus {
            session.focus_node(&id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTITIES: &[(&str, NodeKind)] = &[
        ("Geoffrey Hinton", NodeKind::Person),
        ("Google", NodeKind::Org),
        ("Elon Musk", NodeKind::Person),
        ("Mark Zuckerberg", NodeKind::Person),
    ];

    #[test]
    fn test_blank_query_keeps_kind_in_order() {
        let ids = filter_entities(ENTITIES.iter().copied(), NodeKind::Person, "  ");
        assert_eq!(ids, vec!["Geoffrey Hinton", "Elon Musk", "Mark Zuckerberg"]);
    }

    #[test]
    fn test_fuzzy_query_filters() {
        let ids = filter_entities(ENTITIES.iter().copied(), NodeKind::Person, "musk");
        assert_eq!(ids, vec!["Elon Musk"]);

        let orgs = filter_entities(ENTITIES.iter().copied(), NodeKind::Org, "zzz");
        assert!(orgs.is_empty());
    }
}
