use std::path::Path;

use anyhow::{Context, Result};

use super::GraphSpec;

pub fn load_graph_spec(path: &Path) -> Result<GraphSpec> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read graph file {}", path.display()))?;
    parse_graph_spec(&raw).with_context(|| format!("failed to parse graph file {}", path.display()))
}

pub fn parse_graph_spec(raw: &str) -> Result<GraphSpec> {
    serde_json::from_str(raw).context("invalid graph JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeKind;

    #[test]
    fn test_parse_graph_spec() {
        let raw = r#"{
            "nodes": [
                { "id": "Geoffrey Hinton", "kind": "person" },
                { "id": "Deep learning", "kind": "concept" }
            ],
            "edges": [
                { "source": "Geoffrey Hinton", "target": "Deep learning" }
            ]
        }"#;

        let spec = parse_graph_spec(raw).unwrap();
        assert_eq!(spec.nodes.len(), 2);
        assert_eq!(spec.nodes[0].kind, NodeKind::Person);
        assert_eq!(spec.edges[0].target, "Deep learning");
    }

    #[test]
    fn test_parse_extractor_field_names() {
        let raw = r#"{
            "nodes": [
                { "name": "Google", "type": "org" },
                { "name": "Taipei", "type": "location" },
                { "name": "Mystery", "type": "event" }
            ]
        }"#;

        let spec = parse_graph_spec(raw).unwrap();
        assert_eq!(spec.nodes[0].id, "Google");
        assert_eq!(spec.nodes[0].kind, NodeKind::Org);
        assert_eq!(spec.nodes[1].kind, NodeKind::Location);
        assert_eq!(spec.nodes[2].kind, NodeKind::Other);
        assert!(spec.edges.is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_graph_spec("{ \"nodes\": 3 }").is_err());
        assert!(parse_graph_spec("not json").is_err());
    }

    #[test]
    fn test_load_missing_file_has_context() {
        let error = load_graph_spec(Path::new("/nonexistent/graph.json")).unwrap_err();
        assert!(error.to_string().contains("failed to read graph file"));
    }
}
