use super::{EdgeSpec, GraphSpec, NodeKind, NodeSpec};

const SAMPLE_NODES: &[(&str, NodeKind)] = &[
    ("John McCarthy", NodeKind::Person),
    ("Geoffrey Hinton", NodeKind::Person),
    ("Elon Musk", NodeKind::Person),
    ("Mark Zuckerberg", NodeKind::Person),
    ("Google", NodeKind::Org),
    ("Microsoft", NodeKind::Org),
    ("OpenAI", NodeKind::Org),
    ("Tesla", NodeKind::Org),
    ("SpaceX", NodeKind::Org),
    ("Twitter", NodeKind::Org),
    ("Meta", NodeKind::Org),
    ("Taipei", NodeKind::Location),
    ("Taiwan", NodeKind::Location),
    ("Silicon Valley", NodeKind::Location),
    ("United States", NodeKind::Location),
    ("California", NodeKind::Location),
    ("Artificial intelligence", NodeKind::Concept),
    ("Deep learning", NodeKind::Concept),
    ("Machine learning", NodeKind::Concept),
    ("ChatGPT", NodeKind::Concept),
    ("Large language model", NodeKind::Concept),
];

// Sentence co-occurrence pairs.
const SAMPLE_EDGES: &[(&str, &str)] = &[
    ("John McCarthy", "Artificial intelligence"),
    ("Google", "Microsoft"),
    ("Google", "Artificial intelligence"),
    ("Microsoft", "Artificial intelligence"),
    ("Geoffrey Hinton", "Deep learning"),
    ("Geoffrey Hinton", "Machine learning"),
    ("Deep learning", "Machine learning"),
    ("OpenAI", "ChatGPT"),
    ("OpenAI", "Large language model"),
    ("ChatGPT", "Large language model"),
    ("Taipei", "Taiwan"),
    ("Silicon Valley", "United States"),
    ("Silicon Valley", "California"),
    ("United States", "California"),
    ("Elon Musk", "Tesla"),
    ("Elon Musk", "SpaceX"),
    ("Elon Musk", "Twitter"),
    ("Tesla", "SpaceX"),
    ("Tesla", "Twitter"),
    ("SpaceX", "Twitter"),
    ("Mark Zuckerberg", "Meta"),
];

/// Entities and relations of the bundled sample paragraph about AI and tech companies.
pub fn sample_graph_spec() -> GraphSpec {
    GraphSpec {
        nodes: SAMPLE_NODES
            .iter()
            .map(|&(id, kind)| NodeSpec::new(id, kind))
            .collect(),
        edges: SAMPLE_EDGES
            .iter()
            .map(|&(source, target)| EdgeSpec::new(source, target))
            .collect(),
    }
}
