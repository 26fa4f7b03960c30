//! Force-directed layout and interactive canvas for knowledge graphs
//! extracted from text.

pub mod app;
pub mod config;
pub mod graph;
pub mod interaction;
pub mod physics;
pub mod render;
pub mod session;
pub mod util;
pub mod viewport;

pub use config::{ConfigError, LayoutConfig};
pub use graph::{EdgeSpec, Graph, GraphSpec, NodeKind, NodeSpec};
pub use session::GraphSession;
pub use viewport::Viewport;
