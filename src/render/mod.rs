//! Diagram export for transition tables.
//!
//! Rendering works on a [`Snapshot`]: a label-level copy of the table taken
//! under its lock. The renderers themselves are pure functions of the
//! snapshot and a [`RenderConfig`], so formatting never blocks the table.
//!
//! # Formats
//!
//! - **graphviz**: `digraph` description for Graphviz tools
//! - **flowchart**: Mermaid `graph LR` with synthetic node ids
//! - **state diagram**: Mermaid `stateDiagram` using state labels directly
//!
//! All three are ordered by label, so output is byte-identical for equal
//! tables regardless of registration order.

mod config;
mod flowchart;
mod graphviz;
mod snapshot;
mod state_diagram;

pub use config::{ConfigError, RenderConfig, StartAnchor};
pub use flowchart::flowchart;
pub use graphviz::graphviz;
pub use snapshot::{Edge, Snapshot};
pub use state_diagram::state_diagram;

/// The three rendered diagrams of one snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagrams {
    pub graphviz: String,
    pub flowchart: String,
    pub state_diagram: String,
}

/// Render every format from the same snapshot.
pub fn render_all(snapshot: &Snapshot, config: &RenderConfig) -> Diagrams {
    Diagrams {
        graphviz: graphviz(snapshot, config),
        flowchart: flowchart(snapshot, config),
        state_diagram: state_diagram(snapshot, config),
    }
}
