//! Mermaid `stateDiagram` notation.

use super::config::{RenderConfig, StartAnchor};
use super::snapshot::Snapshot;

/// Render the snapshot as a Mermaid state diagram.
///
/// States appear by label. The `[*]` start edge points at the current state
/// unless the config anchors it to the initial one.
pub fn state_diagram(snapshot: &Snapshot, config: &RenderConfig) -> String {
    let start = match config.start_anchor {
        StartAnchor::Current => &snapshot.current,
        StartAnchor::Initial => &snapshot.initial,
    };

    let mut out = String::from("stateDiagram\n");
    out.push_str(&format!("    [*] --> {}\n", start));

    for edge in &snapshot.transitions {
        out.push_str(&format!("    {} --> {}: {}\n", edge.from, edge.to, edge.event));
    }

    out
}
