//! Graphviz `digraph` description.

use super::config::RenderConfig;
use super::snapshot::Snapshot;

/// Render the snapshot as a Graphviz directed graph.
///
/// One edge statement per transition, a blank line, then one node statement
/// per state with the current state carrying the highlight color.
pub fn graphviz(snapshot: &Snapshot, config: &RenderConfig) -> String {
    let mut out = String::from("digraph fsm {\n");

    for edge in &snapshot.transitions {
        out.push_str(&format!(
            "    \"{}\" -> \"{}\" [ label = \"{}\" ];\n",
            edge.from, edge.to, edge.event
        ));
    }

    out.push('\n');

    for state in &snapshot.states {
        if *state == snapshot.current {
            out.push_str(&format!(
                "    \"{}\" [color = \"{}\"];\n",
                state, config.graphviz_highlight
            ));
        } else {
            out.push_str(&format!("    \"{}\";\n", state));
        }
    }

    out.push_str("}\n");
    out
}
