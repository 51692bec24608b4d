//! Mermaid left-to-right flow chart.

use super::config::RenderConfig;
use super::snapshot::Snapshot;

/// Render the snapshot as a Mermaid `graph LR` flow chart.
///
/// Nodes use synthetic ids (`id0`, `id1`, ...) labelled with the state name.
/// The closing `style` directive is skipped when the current state has no
/// node, i.e. it takes part in no transition.
pub fn flowchart(snapshot: &Snapshot, config: &RenderConfig) -> String {
    let mut out = String::from("graph LR\n");

    for (i, state) in snapshot.states.iter().enumerate() {
        out.push_str(&format!("    id{}[{}]\n", i, state));
    }
    out.push('\n');

    for edge in &snapshot.transitions {
        // Every edge endpoint is in `states` by construction.
        let from = snapshot.state_id(&edge.from);
        let to = snapshot.state_id(&edge.to);
        if let (Some(from), Some(to)) = (from, to) {
            out.push_str(&format!("    {} --> |{}| {}\n", from, edge.event, to));
        }
    }
    out.push('\n');

    if let Some(current) = snapshot.state_id(&snapshot.current) {
        out.push_str(&format!(
            "    style {} fill:{}\n",
            current, config.flowchart_highlight
        ));
    }

    out
}
