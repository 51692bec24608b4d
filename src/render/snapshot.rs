//! Label-level copy of a table, ordered for deterministic rendering.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One registered transition, by label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub event: String,
    pub to: String,
}

/// Read-only view of a table at one instant.
///
/// `transitions` is sorted by `(from, event, to)` label and `states` holds
/// every label appearing as a source or target, sorted and de-duplicated.
/// Both orders are byte-wise lexicographic, independent of registration
/// order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub current: String,
    pub initial: String,
    pub transitions: Vec<Edge>,
    pub states: Vec<String>,
}

impl Snapshot {
    /// Build a snapshot from `(from, event, to)` label triples in any order.
    pub fn from_parts<'a, I>(current: &str, initial: &str, transitions: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
    {
        let mut edges: Vec<Edge> = transitions
            .into_iter()
            .map(|(from, event, to)| Edge {
                from: from.to_string(),
                event: event.to_string(),
                to: to.to_string(),
            })
            .collect();
        // Distinct states may share a label, so `to` breaks `(from, event)` ties.
        edges.sort_by(|a, b| {
            a.from
                .cmp(&b.from)
                .then_with(|| a.event.cmp(&b.event))
                .then_with(|| a.to.cmp(&b.to))
        });

        let states: BTreeSet<&str> = edges
            .iter()
            .flat_map(|e| [e.from.as_str(), e.to.as_str()])
            .collect();
        let states = states.into_iter().map(str::to_string).collect();

        Self {
            current: current.to_string(),
            initial: initial.to_string(),
            transitions: edges,
            states,
        }
    }

    /// Synthetic identifier (`id0`, `id1`, ...) for a state label, by its
    /// position in the sorted state list.
    pub fn state_id(&self, state: &str) -> Option<String> {
        self.states
            .binary_search_by(|s| s.as_str().cmp(state))
            .ok()
            .map(|i| format!("id{}", i))
    }

    /// Serialize the snapshot as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
