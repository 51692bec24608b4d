//! Event labels that drive transitions.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for the stimuli that move a machine between states.
///
/// Like [`State`](super::State), an event is an opaque label compared by
/// value. Its [`name`](Event::name) is what appears on diagram edges.
pub trait Event: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Get the event's label.
    fn name(&self) -> &str;
}

impl Event for String {
    fn name(&self) -> &str {
        self
    }
}

impl Event for &'static str {
    fn name(&self) -> &str {
        self
    }
}
