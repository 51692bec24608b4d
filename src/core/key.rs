//! Composite lookup key for the transition table.

use super::event::Event;
use super::state::State;
use std::fmt;

/// The `(from, event)` pair identifying one registered transition.
///
/// A table holds at most one transition per key. Equality and hashing are
/// structural; the derived ordering compares `from` first, then `event`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionKey<S, E> {
    pub from: S,
    pub event: E,
}

impl<S: State, E: Event> TransitionKey<S, E> {
    pub fn new(from: S, event: E) -> Self {
        Self { from, event }
    }
}

impl<S: State, E: Event> fmt::Display for TransitionKey<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.from.name(), self.event.name())
    }
}
