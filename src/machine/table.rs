//! The transition table: current state plus registered transitions.

use crate::core::{Event, State, TransitionKey};
use crate::machine::transition::{RegistrationError, Transition, TransitionError};
use crate::render::{self, Diagrams, RenderConfig, Snapshot};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;

/// Everything guarded by the table lock.
struct Inner<S: State, E: Event> {
    current: S,
    transitions: HashMap<TransitionKey<S, E>, Transition<S, E>>,
}

/// State machine that only moves along declared transitions.
///
/// A single lock guards the current state and the transition map, so
/// registration, triggering, reads and snapshots are totally ordered.
/// Handlers run while that lock is held: a handler that calls back into
/// the same table deadlocks, and one that never returns blocks every
/// other caller.
///
/// # Example
///
/// ```rust
/// use statechart_table::{StateMachine, Transition};
///
/// let machine = StateMachine::new("Pending");
/// machine
///     .add_transitions([
///         Transition::plain("Pending", "Pay", "Paid"),
///         Transition::plain("Pending", "Cancel", "Canceled"),
///     ])
///     .unwrap();
///
/// machine.trigger(&"Pay").unwrap();
/// assert_eq!(machine.current_state(), "Paid");
/// assert!(machine.trigger(&"Cancel").unwrap_err().is_undefined());
/// ```
pub struct StateMachine<S: State, E: Event> {
    initial: S,
    inner: Mutex<Inner<S, E>>,
}

impl<S: State, E: Event> StateMachine<S, E> {
    /// Create a machine in `initial` with no transitions.
    pub fn new(initial: S) -> Self {
        Self {
            initial: initial.clone(),
            inner: Mutex::new(Inner {
                current: initial,
                transitions: HashMap::new(),
            }),
        }
    }

    /// Get the current state.
    pub fn current_state(&self) -> S {
        self.inner.lock().current.clone()
    }

    /// The state the machine was constructed with.
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// Number of registered transitions.
    pub fn len(&self) -> usize {
        self.inner.lock().transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().transitions.is_empty()
    }

    /// Register a single transition.
    pub fn add_transition(&self, transition: Transition<S, E>) -> Result<(), RegistrationError> {
        self.add_transitions(std::iter::once(transition))
    }

    /// Register transitions in order.
    ///
    /// Stops at the first duplicate `(from, event)` key. Transitions that
    /// were registered before the duplicate stay registered.
    pub fn add_transitions<I>(&self, transitions: I) -> Result<(), RegistrationError>
    where
        I: IntoIterator<Item = Transition<S, E>>,
    {
        let mut inner = self.inner.lock();

        for transition in transitions {
            let key = transition.key();
            if inner.transitions.contains_key(&key) {
                return Err(RegistrationError::Duplicate {
                    from: key.from.name().to_string(),
                    event: key.event.name().to_string(),
                });
            }

            tracing::debug!(
                from = %transition.from.name(),
                event = %transition.event.name(),
                to = %transition.to.name(),
                "Registered transition"
            );
            inner.transitions.insert(key, transition);
        }

        Ok(())
    }

    /// Check whether `event` has a transition out of the current state.
    pub fn can_trigger(&self, event: &E) -> bool {
        let inner = self.inner.lock();
        let key = TransitionKey::new(inner.current.clone(), event.clone());
        inner.transitions.contains_key(&key)
    }

    /// Fire `event` from the current state.
    ///
    /// Looks up `(current, event)`, runs the handler, and only on handler
    /// success moves to the transition's target. On any error the current
    /// state is left untouched.
    pub fn trigger(&self, event: &E) -> Result<(), TransitionError> {
        let mut inner = self.inner.lock();

        let key = TransitionKey::new(inner.current.clone(), event.clone());
        let Some(transition) = inner.transitions.get(&key) else {
            tracing::trace!(
                state = %inner.current.name(),
                event = %event.name(),
                "No transition for event"
            );
            return Err(TransitionError::Undefined {
                state: inner.current.name().to_string(),
                event: event.name().to_string(),
            });
        };

        if let Err(err) = transition.fire() {
            tracing::trace!(
                from = %transition.from.name(),
                event = %event.name(),
                to = %transition.to.name(),
                "Handler vetoed transition"
            );
            return Err(TransitionError::Handler(err));
        }

        let to = transition.to.clone();
        tracing::debug!(
            from = %inner.current.name(),
            event = %event.name(),
            to = %to.name(),
            "Transitioned"
        );
        inner.current = to;

        Ok(())
    }

    /// Copy the table into label form for rendering.
    pub fn snapshot(&self) -> Snapshot {
        let inner = self.inner.lock();
        Snapshot::from_parts(
            inner.current.name(),
            self.initial.name(),
            inner
                .transitions
                .values()
                .map(|t| (t.from.name(), t.event.name(), t.to.name())),
        )
    }

    /// Render all three diagrams with the default configuration.
    pub fn view(&self) -> Diagrams {
        self.view_with(&RenderConfig::default())
    }

    /// Render all three diagrams.
    ///
    /// The lock is only held while taking the snapshot.
    pub fn view_with(&self, config: &RenderConfig) -> Diagrams {
        render::render_all(&self.snapshot(), config)
    }
}

impl<S: State, E: Event> fmt::Debug for StateMachine<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("StateMachine")
            .field("initial", &self.initial)
            .field("current", &inner.current)
            .field("transitions", &inner.transitions.len())
            .finish()
    }
}
