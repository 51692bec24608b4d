//! Transition records, handlers, and the errors they produce.

use crate::core::{Event, State, TransitionKey};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Error type returned by transition handlers.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Logic run as part of a transition attempt.
///
/// Receives `(from, event, to)`. Returning `Err` vetoes the transition and
/// the machine stays where it is. Handlers run while the table lock is held
/// and must not call back into the same table.
pub type Handler<S, E> = Arc<dyn Fn(&S, &E, &S) -> Result<(), HandlerError> + Send + Sync>;

/// Errors raised while registering transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("state, event: [{from}, {event}] existed")]
    Duplicate { from: String, event: String },
}

/// Errors that can occur when triggering an event.
#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("state, event: [{state}, {event}] undefined")]
    Undefined { state: String, event: String },

    /// The handler's own error, passed through untouched.
    #[error(transparent)]
    Handler(HandlerError),
}

impl TransitionError {
    /// Check whether no transition was registered for the attempted key.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined { .. })
    }

    /// Borrow the handler's error, if the handler vetoed the transition.
    pub fn handler_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Handler(err) => Some(err.as_ref()),
            Self::Undefined { .. } => None,
        }
    }

    /// Recover the handler's error, if the handler vetoed the transition.
    pub fn into_handler_error(self) -> Option<HandlerError> {
        match self {
            Self::Handler(err) => Some(err),
            Self::Undefined { .. } => None,
        }
    }
}

/// A declared rule: in state `from`, event `event` moves the machine to
/// `to` once `handler` succeeds.
///
/// Transitions are immutable once registered. Cloning shares the handler.
pub struct Transition<S: State, E: Event> {
    pub from: S,
    pub event: E,
    pub to: S,
    pub handler: Handler<S, E>,
}

impl<S: State, E: Event> Transition<S, E> {
    pub fn new<F>(from: S, event: E, to: S, handler: F) -> Self
    where
        F: Fn(&S, &E, &S) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        Self {
            from,
            event,
            to,
            handler: Arc::new(handler),
        }
    }

    /// A transition whose handler always succeeds.
    pub fn plain(from: S, event: E, to: S) -> Self {
        Self::new(from, event, to, |_, _, _| Ok(()))
    }

    /// The lookup key this transition is registered under.
    pub fn key(&self) -> TransitionKey<S, E> {
        TransitionKey::new(self.from.clone(), self.event.clone())
    }

    /// Run the handler for this transition.
    pub(crate) fn fire(&self) -> Result<(), HandlerError> {
        (self.handler)(&self.from, &self.event, &self.to)
    }
}

impl<S: State, E: Event> Clone for Transition<S, E> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            event: self.event.clone(),
            to: self.to.clone(),
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<S: State, E: Event> fmt::Debug for Transition<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from)
            .field("event", &self.event)
            .field("to", &self.to)
            .finish_non_exhaustive()
    }
}
