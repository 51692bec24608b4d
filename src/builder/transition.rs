//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Event, State};
use crate::machine::{Handler, HandlerError, Transition};
use std::sync::Arc;

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<S: State, E: Event> {
    from: Option<S>,
    event: Option<E>,
    to: Option<S>,
    handler: Option<Handler<S, E>>,
}

impl<S: State, E: Event> TransitionBuilder<S, E> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            event: None,
            to: None,
            handler: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: E) -> Self {
        self.event = Some(event);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Set the handler (required).
    pub fn handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&S, &E, &S) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Use a handler that always succeeds.
    pub fn succeeds(self) -> Self {
        self.handler(|_, _, _| Ok(()))
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S, E>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;
        let handler = self.handler.ok_or(BuildError::MissingHandler)?;

        Ok(Transition {
            from,
            event,
            to,
            handler,
        })
    }
}

impl<S: State, E: Event> Default for TransitionBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
