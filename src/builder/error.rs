//! Build errors for state machine and transition builders.

use crate::machine::RegistrationError;
use thiserror::Error;

/// Errors that can occur when building state machines and transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition event not specified. Call .on(event)")]
    MissingEvent,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Transition handler not specified. Call .handler(f) or .succeeds()")]
    MissingHandler,

    #[error(transparent)]
    Registration(#[from] RegistrationError),
}
