//! Thread-safe transition table.
//!
//! A [`StateMachine`] owns one current state and a map from
//! `(from, event)` to [`Transition`]. State only changes when an event
//! matches a registered key and that transition's handler succeeds.
//!
//! # Guarantees
//!
//! - At most one transition per `(from, event)` key
//! - A trigger either fully applies or leaves the state untouched
//! - All operations are serialized by a single table-wide lock

mod table;
mod transition;

pub use table::StateMachine;
pub use transition::{Handler, HandlerError, RegistrationError, Transition, TransitionError};
