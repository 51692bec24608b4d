//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and macros for declaring labels
//! and transition tables with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Event, State};
use crate::machine::Transition;

/// Create a transition whose handler always succeeds.
///
/// # Example
///
/// ```
/// use statechart_table::builder::simple_transition;
/// use statechart_table::{event_enum, state_enum};
///
/// state_enum! {
///     enum Light {
///         Red,
///         Green,
///     }
/// }
///
/// event_enum! {
///     enum Timer {
///         Elapsed,
///     }
/// }
///
/// let transition = simple_transition(Light::Red, Timer::Elapsed, Light::Green);
/// assert_eq!(transition.to, Light::Green);
/// ```
pub fn simple_transition<S: State, E: Event>(from: S, event: E, to: S) -> Transition<S, E> {
    Transition::plain(from, event, to)
}
