//! Core label types and the transition lookup key.
//!
//! This module contains the vocabulary every other module speaks:
//! - States via the `State` trait
//! - Events via the `Event` trait
//! - The `(from, event)` composite key

mod event;
mod key;
mod state;

pub use event::Event;
pub use key::TransitionKey;
pub use state::State;
