//! Statechart Table: a thread-safe transition-table state machine
//!
//! A machine holds one current state and a table of declared transitions
//! keyed by `(from, event)`. Triggering an event runs the matching
//! transition's handler and advances the state only if the handler
//! succeeds. The table can be exported at any time as Graphviz and Mermaid
//! diagrams.
//!
//! # Core Concepts
//!
//! - **State** / **Event**: Opaque labels via the `State` and `Event` traits
//! - **Transition**: `(from, event) -> to` plus a handler that may veto it
//! - **StateMachine**: The lock-guarded table that enforces those rules
//! - **Render**: Deterministic diagram export from a snapshot of the table
//!
//! # Example
//!
//! ```rust
//! use statechart_table::{event_enum, state_enum, StateMachine, Transition};
//!
//! state_enum! {
//!     enum Order {
//!         Pending,
//!         Paid,
//!         Canceled,
//!     }
//! }
//!
//! event_enum! {
//!     enum Action {
//!         Pay,
//!         Cancel,
//!     }
//! }
//!
//! let machine = StateMachine::new(Order::Pending);
//! machine
//!     .add_transitions([
//!         Transition::plain(Order::Pending, Action::Pay, Order::Paid),
//!         Transition::plain(Order::Pending, Action::Cancel, Order::Canceled),
//!     ])
//!     .unwrap();
//!
//! machine.trigger(&Action::Pay).unwrap();
//! assert_eq!(machine.current_state(), Order::Paid);
//!
//! let diagrams = machine.view();
//! assert!(diagrams.state_diagram.starts_with("stateDiagram\n    [*] --> Paid\n"));
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod render;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder, TransitionBuilder};
pub use self::core::{Event, State, TransitionKey};
pub use machine::{
    Handler, HandlerError, RegistrationError, StateMachine, Transition, TransitionError,
};
pub use render::{Diagrams, RenderConfig, Snapshot, StartAnchor};
