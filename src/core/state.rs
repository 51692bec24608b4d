//! Core State trait for state machine states.
//!
//! States are opaque labels. The table only ever compares them for
//! equality and asks for their name when reporting or rendering.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: the current state is handed out by value
/// - `Eq` + `Hash`: states form half of the transition lookup key
/// - `Debug`: states must be debuggable for diagnostics
/// - `Send` + `Sync`: tables are shared across threads
///
/// # Example
///
/// ```rust
/// use statechart_table::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum TaskState {
///     Pending,
///     Running,
///     Complete,
/// }
///
/// impl State for TaskState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Pending => "Pending",
///             Self::Running => "Running",
///             Self::Complete => "Complete",
///         }
///     }
/// }
///
/// assert_eq!(TaskState::Running.name(), "Running");
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Get the state's label.
    ///
    /// Used for error messages, logging and every diagram format. Diagram
    /// output is ordered by this label, not by any `Ord` on the type.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self
    }
}

impl State for &'static str {
    fn name(&self) -> &str {
        self
    }
}
