//! Macros for ergonomic label definitions.

/// Generate a fieldless enum implementing [`State`](crate::core::State).
///
/// Each variant is named after its identifier unless a label is given
/// with `=> "label"`.
///
/// # Example
///
/// ```
/// use statechart_table::core::State;
/// use statechart_table::state_enum;
///
/// state_enum! {
///     pub enum OrderState {
///         Pending,
///         Paid,
///         Canceled => "Cancelled",
///     }
/// }
///
/// assert_eq!(OrderState::Paid.name(), "Paid");
/// assert_eq!(OrderState::Canceled.name(), "Cancelled");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::__label!($variant $(, $label)?)),*
                }
            }
        }
    };
}

/// Generate a fieldless enum implementing [`Event`](crate::core::Event).
///
/// ```
/// use statechart_table::core::Event;
/// use statechart_table::event_enum;
///
/// event_enum! {
///     pub enum OrderEvent {
///         Pay,
///         ApplyRefund => "apply refund",
///     }
/// }
///
/// assert_eq!(OrderEvent::ApplyRefund.name(), "apply refund");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::__label!($variant $(, $label)?)),*
                }
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __label {
    ($variant:ident) => {
        stringify!($variant)
    };
    ($variant:ident, $label:literal) => {
        $label
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Event, State};

    state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete => "Done",
        }
    }

    event_enum! {
        enum TestEvent {
            Start,
            Finish => "finish up",
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "Processing");
        assert_eq!(TestState::Complete.name(), "Done");
    }

    #[test]
    fn event_enum_macro_generates_trait() {
        assert_eq!(TestEvent::Start.name(), "Start");
        assert_eq!(TestEvent::Finish.name(), "finish up");
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        assert_ne!(PublicState::A, PublicState::B);
    }

    #[test]
    fn generated_labels_drive_a_machine() {
        let machine = crate::StateMachine::new(TestState::Initial);
        machine
            .add_transition(crate::Transition::plain(
                TestState::Initial,
                TestEvent::Start,
                TestState::Processing,
            ))
            .unwrap();

        machine.trigger(&TestEvent::Start).unwrap();
        assert_eq!(machine.current_state(), TestState::Processing);
    }
}
