//! E-commerce Order Processing
//!
//! This example drives an order through its lifecycle with a transition
//! table, then prints the resulting state diagram.
//!
//! Key concepts:
//! - Declaring every legal move up front
//! - Handlers that run as part of each transition
//! - Illegal events rejected without changing state
//! - Diagram export of the live table
//!
//! Run with: cargo run --example order_processing

use statechart_table::{event_enum, state_enum, Event, State, StateMachine, Transition};

state_enum! {
    enum OrderState {
        Pending,
        Paid,
        Refunding,
        Shipped,
        Returning,
        Canceled,
        Complete,
    }
}

event_enum! {
    enum OrderEvent {
        PaySuccess,
        ApplyRefund,
        RefuseRefund,
        RefundSuccess,
        Cancel,
        Ship,
        ApplyReturn,
        RefuseReturn,
        ReturnSuccess,
        ConfirmReceipt,
    }
}

fn logged(
    from: OrderState,
    event: OrderEvent,
    to: OrderState,
) -> Transition<OrderState, OrderEvent> {
    Transition::new(from, event, to, |from, event, to| {
        println!("  [Handler] {} -({})-> {}", from.name(), event.name(), to.name());
        Ok(())
    })
}

fn main() {
    use OrderEvent::*;
    use OrderState::*;

    println!("=== Order Processing Example ===\n");

    let machine = StateMachine::new(Pending);

    let rules = [
        (Pending, Cancel, Canceled),
        (Pending, PaySuccess, Paid),
        (Paid, Cancel, Refunding),
        (Paid, ApplyRefund, Refunding),
        (Refunding, RefundSuccess, Canceled),
        (Refunding, RefuseRefund, Paid),
        (Paid, Ship, Shipped),
        (Shipped, ApplyReturn, Returning),
        (Returning, RefuseReturn, Shipped),
        (Returning, ReturnSuccess, Refunding),
        (Shipped, ConfirmReceipt, Complete),
        (Shipped, Cancel, Returning),
        (Returning, ConfirmReceipt, Complete),
    ];

    let transitions = rules.map(|(from, event, to)| logged(from, event, to));
    if let Err(e) = machine.add_transitions(transitions) {
        println!("Registration failed: {}", e);
        return;
    }
    println!("Registered {} transitions", machine.len());
    println!("Current state: {}\n", machine.current_state().name());

    for event in [PaySuccess, Ship, Cancel] {
        println!("Trigger {}:", event.name());
        if let Err(e) = machine.trigger(&event) {
            println!("  Error: {}", e);
        }
        println!("  Current state: {}\n", machine.current_state().name());
    }

    println!("Trigger {} (not allowed from Returning):", ApplyReturn.name());
    if let Err(e) = machine.trigger(&ApplyReturn) {
        println!("  Rejected: {}", e);
    }
    println!("  Current state: {}\n", machine.current_state().name());

    println!("State diagram:\n{}", machine.view().state_diagram);

    println!("=== Example Complete ===");
}
