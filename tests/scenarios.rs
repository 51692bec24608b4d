//! End-to-end scenarios for the transition table and its diagrams.

use statechart_table::builder::simple_transition;
use statechart_table::{
    event_enum, state_enum, HandlerError, RegistrationError, RenderConfig, StartAnchor,
    StateMachine, Transition, TransitionError,
};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

state_enum! {
    enum Order {
        Pending,
        Paid,
        Canceled,
    }
}

event_enum! {
    enum OrderEvent {
        Pay,
        Cancel,
    }
}

#[derive(Debug, thiserror::Error)]
#[error("payment gateway unavailable")]
struct GatewayDown;

#[test]
fn pay_then_cancel_is_undefined() {
    let machine = StateMachine::new(Order::Pending);
    machine
        .add_transitions([
            simple_transition(Order::Pending, OrderEvent::Pay, Order::Paid),
            simple_transition(Order::Pending, OrderEvent::Cancel, Order::Canceled),
        ])
        .unwrap();

    machine.trigger(&OrderEvent::Pay).unwrap();
    assert_eq!(machine.current_state(), Order::Paid);

    let err = machine.trigger(&OrderEvent::Cancel).unwrap_err();
    assert!(err.is_undefined());
    assert_eq!(err.to_string(), "state, event: [Paid, Cancel] undefined");
    assert_eq!(machine.current_state(), Order::Paid);
}

#[test]
fn registering_same_key_twice_fails() {
    let machine = StateMachine::new(Order::Pending);
    machine
        .add_transitions([simple_transition(Order::Pending, OrderEvent::Pay, Order::Paid)])
        .unwrap();

    let err = machine
        .add_transitions([simple_transition(Order::Pending, OrderEvent::Pay, Order::Paid)])
        .unwrap_err();

    assert_eq!(
        err,
        RegistrationError::Duplicate {
            from: "Pending".to_string(),
            event: "Pay".to_string(),
        }
    );
    assert_eq!(machine.len(), 1);
}

#[test]
fn failing_handler_error_is_returned_verbatim() {
    let machine = StateMachine::new("A");
    machine
        .add_transition(Transition::new("A", "X", "B", |_, _, _| {
            Err(GatewayDown.into())
        }))
        .unwrap();

    let err = machine.trigger(&"X").unwrap_err();

    assert!(matches!(err, TransitionError::Handler(_)));
    assert_eq!(err.to_string(), "payment gateway unavailable");
    assert!(err.into_handler_error().unwrap().is::<GatewayDown>());
    assert_eq!(machine.current_state(), "A");
}

#[test]
fn cycle_state_diagram_starts_at_current_state() {
    let machine = StateMachine::new("A");
    machine
        .add_transitions([
            Transition::plain("C", "e3", "A"),
            Transition::plain("A", "e1", "B"),
            Transition::plain("B", "e2", "C"),
        ])
        .unwrap();
    machine.trigger(&"e1").unwrap();

    let diagram = machine.view().state_diagram;
    let lines: Vec<&str> = diagram.lines().collect();

    assert_eq!(lines[0], "stateDiagram");
    assert_eq!(lines[1], "    [*] --> B");
    assert_eq!(
        &lines[2..],
        &["    A --> B: e1", "    B --> C: e2", "    C --> A: e3"]
    );
}

#[test]
fn initial_anchor_keeps_construction_state() {
    let machine = StateMachine::new("A");
    machine
        .add_transitions([Transition::plain("A", "e1", "B")])
        .unwrap();
    machine.trigger(&"e1").unwrap();

    let config = RenderConfig {
        start_anchor: StartAnchor::Initial,
        ..RenderConfig::default()
    };
    let diagrams = machine.view_with(&config);

    assert!(diagrams.state_diagram.starts_with("stateDiagram\n    [*] --> A\n"));
    // Styling still marks where the machine is now.
    assert!(diagrams.graphviz.contains("    \"B\" [color = \"red\"];\n"));
    assert!(diagrams.flowchart.ends_with("    style id1 fill:#00AA00\n"));
}

#[test]
fn all_three_formats_for_order_flow() {
    let machine = StateMachine::new(Order::Pending);
    machine
        .add_transitions([
            simple_transition(Order::Pending, OrderEvent::Pay, Order::Paid),
            simple_transition(Order::Pending, OrderEvent::Cancel, Order::Canceled),
            simple_transition(Order::Paid, OrderEvent::Cancel, Order::Canceled),
        ])
        .unwrap();

    let diagrams = machine.view();

    assert_eq!(
        diagrams.graphviz,
        concat!(
            "digraph fsm {\n",
            "    \"Paid\" -> \"Canceled\" [ label = \"Cancel\" ];\n",
            "    \"Pending\" -> \"Canceled\" [ label = \"Cancel\" ];\n",
            "    \"Pending\" -> \"Paid\" [ label = \"Pay\" ];\n",
            "\n",
            "    \"Canceled\";\n",
            "    \"Paid\";\n",
            "    \"Pending\" [color = \"red\"];\n",
            "}\n",
        )
    );
    assert_eq!(
        diagrams.flowchart,
        concat!(
            "graph LR\n",
            "    id0[Canceled]\n",
            "    id1[Paid]\n",
            "    id2[Pending]\n",
            "\n",
            "    id1 --> |Cancel| id0\n",
            "    id2 --> |Cancel| id0\n",
            "    id2 --> |Pay| id1\n",
            "\n",
            "    style id2 fill:#00AA00\n",
        )
    );
    assert_eq!(
        diagrams.state_diagram,
        concat!(
            "stateDiagram\n",
            "    [*] --> Pending\n",
            "    Paid --> Canceled: Cancel\n",
            "    Pending --> Canceled: Cancel\n",
            "    Pending --> Paid: Pay\n",
        )
    );
}

#[test]
fn render_is_stable_and_read_only() {
    let machine = StateMachine::new("A");
    machine
        .add_transitions([Transition::plain("A", "go", "B")])
        .unwrap();

    let first = machine.view();
    let second = machine.view();

    assert_eq!(first, second);
    assert_eq!(machine.current_state(), "A");
    assert_eq!(machine.len(), 1);
}

#[test]
fn empty_table_renders_frames_only() {
    let machine: StateMachine<&str, &str> = StateMachine::new("Idle");
    let diagrams = machine.view();

    assert_eq!(diagrams.graphviz, "digraph fsm {\n\n}\n");
    assert_eq!(diagrams.flowchart, "graph LR\n\n\n");
    assert_eq!(diagrams.state_diagram, "stateDiagram\n    [*] --> Idle\n");
}

fn exclusive_counter(
    handled: &Arc<AtomicUsize>,
    inside: &Arc<AtomicUsize>,
) -> impl Fn(&&'static str, &&'static str, &&'static str) -> Result<(), HandlerError> {
    let handled = Arc::clone(handled);
    let inside = Arc::clone(inside);
    move |_, _, _| {
        // No other handler may be running on this table.
        assert_eq!(inside.fetch_add(1, Ordering::SeqCst), 0);
        handled.fetch_add(1, Ordering::SeqCst);
        inside.fetch_sub(1, Ordering::SeqCst);
        Ok(())
    }
}

#[test]
fn concurrent_triggers_apply_one_at_a_time() {
    let handled = Arc::new(AtomicUsize::new(0));
    let inside = Arc::new(AtomicUsize::new(0));
    let machine = StateMachine::new("Even");
    machine
        .add_transitions([
            Transition::new("Even", "flip", "Odd", exclusive_counter(&handled, &inside)),
            Transition::new("Odd", "flip", "Even", exclusive_counter(&handled, &inside)),
        ])
        .unwrap();

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..250 {
                    machine.trigger(&"flip").unwrap();
                    let _ = machine.current_state();
                    let _ = machine.view();
                }
            });
        }
    });

    // An even number of flips lands back on Even.
    assert_eq!(handled.load(Ordering::SeqCst), 2000);
    assert_eq!(machine.current_state(), "Even");
}

state_enum! {
    enum Shared {
        Left => "X",
        Right => "X",
        Up,
        Down,
    }
}

#[test]
fn shared_labels_render_identically_every_time() {
    let outputs: HashSet<String> = (0..50)
        .map(|_| {
            let machine = StateMachine::new(Shared::Left);
            machine
                .add_transitions([
                    Transition::plain(Shared::Left, "e", Shared::Up),
                    Transition::plain(Shared::Right, "e", Shared::Down),
                ])
                .unwrap();
            let diagrams = machine.view();
            format!(
                "{}{}{}",
                diagrams.graphviz, diagrams.flowchart, diagrams.state_diagram
            )
        })
        .collect();

    assert_eq!(outputs.len(), 1);
    let output = outputs.into_iter().next().unwrap();
    assert!(output.contains("    X --> Down: e\n    X --> Up: e\n"));
    assert_eq!(output.matches("[color = \"red\"]").count(), 1);
}

const BATCH: usize = 4;

#[test]
fn readers_never_see_a_partial_batch() {
    let machine = StateMachine::new("s0".to_string());
    machine
        .add_transition(Transition::plain(
            "s0".to_string(),
            "stay".to_string(),
            "s0".to_string(),
        ))
        .unwrap();

    thread::scope(|scope| {
        scope.spawn(|| {
            for batch in 0..100 {
                let transitions = (0..BATCH).map(|i| {
                    Transition::plain(
                        format!("b{}", batch),
                        format!("e{}", i),
                        "s0".to_string(),
                    )
                });
                machine.add_transitions(transitions).unwrap();
            }
        });

        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..200 {
                    machine.trigger(&"stay".to_string()).unwrap();
                    let diagrams = machine.view();
                    let edges = diagrams.state_diagram.lines().count() - 3;
                    assert_eq!(edges % BATCH, 0);
                    assert_eq!((machine.snapshot().transitions.len() - 1) % BATCH, 0);
                }
            });
        }
    });

    assert_eq!(machine.len(), 100 * BATCH + 1);
    assert_eq!(machine.current_state(), "s0");
}

#[test]
fn snapshot_json_lists_sorted_edges() {
    let machine = StateMachine::new("B");
    machine
        .add_transitions([
            Transition::plain("B", "back", "A"),
            Transition::plain("A", "next", "B"),
        ])
        .unwrap();

    let json = machine.snapshot().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["current"], "B");
    assert_eq!(value["initial"], "B");
    assert_eq!(value["transitions"][0]["from"], "A");
    assert_eq!(value["transitions"][1]["event"], "back");
    assert_eq!(value["states"], serde_json::json!(["A", "B"]));
}
