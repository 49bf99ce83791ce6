//! Sequence Detector
//!
//! This example recognises the bit pattern "11010" in a stream, including
//! overlapping occurrences, and reports where each match completes.
//!
//! Key concepts:
//! - Builder-based construction with eager validation
//! - Transitions without output (only a completed match emits)
//! - Bare symbol sequences and the visited-state path
//!
//! Run with: cargo run --example sequence_detector

use mealy::{MachineBuilder, MealyMachine, Node};

fn main() {
    println!("=== Sequence Detector (11010) ===\n");

    let mut fsm: MealyMachine<i32, ()> = MachineBuilder::new()
        .initial("S")
        .nodes([
            Node::new("S").with_transition(1, "S1").with_transition(0, "S"),
            Node::new("S1").with_transition(1, "S11").with_transition(0, "S"),
            Node::new("S11").with_transition(1, "S11").with_transition(0, "S110"),
            Node::new("S110").with_transition(1, "S1101").with_transition(0, "S"),
            Node::new("S1101").with_transition(1, "S11").on(0, "S", "Succeed"),
        ])
        .build()
        .unwrap();

    let stream = [1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 1, 1, 0, 1, 0];
    fsm.execute_symbols(stream).unwrap();

    println!("Input:  {:?}", stream);
    println!("Path:   {}", fsm.path().join(" -> "));
    println!("Matches: {}", fsm.outputs().len());

    let path = fsm.path();
    for (position, state) in path.iter().enumerate().skip(1) {
        if *state == "S" && path[position - 1] == "S1101" {
            println!("  pattern completed at input #{}", position);
        }
    }

    println!("\n{}", fsm.table());
    println!("=== Example Complete ===");
}
