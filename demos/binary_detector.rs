//! Binary Detector
//!
//! This example drives a two-state Mealy machine with a timestamped input
//! stream and prints the recorded histories and both text exports.
//!
//! Key concepts:
//! - Keyed input: each symbol carries an opaque order key
//! - Absent symbols self-loop without producing output
//! - DOT and Markdown rendering of the transition tables
//!
//! Run with: RUST_LOG=mealy=trace cargo run --example binary_detector

use mealy::{mealy, MealyMachine};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Binary Detector ===\n");

    let mut fsm: MealyMachine = mealy! {
        initial: "S0";
        "S0" => { 1 => "S1" / "Output_A", 0 => "S0" / "Output_B" },
        "S1" => { 1 => "S1" / "Output_C", 0 => "S0" / "Output_D" },
    }
    .unwrap();

    let inputs: Vec<(i64, Option<i32>)> =
        vec![(0, None), (2, Some(1)), (4, Some(0)), (7, Some(1)), (9, Some(0))];
    fsm.execute(inputs).unwrap();

    println!("State history:");
    for entry in fsm.state_history().entries() {
        println!("  t={:<3} {}", entry.key, entry.value);
    }

    println!("\nOutput history:");
    for entry in fsm.output_history().entries() {
        println!("  t={:<3} {}", entry.key, entry.value);
    }

    println!("\nGraphviz:\n{}\n", fsm.dot());
    println!("Transition table:\n{}", fsm.table());

    println!("=== Example Complete ===");
}
