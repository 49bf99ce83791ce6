//! Mealy: a deterministic Mealy machine simulator
//!
//! A Mealy machine is a finite-state machine whose output on each transition
//! depends on both the current state and the input symbol. This crate lets
//! you declare states with transition and output tables, feed keyed or bare
//! input sequences, and inspect the resulting state and output histories.
//!
//! # Core Concepts
//!
//! - **Node**: one state with its transition table and output table
//! - **MealyMachine**: the node registry, current-state cursor and histories
//! - **Trajectory**: append-only `(order key, value)` history
//! - **Rendering**: Graphviz DOT, Markdown table and JSON exports
//!
//! # Example
//!
//! ```rust
//! use mealy::MealyMachine;
//!
//! let mut fsm: MealyMachine = MealyMachine::new("S0");
//! fsm.define_node("S0", [(1, "S1"), (0, "S0")], [(1, "Output_A"), (0, "Output_B")]);
//! fsm.define_node("S1", [(1, "S1"), (0, "S0")], [(1, "Output_C"), (0, "Output_D")]);
//!
//! let inputs: Vec<(i64, Option<i32>)> = vec![(0, None), (2, Some(1)), (4, Some(0))];
//! fsm.execute(inputs).unwrap();
//!
//! assert_eq!(fsm.state_history().pairs(), vec![(0, "S0"), (2, "S1"), (4, "S0")]);
//! assert_eq!(fsm.output_history().pairs(), vec![(2, "Output_A"), (4, "Output_D")]);
//!
//! println!("{}", fsm.dot());
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod render;

// Re-export commonly used types
pub use crate::builder::{BuildError, MachineBuilder};
pub use crate::core::{Activation, Input, Node, Stamped, Symbol, Trajectory};
pub use crate::machine::{MachineError, MealyMachine, Transition};
