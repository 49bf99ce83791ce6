//! Text renderings of a machine's transition graph.
//!
//! Both renderings walk nodes in registration order and, within a node,
//! transitions in table insertion order, producing one edge or row per
//! transition-table entry. A transition without output is rendered with the
//! literal marker [`ABSENT_OUTPUT`].

use crate::core::{Node, Symbol, Trajectory};
use crate::machine::MealyMachine;
use serde::Serialize;
use std::fmt;

/// Text used in place of a missing output.
pub const ABSENT_OUTPUT: &str = "None";

const TABLE_HEADER: &str = "| Current State | Input | Next State | Output |\n\
                            |---------------|-------|------------|--------|\n";

/// Visit every transition as `(state, symbol, next state, output text)`.
fn for_each_edge<I, K, F>(machine: &MealyMachine<I, K>, mut visit: F) -> fmt::Result
where
    I: Symbol,
    F: FnMut(&str, I, &str, &str) -> fmt::Result,
{
    for node in machine.nodes() {
        for (symbol, next) in node.transitions().iter() {
            let output = node.output_for(&symbol).unwrap_or(ABSENT_OUTPUT);
            visit(node.name(), symbol, next, output)?;
        }
    }
    Ok(())
}

/// Graphviz DOT description of a machine.
///
/// ```text
/// digraph MealyFSM {
///     rankdir=LR;
///     S0 -> S1 [label="1 / Output_A"];
/// }
/// ```
///
/// The closing brace is not followed by a newline.
pub struct Dot<'a, I: Symbol, K> {
    machine: &'a MealyMachine<I, K>,
}

impl<'a, I: Symbol, K> Dot<'a, I, K> {
    pub(crate) fn new(machine: &'a MealyMachine<I, K>) -> Self {
        Self { machine }
    }
}

impl<I: Symbol, K> fmt::Display for Dot<'_, I, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("digraph MealyFSM {\n    rankdir=LR;\n")?;
        for_each_edge(self.machine, |state, symbol, next, output| {
            writeln!(f, "    {state} -> {next} [label=\"{symbol} / {output}\"];")
        })?;
        f.write_str("}")
    }
}

/// Markdown table describing every transition of a machine.
pub struct Table<'a, I: Symbol, K> {
    machine: &'a MealyMachine<I, K>,
}

impl<'a, I: Symbol, K> Table<'a, I, K> {
    pub(crate) fn new(machine: &'a MealyMachine<I, K>) -> Self {
        Self { machine }
    }
}

impl<I: Symbol, K> fmt::Display for Table<'_, I, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(TABLE_HEADER)?;
        for_each_edge(self.machine, |state, symbol, next, output| {
            writeln!(f, "| {state} | {symbol} | {next} | {output} |")
        })
    }
}

/// Serializable view of a machine, used for JSON export.
#[derive(Serialize)]
#[serde(bound = "K: Serialize")]
pub struct MachineSnapshot<'a, I: Symbol, K> {
    initial_state: &'a str,
    current_state: &'a str,
    steps: usize,
    nodes: &'a [Node<I>],
    state_history: &'a Trajectory<K>,
    output_history: &'a Trajectory<K>,
}

impl<'a, I: Symbol, K> MachineSnapshot<'a, I, K> {
    pub(crate) fn new(machine: &'a MealyMachine<I, K>) -> Self {
        Self {
            initial_state: machine.initial_state(),
            current_state: machine.current_state(),
            steps: machine.steps(),
            nodes: machine.nodes(),
            state_history: machine.state_history(),
            output_history: machine.output_history(),
        }
    }
}
