//! A single machine state with its transition and output tables.

use super::symbol::Symbol;
use super::table::SymbolTable;
use serde::{Deserialize, Serialize};

/// Result of activating a node with one input symbol.
///
/// `output` is `None` when the node emits nothing for the symbol, either
/// because the output table has no entry or because the symbol is unmapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activation<'a> {
    pub next_state: &'a str,
    pub output: Option<&'a str>,
}

/// One state of a Mealy machine.
///
/// A node owns two tables keyed by input symbol: the transition table
/// (symbol to next state) and the output table (symbol to output). The key
/// sets are independent; a symbol may transition without producing output.
/// An output entry for a symbol with no transition is never emitted.
///
/// # Example
///
/// ```rust
/// use mealy::core::Node;
///
/// let node = Node::new("S0")
///     .on(1, "S1", "Output_A")
///     .with_transition(0, "S0");
///
/// let step = node.activate(Some(1));
/// assert_eq!(step.next_state, "S1");
/// assert_eq!(step.output, Some("Output_A"));
///
/// let step = node.activate(Some(0));
/// assert_eq!(step.next_state, "S0");
/// assert_eq!(step.output, None);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Node<I: Symbol> {
    name: String,
    transitions: SymbolTable<I, String>,
    outputs: SymbolTable<I, String>,
}

impl<I: Symbol> Node<I> {
    /// Create a node with empty tables. Every symbol self-loops until
    /// transitions are added.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transitions: SymbolTable::new(),
            outputs: SymbolTable::new(),
        }
    }

    /// Create a node from a transition table and an output table.
    pub fn from_tables<T, O>(
        name: impl Into<String>,
        transitions: impl IntoIterator<Item = (I, T)>,
        outputs: impl IntoIterator<Item = (I, O)>,
    ) -> Self
    where
        T: Into<String>,
        O: Into<String>,
    {
        Self {
            name: name.into(),
            transitions: transitions
                .into_iter()
                .map(|(s, next)| (s, next.into()))
                .collect(),
            outputs: outputs.into_iter().map(|(s, out)| (s, out.into())).collect(),
        }
    }

    /// Add a transition without output.
    pub fn with_transition(mut self, symbol: I, next_state: impl Into<String>) -> Self {
        self.transitions.insert(symbol, next_state.into());
        self
    }

    /// Add an output entry.
    pub fn with_output(mut self, symbol: I, output: impl Into<String>) -> Self {
        self.outputs.insert(symbol, output.into());
        self
    }

    /// Add a transition together with its output.
    pub fn on(
        self,
        symbol: I,
        next_state: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        self.with_transition(symbol, next_state)
            .with_output(symbol, output)
    }

    /// Add a transition whose output may be absent.
    pub fn with_edge(
        self,
        symbol: I,
        next_state: impl Into<String>,
        output: Option<&str>,
    ) -> Self {
        let node = self.with_transition(symbol, next_state);
        match output {
            Some(output) => node.with_output(symbol, output),
            None => node,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transitions(&self) -> &SymbolTable<I, String> {
        &self.transitions
    }

    pub fn outputs(&self) -> &SymbolTable<I, String> {
        &self.outputs
    }

    /// Output for `symbol` if it is mapped in the transition table.
    pub fn output_for(&self, symbol: &I) -> Option<&str> {
        if self.transitions.contains(symbol) {
            self.outputs.get(symbol).map(String::as_str)
        } else {
            None
        }
    }

    /// Resolve one input symbol to the next state and output.
    ///
    /// Mapped symbols follow the transition table. Unmapped or absent symbols
    /// leave the machine in this node and emit nothing.
    pub fn activate(&self, symbol: Option<I>) -> Activation<'_> {
        let mapped = symbol.and_then(|s| self.transitions.get(&s).map(|next| (s, next)));
        match mapped {
            Some((symbol, next)) => Activation {
                next_state: next,
                output: self.outputs.get(&symbol).map(String::as_str),
            },
            None => Activation {
                next_state: &self.name,
                output: None,
            },
        }
    }
}
