//! The Mealy machine: node registry, current-state cursor and histories.

mod error;

pub use error::MachineError;

use crate::core::{Input, Node, Stamped, Symbol, Trajectory};
use crate::render::{Dot, MachineSnapshot, Table};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, trace, warn};

/// Record of one processed input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: String,
    pub to: String,
    pub output: Option<String>,
}

/// A deterministic Mealy machine.
///
/// `I` is the input alphabet and `K` the order key carried by each input
/// (a timestamp, an index, or `()` for bare symbol sequences).
///
/// Every processed input appends exactly one `(key, next state)` entry to
/// the state history, and one `(key, output)` entry to the output history
/// when the transition produced an output. Nothing else is recorded: there is
/// no entry for the initial state and no trailing entry after a sequence.
/// Use [`MealyMachine::path`] for the initial state followed by every state
/// entered.
///
/// # Example
///
/// ```rust
/// use mealy::core::Node;
/// use mealy::MealyMachine;
///
/// let mut fsm: MealyMachine = MealyMachine::new("S0");
/// fsm.add_node(Node::new("S0").on(1, "S1", "Output_A").on(0, "S0", "Output_B"));
/// fsm.add_node(Node::new("S1").on(1, "S1", "Output_C").on(0, "S0", "Output_D"));
///
/// fsm.execute([(2, 1), (4, 0)]).unwrap();
///
/// assert_eq!(fsm.current_state(), "S0");
/// assert_eq!(fsm.state_history().pairs(), vec![(2, "S1"), (4, "S0")]);
/// assert_eq!(fsm.output_history().pairs(), vec![(2, "Output_A"), (4, "Output_D")]);
/// ```
#[derive(Clone, Debug)]
pub struct MealyMachine<I: Symbol = i32, K = i64> {
    initial: String,
    current: String,
    nodes: Vec<Node<I>>,
    index: HashMap<String, usize>,
    state_history: Trajectory<K>,
    output_history: Trajectory<K>,
    steps: usize,
}

impl<I: Symbol, K> MealyMachine<I, K> {
    /// Create a machine positioned at `initial`.
    ///
    /// The initial state does not need a registered node yet; a missing node
    /// is reported when the first input is executed.
    pub fn new(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        Self {
            current: initial.clone(),
            initial,
            nodes: Vec::new(),
            index: HashMap::new(),
            state_history: Trajectory::new(),
            output_history: Trajectory::new(),
            steps: 0,
        }
    }

    /// Register a node, replacing any node with the same name.
    ///
    /// A replaced node keeps its registration position and is returned.
    pub fn add_node(&mut self, node: Node<I>) -> Option<Node<I>> {
        let existing = self.index.get(node.name()).copied();
        match existing {
            Some(position) => {
                warn!(state = node.name(), "Replacing previously registered node");
                Some(std::mem::replace(&mut self.nodes[position], node))
            }
            None => {
                self.index.insert(node.name().to_string(), self.nodes.len());
                self.nodes.push(node);
                None
            }
        }
    }

    /// Register a node, rejecting a name that is already taken.
    pub fn try_add_node(&mut self, node: Node<I>) -> Result<(), MachineError> {
        if self.index.contains_key(node.name()) {
            return Err(MachineError::DuplicateNode(node.name().to_string()));
        }
        self.add_node(node);
        Ok(())
    }

    /// Register a node from its name, transition table and output table.
    pub fn define_node<T, O>(
        &mut self,
        name: impl Into<String>,
        transitions: impl IntoIterator<Item = (I, T)>,
        outputs: impl IntoIterator<Item = (I, O)>,
    ) -> Option<Node<I>>
    where
        T: Into<String>,
        O: Into<String>,
    {
        self.add_node(Node::from_tables(name, transitions, outputs))
    }

    pub fn node(&self, name: &str) -> Option<&Node<I>> {
        self.index.get(name).map(|&position| &self.nodes[position])
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Registered nodes in registration order.
    pub fn nodes(&self) -> &[Node<I>] {
        &self.nodes
    }

    pub fn current_state(&self) -> &str {
        &self.current
    }

    pub fn initial_state(&self) -> &str {
        &self.initial
    }

    pub fn state_history(&self) -> &Trajectory<K> {
        &self.state_history
    }

    pub fn output_history(&self) -> &Trajectory<K> {
        &self.output_history
    }

    /// Number of inputs processed over the machine's lifetime.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The initial state followed by every state entered so far.
    pub fn path(&self) -> Vec<&str> {
        std::iter::once(self.initial.as_str())
            .chain(self.state_history.values())
            .collect()
    }

    /// Outputs emitted so far, without keys.
    pub fn outputs(&self) -> Vec<&str> {
        self.output_history.values().collect()
    }

    /// Graphviz rendering of the transition graph.
    pub fn dot(&self) -> Dot<'_, I, K> {
        Dot::new(self)
    }

    /// Markdown table rendering of the transition graph.
    pub fn table(&self) -> Table<'_, I, K> {
        Table::new(self)
    }

    /// JSON snapshot of the nodes, cursor and histories.
    pub fn to_json(&self) -> serde_json::Result<String>
    where
        K: Serialize,
    {
        serde_json::to_string_pretty(&MachineSnapshot::new(self))
    }
}

impl<I: Symbol, K: Clone> MealyMachine<I, K> {
    /// Process a single input.
    ///
    /// Fails when the current state has no registered node. In that case
    /// nothing is recorded and the cursor does not move.
    pub fn step(&mut self, key: K, symbol: Option<I>) -> Result<Transition, MachineError> {
        let node = self
            .node(&self.current)
            .ok_or_else(|| MachineError::UnknownState {
                state: self.current.clone(),
                step: self.steps,
            })?;

        let activation = node.activate(symbol);
        let transition = Transition {
            from: self.current.clone(),
            to: activation.next_state.to_string(),
            output: activation.output.map(str::to_string),
        };
        trace!(
            from = %transition.from,
            to = %transition.to,
            symbol = ?symbol,
            output = ?transition.output,
            "Step"
        );

        if let Some(output) = &transition.output {
            self.output_history.record(key.clone(), output.as_str());
        }
        self.state_history.record(key, transition.to.as_str());
        self.current.clone_from(&transition.to);
        self.steps += 1;

        Ok(transition)
    }

    /// Process an ordered input sequence.
    ///
    /// Elements are `(key, symbol)` or `(key, Option<symbol>)` pairs, or
    /// [`Input`] values. Histories accumulate across calls. On failure the
    /// entries recorded before the failing element are kept.
    pub fn execute<T>(&mut self, inputs: impl IntoIterator<Item = T>) -> Result<(), MachineError>
    where
        T: Into<Input<K, I>>,
    {
        let start = self.steps;
        debug!(state = %self.current, "Executing input sequence");

        for input in inputs {
            let Input { key, symbol } = input.into();
            if let Err(err) = self.step(key, symbol) {
                warn!(error = %err, processed = self.steps - start, "Execution aborted");
                return Err(err);
            }
        }

        debug!(
            processed = self.steps - start,
            state = %self.current,
            outputs = self.output_history.len(),
            "Input sequence complete"
        );
        Ok(())
    }

    /// Last recorded state entry, if any input has been processed.
    pub fn last_state(&self) -> Option<&Stamped<K>> {
        self.state_history.last()
    }
}

impl<I: Symbol> MealyMachine<I, ()> {
    /// Process a sequence of bare symbols.
    ///
    /// History entries carry the unit key; read them with `values()`.
    pub fn execute_symbols(
        &mut self,
        symbols: impl IntoIterator<Item = I>,
    ) -> Result<(), MachineError> {
        self.execute(symbols.into_iter().map(|symbol| Input::new((), symbol)))
    }
}
