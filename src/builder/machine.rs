//! Builder for constructing validated machines.

use crate::builder::error::BuildError;
use crate::core::{Node, Symbol};
use crate::machine::MealyMachine;
use std::collections::HashSet;
use std::marker::PhantomData;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for constructing machines with a fluent API.
///
/// Unlike [`MealyMachine::new`], `build` checks the definition eagerly: the
/// initial state must have a node and node names must be unique. Every
/// problem is collected before failing.
pub struct MachineBuilder<I: Symbol, K> {
    initial: Option<String>,
    nodes: Vec<Node<I>>,
    _phantom: PhantomData<K>,
}

impl<I: Symbol, K> MachineBuilder<I, K> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            nodes: Vec::new(),
            _phantom: PhantomData,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Add a node.
    pub fn node(mut self, node: Node<I>) -> Self {
        self.nodes.push(node);
        self
    }

    /// Add multiple nodes at once.
    pub fn nodes(mut self, nodes: impl IntoIterator<Item = Node<I>>) -> Self {
        self.nodes.extend(nodes);
        self
    }

    /// Add a node from its name, transition table and output table.
    pub fn define_node<T, O>(
        self,
        name: impl Into<String>,
        transitions: impl IntoIterator<Item = (I, T)>,
        outputs: impl IntoIterator<Item = (I, O)>,
    ) -> Self
    where
        T: Into<String>,
        O: Into<String>,
    {
        self.node(Node::from_tables(name, transitions, outputs))
    }

    /// Check the definition, accumulating all problems.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<BuildError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<BuildError>>> = Vec::new();

        match &self.initial {
            None => checks.push(Validation::fail(BuildError::MissingInitialState)),
            Some(initial) if !self.nodes.iter().any(|n| n.name() == initial) => {
                checks.push(Validation::fail(BuildError::UnknownInitialState(
                    initial.clone(),
                )));
            }
            Some(_) => {}
        }

        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.name()) && reported.insert(node.name()) {
                checks.push(Validation::fail(BuildError::DuplicateNode(
                    node.name().to_string(),
                )));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the machine.
    /// Returns an error describing every problem found.
    pub fn build(self) -> Result<MealyMachine<I, K>, BuildError> {
        if let Validation::Failure(errors) = self.validate() {
            return Err(BuildError::from_problems(errors.iter().cloned().collect()));
        }

        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let mut machine = MealyMachine::new(initial);
        for node in self.nodes {
            machine.add_node(node);
        }

        Ok(machine)
    }
}

impl<I: Symbol, K> Default for MachineBuilder<I, K> {
    fn default() -> Self {
        Self::new()
    }
}
