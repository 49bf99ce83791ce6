//! Execution errors.

use thiserror::Error;

/// Errors that can occur while registering nodes or executing input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    /// The active state has no registered node.
    #[error("No node registered for state '{state}' (at step {step})")]
    UnknownState { state: String, step: usize },

    /// A node with this name is already registered.
    #[error("Node '{0}' is already registered")]
    DuplicateNode(String),
}
