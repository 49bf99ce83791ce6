//! Core Mealy machine types.
//!
//! This module contains the pure building blocks of a machine:
//! - Input alphabets via the `Symbol` trait and keyed `Input` elements
//! - `Node`, one state with its transition and output tables
//! - `Trajectory`, the append-only history of keyed values
//!
//! Nothing in this module mutates shared state; `Node::activate` is a pure
//! function of the node's tables and the input symbol.

mod node;
mod symbol;
mod table;
mod trajectory;

pub use node::{Activation, Node};
pub use symbol::{Input, Symbol};
pub use table::SymbolTable;
pub use trajectory::{Stamped, Trajectory};
