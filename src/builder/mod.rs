//! Builder API for validated machine construction.
//!
//! This module provides a fluent builder and the `mealy!` macro for declaring
//! machines with minimal boilerplate. Both check the definition before the
//! machine exists, rather than on the first executed input.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::MachineBuilder;
