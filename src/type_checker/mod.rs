//! Type checking and scope tracking.
//!
//! The parser calls into this module while it builds the tree, so every node
//! is checked at the moment it is created. There is no separate pass. It holds:
//!
//! - The `Environment`: declared variables by name, one flat scope per parse
//! - The operator typing rules for binary and prefix expressions
//! - The assignment rule (value type must equal the declared type)

pub mod environment;
pub mod type_checker;

#[cfg(test)]
mod tests;
