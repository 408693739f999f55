//! Types of the language.
//!
//! Every AST node resolves to one of these when it is built. `None` is the
//! type of a whole program and is never the type of an operand.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Num,
    String,
    Bool,
    None,
}

impl Type {
    /// Resolves a type name as written in a declaration.
    pub fn from_name(name: &str) -> Option<Type> {
        match name {
            "num" => Some(Type::Num),
            "string" => Some(Type::String),
            "bool" => Some(Type::Bool),
            _ => None,
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Type::Num => "num",
            Type::String => "string",
            Type::Bool => "bool",
            Type::None => "none",
        };
        write!(f, "{}", name)
    }
}
