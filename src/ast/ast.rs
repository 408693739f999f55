use std::fmt::Display;

use crate::Span;

use super::{
    expressions::{BinaryExpr, BooleanExpr, GroupExpr, NumberExpr, PrefixExpr, StringExpr, SymbolExpr},
    statements::{AssignmentStmt, VarDeclStmt},
    types::Type,
};

/// Node Trait
///
/// Implemented by every AST node. The type is resolved while the node is built
/// and never recomputed.
pub trait Node: Display {
    /// Returns the resolved type of the node.
    fn get_type(&self) -> Type;
    /// Returns the span of the node.
    fn get_span(&self) -> &Span;
}

/// A declared variable.
///
/// Owned by its declaration; reads and assignments hold shared references to
/// the same record rather than copies.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub ty: Type,
}

impl Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Statements
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
    Assignment(AssignmentStmt),
}

impl Node for Stmt {
    fn get_type(&self) -> Type {
        match self {
            Stmt::VarDecl(stmt) => stmt.get_type(),
            Stmt::Assignment(stmt) => stmt.get_type(),
        }
    }
    fn get_span(&self) -> &Span {
        match self {
            Stmt::VarDecl(stmt) => stmt.get_span(),
            Stmt::Assignment(stmt) => stmt.get_span(),
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::VarDecl(stmt) => write!(f, "{}", stmt),
            Stmt::Assignment(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    String(StringExpr),
    Boolean(BooleanExpr),
    Symbol(SymbolExpr),
    Binary(BinaryExpr),
    Prefix(PrefixExpr),
    Group(GroupExpr),
}

impl Expr {
    fn as_node(&self) -> &dyn Node {
        match self {
            Expr::Number(expr) => expr,
            Expr::String(expr) => expr,
            Expr::Boolean(expr) => expr,
            Expr::Symbol(expr) => expr,
            Expr::Binary(expr) => expr,
            Expr::Prefix(expr) => expr,
            Expr::Group(expr) => expr,
        }
    }
}

impl Node for Expr {
    fn get_type(&self) -> Type {
        self.as_node().get_type()
    }
    fn get_span(&self) -> &Span {
        self.as_node().get_span()
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_node())
    }
}
