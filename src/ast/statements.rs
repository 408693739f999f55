use std::{
    fmt::Display,
    rc::Rc,
    slice::Iter,
};

use crate::Span;

use super::{
    ast::{Expr, Node, Stmt, Variable},
    types::Type,
};

/// The root of a parsed source: statements in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Node for Program {
    fn get_type(&self) -> Type {
        Type::None
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "PROG {{")?;
        for stmt in self.iter() {
            writeln!(f, "\t{}", stmt)?;
        }
        write!(f, "}}")
    }
}

/// `name:type`. Owns the variable record.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub variable: Rc<Variable>,
    pub span: Span,
}

impl Node for VarDeclStmt {
    fn get_type(&self) -> Type {
        self.variable.ty
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for VarDeclStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DECL   {}:{}", self.variable.name, self.variable.ty)
    }
}

/// `name = value`. `target` is the record created by the declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub target: Rc<Variable>,
    pub value: Expr,
    pub span: Span,
}

impl Node for AssignmentStmt {
    fn get_type(&self) -> Type {
        self.target.ty
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for AssignmentStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ASSIGN {} = {}", self.target, self.value)
    }
}
