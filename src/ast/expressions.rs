use std::{fmt::Display, rc::Rc};

use crate::{lexer::tokens::TokenKind, Span};

use super::{
    ast::{Expr, Node, Variable},
    types::Type,
};

// LITERALS

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
    pub span: Span,
}

impl Node for NumberExpr {
    fn get_type(&self) -> Type {
        Type::Num
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for NumberExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// String Expression
/// Represents a string literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct StringExpr {
    pub value: String,
    pub span: Span,
}

impl Node for StringExpr {
    fn get_type(&self) -> Type {
        Type::String
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for StringExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.value)
    }
}

/// Boolean Expression
/// Represents `true` or `false` in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanExpr {
    pub value: bool,
    pub span: Span,
}

impl Node for BooleanExpr {
    fn get_type(&self) -> Type {
        Type::Bool
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for BooleanExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Symbol Expression
/// A read of a declared variable. Shares the declaration's record.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub variable: Rc<Variable>,
    pub span: Span,
}

impl Node for SymbolExpr {
    fn get_type(&self) -> Type {
        self.variable.ty
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for SymbolExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.variable)
    }
}

// COMPLEX

/// Binary Expression
/// Represents a binary operation between two expressions in the AST.
///
/// Operands are type checked before the node is built; see `BinaryExpr::new`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: TokenKind,
    pub right: Box<Expr>,
    pub ty: Type,
    pub span: Span,
}

impl BinaryExpr {
    /// Comparisons are `bool`, everything else keeps the operand type.
    pub fn new(left: Expr, operator: TokenKind, right: Expr) -> Self {
        let ty = if operator.is_comparison() {
            Type::Bool
        } else {
            left.get_type()
        };

        BinaryExpr {
            span: Span {
                start: left.get_span().start.clone(),
                end: right.get_span().end.clone(),
            },
            left: Box::new(left),
            operator,
            right: Box::new(right),
            ty,
        }
    }
}

impl Node for BinaryExpr {
    fn get_type(&self) -> Type {
        self.ty
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for BinaryExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator.repr(), self.right)
    }
}

/// Prefix Expression
/// Represents `-x` or `!x` in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: TokenKind,
    pub right_expr: Box<Expr>,
    pub ty: Type,
    pub span: Span,
}

impl PrefixExpr {
    pub fn new(operator: TokenKind, operator_span: &Span, right_expr: Expr) -> Self {
        PrefixExpr {
            span: Span {
                start: operator_span.start.clone(),
                end: right_expr.get_span().end.clone(),
            },
            operator,
            ty: right_expr.get_type(),
            right_expr: Box::new(right_expr),
        }
    }
}

impl Node for PrefixExpr {
    fn get_type(&self) -> Type {
        self.ty
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {})", self.operator.repr(), self.right_expr)
    }
}

/// Group Expression
/// A parenthesized expression. Same type as its child; kept so the printed
/// tree shows where the source had parentheses.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupExpr {
    pub expr: Box<Expr>,
    pub span: Span,
}

impl Node for GroupExpr {
    fn get_type(&self) -> Type {
        self.expr.get_type()
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for GroupExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expr)
    }
}
