use std::fmt::Display;

use thiserror::Error;

use crate::{
    ast::types::Type,
    lexer::tokens::{Token, TokenKind},
    Position,
};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    token: Option<Token>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
            token: None,
        }
    }

    /// Creates an error located at `token`, which is kept for reporting.
    pub fn at_token(error_impl: ErrorImpl, token: &Token) -> Self {
        Error {
            internal_error: error_impl,
            position: token.span.start.clone(),
            token: Some(token.clone()),
        }
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    /// The token parsing stopped at. Lexical errors have none.
    pub fn get_token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::ExpectedStatementEnd => "ExpectedStatementEnd",
            ErrorImpl::InvalidOperand => "InvalidOperand",
            ErrorImpl::InvalidOperator { .. } => "InvalidOperator",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnknownType { .. } => "UnknownType",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::TypeMatchError { .. } => "TypeMatchError",
            ErrorImpl::TypesNotEqual { .. } => "TypesNotEqual",
            ErrorImpl::OperatorTypeError { .. } => "OperatorTypeError",
            ErrorImpl::NotImplemented { .. } => "NotImplemented",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "String literals must be closed with `\"` on the same line",
            )),
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { expected, received } => ErrorTip::Suggestion(format!(
                "Expected `{}`, found `{}`",
                expected.repr(),
                received.repr()
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::ExpectedStatementEnd => ErrorTip::Suggestion(String::from(
                "Statements end at a newline or a comment, did you forget an operator?",
            )),
            ErrorImpl::InvalidOperand => ErrorTip::Suggestion(String::from(
                "Expected a literal, a variable or `(`",
            )),
            ErrorImpl::InvalidOperator { operator } => {
                ErrorTip::Suggestion(format!("`{}` cannot be used here", operator))
            }
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::UnknownType { type_ } => ErrorTip::Suggestion(format!(
                "Unknown type `{}`, expected `num`, `string` or `bool`",
                type_
            )),
            ErrorImpl::VariableAlreadyDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` already declared", variable))
            }
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::TypeMatchError { expected, received } => ErrorTip::Suggestion(format!(
                "Expected type `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::TypesNotEqual {
                operator,
                left,
                right,
            } => ErrorTip::Suggestion(format!(
                "Both sides of `{}` must have the same type, found `{}` and `{}`",
                operator, left, right
            )),
            ErrorImpl::OperatorTypeError {
                operator,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "`{}` expects {}, received `{}`",
                operator, expected, received
            )),
            ErrorImpl::NotImplemented { feature } => ErrorTip::Suggestion(format!(
                "`{}` statements are recognised but not yet supported",
                feature
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expressions may nest at most {} parentheses or prefix operators deep, split it into several assignments",
                limit
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.token {
            Some(token) => write!(f, "{}: token: {}", self.internal_error, token),
            None => write!(f, "{}", self.internal_error),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unterminated string")]
    UnterminatedString,
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("token: want: {expected}, got: {received}")]
    UnexpectedToken {
        expected: TokenKind,
        received: TokenKind,
    },
    #[error("unexpected token ({message}): {token}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("expected end of statement")]
    ExpectedStatementEnd,
    #[error("cannot parse operand")]
    InvalidOperand,
    #[error("invalid operator {operator}")]
    InvalidOperator { operator: String },
    #[error("invalid num: {token}")]
    NumberParseError { token: String },
    #[error("unknown type {type_}")]
    UnknownType { type_: String },
    #[error("redeclaration {variable}")]
    VariableAlreadyDeclared { variable: String },
    #[error("undeclared {variable}")]
    VariableNotDeclared { variable: String },
    #[error("types do not match: expected {expected}, received {received}")]
    TypeMatchError { expected: Type, received: Type },
    #[error("op: {operator}. types not equal: {left} != {right}")]
    TypesNotEqual {
        operator: String,
        left: Type,
        right: Type,
    },
    #[error("want: {expected}, got: {received} for {operator} operator")]
    OperatorTypeError {
        operator: String,
        expected: String,
        received: Type,
    },
    #[error("{feature} statements are not implemented")]
    NotImplemented { feature: String },
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
