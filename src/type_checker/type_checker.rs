use crate::{
    ast::{
        ast::{Expr, Node, Variable},
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

fn require(operator: &Token, expected: &[Type], received: Type) -> Result<(), Error> {
    if expected.contains(&received) {
        return Ok(());
    }

    let expected = expected
        .iter()
        .map(|ty| ty.to_string())
        .collect::<Vec<String>>()
        .join(" or ");

    Err(Error::at_token(
        ErrorImpl::OperatorTypeError {
            operator: operator.kind.repr(),
            expected,
            received,
        },
        operator,
    ))
}

/// Checks the operands of a binary expression before it is folded.
///
/// Both sides must have the same type, and that type must be one the operator
/// accepts:
///
/// | operator              | operands          |
/// |-----------------------|-------------------|
/// | `-` `*` `/`           | num               |
/// | `and` `or`            | bool              |
/// | `+` `<` `>` `<=` `>=` | num or string     |
/// | `==` `!=`             | any               |
pub fn check_binary_expr(left: &Expr, operator: &Token, right: &Expr) -> Result<(), Error> {
    let left_type = left.get_type();
    let right_type = right.get_type();

    if left_type != right_type {
        return Err(Error::at_token(
            ErrorImpl::TypesNotEqual {
                operator: operator.kind.repr(),
                left: left_type,
                right: right_type,
            },
            operator,
        ));
    }

    match operator.kind {
        TokenKind::Dash | TokenKind::Star | TokenKind::Slash => {
            require(operator, &[Type::Num], left_type)
        }
        TokenKind::And | TokenKind::Or => require(operator, &[Type::Bool], left_type),
        TokenKind::Plus
        | TokenKind::Less
        | TokenKind::Greater
        | TokenKind::LessEquals
        | TokenKind::GreaterEquals => require(operator, &[Type::Num, Type::String], left_type),
        TokenKind::Equals | TokenKind::NotEquals => Ok(()),
        _ => Err(Error::at_token(
            ErrorImpl::InvalidOperator {
                operator: operator.kind.repr(),
            },
            operator,
        )),
    }
}

/// Checks the operand of `-` (num) or `!` (bool).
pub fn check_prefix_expr(operator: &Token, right: &Expr) -> Result<(), Error> {
    match operator.kind {
        TokenKind::Dash => require(operator, &[Type::Num], right.get_type()),
        TokenKind::Not => require(operator, &[Type::Bool], right.get_type()),
        _ => Err(Error::at_token(
            ErrorImpl::InvalidOperator {
                operator: operator.kind.repr(),
            },
            operator,
        )),
    }
}

/// The assigned value must have exactly the declared type.
pub fn check_assignment(target: &Variable, value: &Expr, token: &Token) -> Result<(), Error> {
    let received = value.get_type();

    if target.ty != received {
        return Err(Error::at_token(
            ErrorImpl::TypeMatchError {
                expected: target.ty,
                received,
            },
            token,
        ));
    }

    Ok(())
}
