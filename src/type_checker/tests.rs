//! Unit tests for the type checker.
//!
//! This module contains tests for:
//! - Variable declaration and lookup
//! - Operand rules of binary and prefix operators
//! - Assignment compatibility

use std::rc::Rc;

use crate::{
    ast::{
        ast::{Expr, Variable},
        expressions::{BooleanExpr, NumberExpr, StringExpr},
        types::Type,
    },
    errors::errors::ErrorImpl,
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{environment::Environment, type_checker::*};

fn span() -> Span {
    Span {
        start: Position(0, Rc::new("test.evy".to_string())),
        end: Position(1, Rc::new("test.evy".to_string())),
    }
}

fn token(kind: TokenKind, value: &str) -> Token {
    Token {
        kind,
        value: value.to_string(),
        span: span(),
    }
}

fn operand(ty: Type) -> Expr {
    match ty {
        Type::Num => Expr::Number(NumberExpr {
            value: 1.0,
            span: span(),
        }),
        Type::String => Expr::String(StringExpr {
            value: "a".to_string(),
            span: span(),
        }),
        Type::Bool => Expr::Boolean(BooleanExpr {
            value: true,
            span: span(),
        }),
        Type::None => panic!("no literal has type none"),
    }
}

fn variable(name: &str, ty: Type) -> Rc<Variable> {
    Rc::new(Variable {
        name: name.to_string(),
        ty,
    })
}

#[test]
fn test_declare_and_get_variable() {
    let mut env = Environment::new();
    let x = variable("x", Type::Num);

    env.declare_variable(Rc::clone(&x), &token(TokenKind::Identifier, "x"))
        .unwrap();
    let found = env
        .get_variable("x", &token(TokenKind::Identifier, "x"))
        .unwrap();

    assert!(Rc::ptr_eq(&x, &found));
}

#[test]
fn test_declare_twice_fails() {
    let mut env = Environment::new();
    let name = token(TokenKind::Identifier, "x");

    env.declare_variable(variable("x", Type::Num), &name).unwrap();
    let error = env
        .declare_variable(variable("x", Type::Bool), &name)
        .unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::VariableAlreadyDeclared {
            variable: "x".to_string()
        }
    );
    assert_eq!(env.variable_lookup["x"].ty, Type::Num);
}

#[test]
fn test_get_undeclared_variable_fails() {
    let env = Environment::default();
    let error = env
        .get_variable("y", &token(TokenKind::Identifier, "y"))
        .unwrap_err();

    assert_eq!(error.get_error_name(), "VariableNotDeclared");
}

#[test]
fn test_binary_operand_rules() {
    let cases = [
        (TokenKind::Plus, "+", [true, true, false]),
        (TokenKind::Dash, "-", [true, false, false]),
        (TokenKind::Star, "*", [true, false, false]),
        (TokenKind::Slash, "/", [true, false, false]),
        (TokenKind::Less, "<", [true, true, false]),
        (TokenKind::LessEquals, "<=", [true, true, false]),
        (TokenKind::Greater, ">", [true, true, false]),
        (TokenKind::GreaterEquals, ">=", [true, true, false]),
        (TokenKind::Equals, "==", [true, true, true]),
        (TokenKind::NotEquals, "!=", [true, true, true]),
        (TokenKind::And, "and", [false, false, true]),
        (TokenKind::Or, "or", [false, false, true]),
    ];
    let types = [Type::Num, Type::String, Type::Bool];

    for (kind, spelling, accepted) in cases {
        let operator = token(kind, "");
        for (ty, accepts) in types.iter().zip(accepted) {
            let result = check_binary_expr(&operand(*ty), &operator, &operand(*ty));
            assert_eq!(result.is_ok(), accepts, "{} with {}", spelling, ty);

            if let Err(error) = result {
                match error.get_error() {
                    ErrorImpl::OperatorTypeError {
                        operator, received, ..
                    } => {
                        assert_eq!(operator, spelling);
                        assert_eq!(received, ty);
                    }
                    other => panic!("unexpected error {:?}", other),
                }
            }
        }
    }
}

#[test]
fn test_binary_operands_must_be_equal() {
    let operator = token(TokenKind::Equals, "");
    let error = check_binary_expr(&operand(Type::Num), &operator, &operand(Type::Bool)).unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::TypesNotEqual {
            operator: "==".to_string(),
            left: Type::Num,
            right: Type::Bool
        }
    );
}

#[test]
fn test_operator_type_error_lists_accepted_types() {
    let operator = token(TokenKind::Plus, "");
    let error = check_binary_expr(&operand(Type::Bool), &operator, &operand(Type::Bool)).unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::OperatorTypeError {
            operator: "+".to_string(),
            expected: "num or string".to_string(),
            received: Type::Bool
        }
    );
}

#[test]
fn test_non_operator_token_is_rejected() {
    let operator = token(TokenKind::Colon, "");
    let error = check_binary_expr(&operand(Type::Num), &operator, &operand(Type::Num)).unwrap_err();

    assert_eq!(error.get_error_name(), "InvalidOperator");

    let error = check_prefix_expr(&token(TokenKind::Plus, ""), &operand(Type::Num)).unwrap_err();
    assert_eq!(error.get_error_name(), "InvalidOperator");
}

#[test]
fn test_prefix_operand_rules() {
    let minus = token(TokenKind::Dash, "");
    let not = token(TokenKind::Not, "");

    assert!(check_prefix_expr(&minus, &operand(Type::Num)).is_ok());
    assert!(check_prefix_expr(&minus, &operand(Type::String)).is_err());
    assert!(check_prefix_expr(&minus, &operand(Type::Bool)).is_err());

    assert!(check_prefix_expr(&not, &operand(Type::Bool)).is_ok());
    assert!(check_prefix_expr(&not, &operand(Type::Num)).is_err());
    assert!(check_prefix_expr(&not, &operand(Type::String)).is_err());
}

#[test]
fn test_assignment_requires_same_type() {
    let assign = token(TokenKind::Assignment, "");
    let target = variable("s", Type::String);

    assert!(check_assignment(&target, &operand(Type::String), &assign).is_ok());

    let error = check_assignment(&target, &operand(Type::Num), &assign).unwrap_err();
    assert_eq!(
        error.get_error(),
        &ErrorImpl::TypeMatchError {
            expected: Type::String,
            received: Type::Num
        }
    );
    assert_eq!(error.get_token().unwrap().kind, TokenKind::Assignment);
}
