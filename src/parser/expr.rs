use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BinaryExpr, BooleanExpr, GroupExpr, NumberExpr, PrefixExpr, StringExpr, SymbolExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    type_checker::type_checker::{check_binary_expr, check_prefix_expr},
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

/// Parses an expression whose operators all bind tighter than `bp`.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(handler) => *handler,
        None => {
            return Err(Error::at_token(
                ErrorImpl::InvalidOperand,
                parser.current_token(),
            ))
        }
    };

    let mut left = nud(parser)?;

    // While the current token is an operator binding tighter than bp, fold it into lhs
    while let Some(operator_bp) = parser.get_bp_lookup().get(&parser.current_token_kind()).copied() {
        if operator_bp <= bp {
            break;
        }

        let led = match parser.get_led_lookup().get(&parser.current_token_kind()) {
            Some(handler) => *handler,
            None => {
                return Err(Error::at_token(
                    ErrorImpl::InvalidOperator {
                        operator: parser.current_token_kind().repr(),
                    },
                    parser.current_token(),
                ))
            }
        };

        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.advance().clone();
            let value = token.value.parse::<f64>().map_err(|_| {
                Error::at_token(
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                    &token,
                )
            })?;

            Ok(Expr::Number(NumberExpr {
                value,
                span: token.span,
            }))
        }
        TokenKind::String => {
            let token = parser.advance().clone();
            Ok(Expr::String(StringExpr {
                value: token.value,
                span: token.span,
            }))
        }
        TokenKind::True | TokenKind::False => {
            let token = parser.advance().clone();
            Ok(Expr::Boolean(BooleanExpr {
                value: token.kind == TokenKind::True,
                span: token.span,
            }))
        }
        TokenKind::Identifier => {
            let token = parser.current_token().clone();
            let variable = parser.get_environment().get_variable(&token.value, &token)?;
            parser.advance();

            Ok(Expr::Symbol(SymbolExpr {
                variable,
                span: token.span,
            }))
        }
        _ => Err(Error::at_token(
            ErrorImpl::InvalidOperand,
            parser.current_token(),
        )),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();

    let right = parse_expr(parser, bp)?;
    check_binary_expr(&left, &operator_token, &right)?;

    Ok(Expr::Binary(BinaryExpr::new(left, operator_token.kind, right)))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.enter_nested()?;
    let operator_token = parser.advance().clone();

    let rhs = parse_expr(parser, BindingPower::Unary)?;
    parser.exit_nested();
    check_prefix_expr(&operator_token, &rhs)?;

    Ok(Expr::Prefix(PrefixExpr::new(operator_token.kind, &operator_token.span, rhs)))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.enter_nested()?;
    let open = parser.advance().clone();
    let expr = parse_expr(parser, BindingPower::Default)?;
    let close = parser.expect(TokenKind::CloseParen)?;
    parser.exit_nested();

    Ok(Expr::Group(GroupExpr {
        expr: Box::new(expr),
        span: Span {
            start: open.span.start,
            end: close.span.end,
        },
    }))
}
