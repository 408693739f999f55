use std::rc::Rc;

use tracing::trace;

use crate::{
    ast::{
        ast::{Stmt, Variable},
        statements::{AssignmentStmt, VarDeclStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    type_checker::type_checker::check_assignment,
    Span,
};

use super::{parser::Parser, types::parse_type};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let handler = match parser.get_stmt_lookup().get(&parser.current_token_kind()) {
        Some(handler) => *handler,
        None => {
            let token = parser.current_token();
            return Err(Error::at_token(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.to_string(),
                    message: String::from("expected a declaration or an assignment"),
                },
                token,
            ));
        }
    };

    let stmt = handler(parser)?;
    trace!(stmt = %stmt, "parsed statement");

    Ok(stmt)
}

/// `IDENT ':'` starts a declaration, `IDENT '='` an assignment.
pub fn parse_ident_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.peek_token().kind {
        TokenKind::Colon => parse_var_decl_stmt(parser),
        TokenKind::Assignment => parse_assignment_stmt(parser),
        _ => {
            let token = parser.peek_token();
            Err(Error::at_token(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.to_string(),
                    message: String::from("expected `:` or `=` after identifier"),
                },
                token,
            ))
        }
    }
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let name_token = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Colon)?;
    let ty = parse_type(parser)?;
    parser.expect_stmt_end()?;

    let variable = Rc::new(Variable {
        name: name_token.value.clone(),
        ty,
    });
    parser
        .get_environment_mut()
        .declare_variable(Rc::clone(&variable), &name_token)?;

    Ok(Stmt::VarDecl(VarDeclStmt {
        variable,
        span: Span {
            start: name_token.span.start,
            end: parser.previous_end(),
        },
    }))
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let name_token = parser.expect(TokenKind::Identifier)?;
    let target = parser
        .get_environment()
        .get_variable(&name_token.value, &name_token)?;

    let assign_token = parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser, BindingPower::Default)?;
    check_assignment(&target, &value, &assign_token)?;
    parser.expect_stmt_end()?;

    Ok(Stmt::Assignment(AssignmentStmt {
        target,
        value,
        span: Span {
            start: name_token.span.start,
            end: parser.previous_end(),
        },
    }))
}

/// `if` and `while` are reserved but have no grammar yet.
pub fn parse_unsupported_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token();
    Err(Error::at_token(
        ErrorImpl::NotImplemented {
            feature: token.kind.repr(),
        },
        token,
    ))
}
