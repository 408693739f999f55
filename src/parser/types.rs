//! Type name parsing.
//!
//! Declarations name their type with a bare identifier: `num`, `string` or
//! `bool`.

use crate::{
    ast::types::Type,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

pub fn parse_type(parser: &mut Parser) -> Result<Type, Error> {
    let current = parser.current_token();
    let error = Error::at_token(
        ErrorImpl::UnexpectedTokenDetailed {
            token: current.to_string(),
            message: String::from("expected a type name"),
        },
        current,
    );
    let token = parser.expect_error(TokenKind::Identifier, Some(error))?;

    Type::from_name(&token.value).ok_or_else(|| {
        Error::at_token(
            ErrorImpl::UnknownType {
                type_: token.value.clone(),
            },
            &token,
        )
    })
}
