//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a sequence of tokens for parsing. It handles:
//!
//! - Tokenization of source text using anchored regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Newlines and comments, which the parser uses as statement separators
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
