//! Error types and error handling for the front end.
//!
//! This module defines the error type shared by the lexer and the parser.
//! It includes:
//!
//! - An error structure with source position and offending token
//! - Specific error variants for lexical, structural, scope and type failures
//! - Error names and suggestions for diagnostics

pub mod errors;
