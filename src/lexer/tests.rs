//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric and string literals
//! - Operators and punctuation
//! - Newlines and comments
//! - Error cases

use super::{lexer::tokenize, tokens::TokenKind};
use crate::errors::errors::ErrorImpl;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.evy".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "if while end true false and or".to_string();
    let tokens = tokenize(source, Some("test.evy".to_string())).unwrap();

    assert_eq!(tokens.len(), 7);
    assert_eq!(tokens[0].kind, TokenKind::If);
    assert_eq!(tokens[1].kind, TokenKind::While);
    assert_eq!(tokens[2].kind, TokenKind::End);
    assert_eq!(tokens[3].kind, TokenKind::True);
    assert_eq!(tokens[4].kind, TokenKind::False);
    assert_eq!(tokens[5].kind, TokenKind::And);
    assert_eq!(tokens[6].kind, TokenKind::Or);
    assert!(tokens.iter().all(|token| token.value.is_empty()));
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase ends größe".to_string();
    let tokens = tokenize(source, Some("test.evy".to_string())).unwrap();

    let values: Vec<&str> = tokens.iter().map(|token| token.value.as_str()).collect();
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Identifier));
    assert_eq!(
        values,
        vec!["foo", "bar", "baz_123", "_underscore", "CamelCase", "ends", "größe"]
    );
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 0 007 123abc".to_string();
    let tokens = tokenize(source, Some("test.evy".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].value, "007");
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[3].value, "123");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "abc");
    assert_eq!(tokens.len(), 5);
}

#[test]
fn test_number_does_not_take_sign() {
    let tokens = tokenize("-15".to_string(), None).unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Dash);
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "15");
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" "world" "multiple words" """#.to_string();
    let tokens = tokenize(source, Some("test.evy".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].value, "world");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "multiple words");
    assert_eq!(tokens[3].kind, TokenKind::String);
    assert_eq!(tokens[3].value, "");
    assert_eq!(tokens.len(), 4);
}

#[test]
fn test_string_keeps_backslashes_verbatim() {
    let tokens = tokenize(r#""a\nb // not a comment""#.to_string(), None).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].value, r"a\nb // not a comment");
}

#[test]
fn test_tokenize_operators() {
    let source = "+ - * / == != < > <= >= = ! : ( )";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Assignment,
            TokenKind::Not,
            TokenKind::Colon,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
        ]
    );
}

#[test]
fn test_each_operator_spelling_is_one_token() {
    let cases = [
        ("+", TokenKind::Plus),
        ("-", TokenKind::Dash),
        ("*", TokenKind::Star),
        ("/", TokenKind::Slash),
        ("=", TokenKind::Assignment),
        ("==", TokenKind::Equals),
        ("!", TokenKind::Not),
        ("!=", TokenKind::NotEquals),
        ("<", TokenKind::Less),
        ("<=", TokenKind::LessEquals),
        (">", TokenKind::Greater),
        (">=", TokenKind::GreaterEquals),
        (":", TokenKind::Colon),
        ("(", TokenKind::OpenParen),
        (")", TokenKind::CloseParen),
    ];

    for (spelling, kind) in cases {
        let tokens = tokenize(spelling.to_string(), None).unwrap();
        assert_eq!(tokens.len(), 1, "spelling {:?}", spelling);
        assert_eq!(tokens[0].kind, kind, "spelling {:?}", spelling);
        assert_eq!(tokens[0].span.end.0 as usize, spelling.len());
    }
}

#[test]
fn test_operators_without_spaces() {
    assert_eq!(
        kinds("a<=b==!c"),
        vec![
            TokenKind::Identifier,
            TokenKind::LessEquals,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Not,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let source = "x = 5 // this is a comment\n//\ny".to_string();
    let tokens = tokenize(source, Some("test.evy".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Assignment);
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[3].kind, TokenKind::Comment);
    assert_eq!(tokens[3].value, " this is a comment");
    assert_eq!(tokens[4].kind, TokenKind::Newline);
    assert_eq!(tokens[5].kind, TokenKind::Comment);
    assert_eq!(tokens[5].value, "");
    assert_eq!(tokens[6].kind, TokenKind::Newline);
    assert_eq!(tokens[7].kind, TokenKind::Identifier);
    assert_eq!(tokens.len(), 8);
}

#[test]
fn test_comment_at_end_of_input() {
    let tokens = tokenize("// trailing".to_string(), None).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert_eq!(tokens[0].value, " trailing");
}

#[test]
fn test_tokenize_newlines_and_whitespace() {
    assert_eq!(
        kinds(" \t a:num \r\n\n"),
        vec![
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Newline,
        ]
    );
}

#[test]
fn test_tokenize_simple_program() {
    let source = "x:num\nx = 42".to_string();
    let tokens = tokenize(source, Some("test.evy".to_string())).unwrap();

    assert_eq!(tokens.len(), 7); // x, :, num, NL, x, =, 42
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "x");
    assert_eq!(tokens[1].kind, TokenKind::Colon);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "num");
    assert_eq!(tokens[3].kind, TokenKind::Newline);
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[5].kind, TokenKind::Assignment);
    assert_eq!(tokens[6].kind, TokenKind::Number);
    assert_eq!(tokens[6].value, "42");
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("ab = \"cd\"".to_string(), Some("test.evy".to_string())).unwrap();

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 2);
    assert_eq!(tokens[1].span.start.0, 3);
    assert_eq!(tokens[2].span.start.0, 5);
    assert_eq!(tokens[2].span.end.0, 9);
    assert_eq!(tokens[2].span.start.1.as_str(), "test.evy");
}

#[test]
fn test_empty_source() {
    assert!(kinds("").is_empty());
    assert!(kinds("   \t").is_empty());
}

#[test]
fn test_unterminated_string_at_newline() {
    let error = tokenize("a := \"unterminated\nb".to_string(), None).unwrap_err();

    assert!(matches!(error.get_error(), ErrorImpl::UnterminatedString));
    assert_eq!(error.get_position().0, 5);
}

#[test]
fn test_unterminated_string_at_end_of_input() {
    let error = tokenize("s = \"abc".to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnterminatedString");
}

#[test]
fn test_unrecognised_character() {
    let error = tokenize("x = 1 % 2".to_string(), None).unwrap_err();

    match error.get_error() {
        ErrorImpl::UnrecognisedToken { token } => assert_eq!(token, "%"),
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(error.get_position().0, 6);
}

#[test]
fn test_unrecognised_punctuation() {
    for source in ["{", "}", ";", ",", ".", "&", "|", "'", "#", "3.14"] {
        let result = tokenize(source.to_string(), None);
        assert!(result.is_err(), "source {:?} should not tokenize", source);
    }
}

#[test]
fn test_token_display() {
    let tokens = tokenize("x = \"hi\" + 1 // c".to_string(), None).unwrap();
    let rendered: Vec<String> = tokens.iter().map(|token| token.to_string()).collect();

    assert_eq!(
        rendered,
        vec![
            "Identifier (x)",
            "Assignment",
            "String (hi)",
            "Plus",
            "Number (1)",
            "Comment ( c)",
        ]
    );
}
