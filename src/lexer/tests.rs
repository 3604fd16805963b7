//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords, identifiers and type names
//! - Numeric literals and their decoded types
//! - Operators and punctuation
//! - Comments
//! - The token stream cursor
//! - Error cases

use super::{
    grammar::GRAMMAR,
    lexer::tokenize,
    stream::{TokenSource, TokenStream},
    tokens::TokenKind,
};
use crate::ast::types::{TypeId, VariableStorage};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.dsp".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("const if else return for auto true false"),
        vec![
            TokenKind::Const,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Return,
            TokenKind::For,
            TokenKind::Auto,
            TokenKind::True,
            TokenKind::False,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore constant".to_string();
    let tokens = tokenize(source, Some("test.dsp".to_string())).unwrap();

    for token in &tokens[..5] {
        assert_eq!(token.kind, TokenKind::Identifier);
    }
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[4].value, "constant");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_type_names_are_identifiers() {
    let tokens = tokenize("float x".to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(GRAMMAR.is_type_token(&tokens[0]), Some(TypeId::Float));
    assert_eq!(GRAMMAR.is_type_token(&tokens[1]), None);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 2.5 0.5f 3f".to_string(), None).unwrap();

    assert!(tokens[..4].iter().all(|t| t.kind == TokenKind::Literal));
    assert_eq!(tokens[0].literal_value(false).unwrap(), VariableStorage::Integer(42));
    assert_eq!(tokens[1].literal_value(false).unwrap(), VariableStorage::Double(2.5));
    assert_eq!(tokens[2].literal_value(false).unwrap(), VariableStorage::Float(0.5));
    assert_eq!(tokens[3].literal_value(false).unwrap(), VariableStorage::Float(3.0));
}

#[test]
fn test_integer_overflow_is_an_error() {
    let tokens = tokenize("99999999999".to_string(), None).unwrap();
    let error = tokens[0].literal_value(false).unwrap_err();

    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_sign_is_applied_before_range_check() {
    let tokens = tokenize("2147483648 2.5f".to_string(), None).unwrap();

    assert_eq!(tokens[0].literal_value(true).unwrap(), VariableStorage::Integer(i32::MIN));
    assert_eq!(
        tokens[0].literal_value(false).unwrap_err().get_error_name(),
        "NumberParseError"
    );
    assert_eq!(tokens[1].literal_value(true).unwrap(), VariableStorage::Float(-2.5));
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("== != ! = <= < >= > || && & ++ -- += -= *= /= + - * / %"),
        vec![
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Not,
            TokenKind::Assignment,
            TokenKind::LessEquals,
            TokenKind::Less,
            TokenKind::GreaterEquals,
            TokenKind::Greater,
            TokenKind::Or,
            TokenKind::And,
            TokenKind::Ampersand,
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
            TokenKind::PlusEquals,
            TokenKind::MinusEquals,
            TokenKind::StarEquals,
            TokenKind::SlashEquals,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_loop_header() {
    assert_eq!(
        kinds("for (auto &s : data)"),
        vec![
            TokenKind::For,
            TokenKind::OpenParen,
            TokenKind::Auto,
            TokenKind::Ampersand,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let source = "x // trailing\n/* block\ncomment */ y";

    assert_eq!(
        kinds(source),
        vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::EOF]
    );
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("  gain = 2;".to_string(), Some("test.dsp".to_string())).unwrap();

    assert_eq!(tokens[0].span.start.0, 2);
    assert_eq!(tokens[0].span.end.0, 6);
    assert_eq!(tokens[0].span.start.1.as_str(), "test.dsp");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
    assert_eq!(tokens[4].span.start.0, 11);
}

#[test]
fn test_unrecognised_token() {
    let error = tokenize("x = #;".to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_token_stream_stays_on_eof() {
    let tokens = tokenize("a".to_string(), None).unwrap();
    let mut stream = TokenStream::new(tokens);

    assert_eq!(stream.skip().kind, TokenKind::Identifier);
    assert_eq!(stream.skip().kind, TokenKind::EOF);
    assert_eq!(stream.skip().kind, TokenKind::EOF);
    assert_eq!(stream.current().kind, TokenKind::EOF);
}

#[test]
fn test_token_stream_appends_eof() {
    let mut tokens = tokenize("a b".to_string(), None).unwrap();
    tokens.pop();
    let mut stream = TokenStream::new(tokens);

    stream.skip();
    stream.skip();
    assert_eq!(stream.current().kind, TokenKind::EOF);

    let empty = TokenStream::new(vec![]);
    assert_eq!(empty.current().kind, TokenKind::EOF);
}
