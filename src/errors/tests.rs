//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn position(offset: u32) -> Position {
    Position(offset, Rc::new("test.dsp".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        position(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: ")".to_string(),
            found: "identifier".to_string(),
        },
        position(42),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.dsp");
}

#[test]
fn test_syntax_error_message_is_verbatim() {
    let error = Error::syntax("Not all paths return a value", position(0));

    assert_eq!(error.get_error_name(), "SyntaxError");
    assert_eq!(error.message(), "Not all paths return a value");
    assert_eq!(error.to_string(), "test.dsp:0: Not all paths return a value");
}

#[test]
fn test_missing_semicolon_tip() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: ";".to_string(),
            found: "}".to_string(),
        },
        position(3),
    );

    assert_eq!(
        error.get_tip().to_string(),
        "Unexpected token: `}`, did you miss a semicolon?"
    );
}

#[test]
fn test_unexpected_token_tip() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: ":".to_string(),
            found: ")".to_string(),
        },
        position(3),
    );

    assert_eq!(error.get_tip().to_string(), "Expected `:`, found `)`");
    assert_eq!(error.message(), "expected `:`, found \")\"");
}

#[test]
fn test_symbol_errors() {
    let unknown = Error::new(
        ErrorImpl::UnknownSymbol {
            symbol: "gain".to_string(),
        },
        position(0),
    );
    let defined = Error::new(
        ErrorImpl::SymbolAlreadyDefined {
            symbol: "gain".to_string(),
        },
        position(0),
    );
    let constant = Error::new(
        ErrorImpl::ConstAssignment {
            symbol: "gain".to_string(),
        },
        position(0),
    );

    assert_eq!(unknown.get_error_name(), "UnknownSymbol");
    assert_eq!(unknown.message(), "can't resolve symbol \"gain\"");
    assert_eq!(defined.get_error_name(), "SymbolAlreadyDefined");
    assert_eq!(constant.get_error_name(), "ConstAssignment");
    assert_eq!(constant.get_tip().to_string(), "Symbol `gain` is const");
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999".to_string(),
        },
        position(0),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
}
