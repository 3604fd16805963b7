use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Shorthand for a [`ErrorImpl::SyntaxError`] with a plain message.
    pub fn syntax(message: impl Into<String>, position: Position) -> Self {
        Error::new(
            ErrorImpl::SyntaxError {
                message: message.into(),
            },
            position,
        )
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::SyntaxError { .. } => "SyntaxError",
            ErrorImpl::UnknownSymbol { .. } => "UnknownSymbol",
            ErrorImpl::SymbolAlreadyDefined { .. } => "SymbolAlreadyDefined",
            ErrorImpl::ConstAssignment { .. } => "ConstAssignment",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnexpectedToken { expected, found } if expected == ";" => {
                ErrorTip::Suggestion(format!(
                    "Unexpected token: `{}`, did you miss a semicolon?",
                    found
                ))
            }
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected `{}`, found `{}`",
                expected, found
            )),
            ErrorImpl::SyntaxError { message } => ErrorTip::Suggestion(message.clone()),
            ErrorImpl::UnknownSymbol { symbol } => {
                ErrorTip::Suggestion(format!("Symbol `{}` is not declared in this scope", symbol))
            }
            ErrorImpl::SymbolAlreadyDefined { symbol } => {
                ErrorTip::Suggestion(format!("Symbol `{}` already defined in this scope", symbol))
            }
            ErrorImpl::ConstAssignment { symbol } => {
                ErrorTip::Suggestion(format!("Symbol `{}` is const", symbol))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.position, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("expected `{expected}`, found {found:?}")]
    UnexpectedToken { expected: String, found: String },
    #[error("{message}")]
    SyntaxError { message: String },
    #[error("can't resolve symbol {symbol:?}")]
    UnknownSymbol { symbol: String },
    #[error("symbol {symbol:?} already defined")]
    SymbolAlreadyDefined { symbol: String },
    #[error("can't assign to const symbol {symbol:?}")]
    ConstAssignment { symbol: String },
}
