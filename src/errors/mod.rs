//! Error types and error handling for the compiler front end.
//!
//! This module defines the error types raised while tokenizing and parsing.
//! It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the lexer and the parser
//! - Error names and suggestions for diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
