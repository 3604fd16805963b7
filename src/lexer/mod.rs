//! Lexical analysis module for the compiler.
//!
//! This module contains everything the parser consumes tokens through:
//!
//! - The process-wide grammar table (reserved words and type names)
//! - The token model and typed literal decoding
//! - A regex driven tokenizer producing the token stream
//! - The `TokenSource` cursor the parser reads with one token of lookahead

pub mod grammar;
pub mod lexer;
pub mod stream;
pub mod tokens;

#[cfg(test)]
mod tests;
