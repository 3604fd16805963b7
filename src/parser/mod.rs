//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive descent parser that turns a token
//! stream into statement and expression nodes. It handles:
//!
//! - Statement parsing (blocks, conditionals, loops, definitions, assignments)
//! - Expression parsing through a fixed precedence chain
//! - Function definitions and whole compilation units
//! - Finalisation of function bodies so every path ends in a return
//!
//! The first error aborts the parse; there is no recovery.

pub mod expr;
pub mod finaliser;
pub mod function;
pub mod parser;
pub mod stmt;
