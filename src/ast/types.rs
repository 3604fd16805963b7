//! Scalar type system for the AST.
//!
//! This module defines the types a value can have in the language and the
//! typed storage of literal values:
//!
//! - `TypeId` names the builtin types (`int`, `float`, `double`, `block`, `void`)
//! - `VariableStorage` holds an immediate value keeping its exact literal type

use std::fmt::Display;

/// Builtin types known to the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeId {
    Void,
    Integer,
    Float,
    Double,
    Block,
}

impl Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TypeId::Void => "void",
            TypeId::Integer => "int",
            TypeId::Float => "float",
            TypeId::Double => "double",
            TypeId::Block => "block",
        };
        write!(f, "{}", name)
    }
}

/// A typed scalar literal.
///
/// Each variant keeps the precision the literal was written with, so a
/// `float` literal is never widened to `double`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VariableStorage {
    Integer(i32),
    Float(f32),
    Double(f64),
}

impl Display for VariableStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariableStorage::Integer(v) => write!(f, "{}", v),
            VariableStorage::Float(v) => write!(f, "{:?}f", v),
            VariableStorage::Double(v) => write!(f, "{:?}", v),
        }
    }
}
