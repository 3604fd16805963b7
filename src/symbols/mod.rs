//! Symbol resolution for the parser.
//!
//! The symbol table proper is owned by whoever drives the parser; it is
//! reached through the [`symbols::SymbolTable`] trait. Names declared while
//! parsing a function (parameters, locals, loop variables) live in a
//! [`symbols::ScopeStack`] owned by the parser.

pub mod symbols;

#[cfg(test)]
mod tests;
