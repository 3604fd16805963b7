use std::{collections::HashMap, fmt::Display};

use log::debug;

use crate::{
    ast::types::TypeId,
    errors::errors::{Error, ErrorImpl},
    Position,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolInfo {
    pub type_id: TypeId,
    pub is_const: bool,
}

/// A resolved name.
///
/// `scope` is the dotted path of the scope the name was declared in, empty
/// for names coming from the global symbol table.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub scope: String,
    pub name: String,
    pub type_id: TypeId,
    pub is_const: bool,
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.scope.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.scope, self.name)
        }
    }
}

/// Lookup of names declared outside the code being parsed.
pub trait SymbolTable {
    fn resolve(&self, name: &str) -> Option<SymbolInfo>;
}

/// Global symbols: host variables, buffers and builtin functions.
#[derive(Debug, Default, Clone)]
pub struct GlobalScope {
    symbols: HashMap<String, SymbolInfo>,
}

impl GlobalScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, name: &str, type_id: TypeId, is_const: bool) {
        self.symbols
            .insert(name.to_string(), SymbolInfo { type_id, is_const });
    }

    pub fn with_symbol(mut self, name: &str, type_id: TypeId, is_const: bool) -> Self {
        self.declare(name, type_id, is_const);
        self
    }
}

impl SymbolTable for GlobalScope {
    fn resolve(&self, name: &str) -> Option<SymbolInfo> {
        self.symbols.get(name).copied()
    }
}

#[derive(Debug)]
struct Scope {
    id: String,
    symbols: HashMap<String, SymbolInfo>,
}

impl Scope {
    fn new(id: String) -> Self {
        Scope {
            id,
            symbols: HashMap::new(),
        }
    }
}

/// Lexical scopes opened while parsing.
///
/// The bottom scope holds program level definitions (functions). Function
/// bodies push a named scope, statement blocks and loop bodies push
/// anonymous numbered ones.
#[derive(Debug)]
pub struct ScopeStack {
    scopes: Vec<Scope>,
    next_anonymous_id: u32,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack {
            scopes: vec![Scope::new(String::new())],
            next_anonymous_id: 0,
        }
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn push_named(&mut self, name: &str) {
        debug!("Entering scope {}", name);
        self.scopes.push(Scope::new(name.to_string()));
    }

    pub fn push_anonymous(&mut self) {
        let id = self.next_anonymous_id.to_string();
        self.next_anonymous_id += 1;
        self.scopes.push(Scope::new(id));
    }

    /// Pops the innermost scope. The program scope is never popped.
    pub fn pop(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Dotted path of the innermost scope, e.g. `process.0.3`.
    pub fn current_path(&self) -> String {
        self.path_to(self.scopes.len())
    }

    fn path_to(&self, depth: usize) -> String {
        self.scopes[1..depth]
            .iter()
            .map(|scope| scope.id.as_str())
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Declares `name` in the innermost scope.
    pub fn declare(
        &mut self,
        name: &str,
        type_id: TypeId,
        is_const: bool,
        position: Position,
    ) -> Result<Symbol, Error> {
        let scope_path = self.current_path();
        let Some(scope) = self.scopes.last_mut() else {
            return Err(Error::syntax("No scope to declare a symbol in", position));
        };

        if scope.symbols.contains_key(name) {
            return Err(Error::new(
                ErrorImpl::SymbolAlreadyDefined {
                    symbol: name.to_string(),
                },
                position,
            ));
        }

        scope
            .symbols
            .insert(name.to_string(), SymbolInfo { type_id, is_const });

        Ok(Symbol {
            scope: scope_path,
            name: name.to_string(),
            type_id,
            is_const,
        })
    }

    /// Finds `name` in the innermost scope declaring it, falling back to `globals`.
    pub fn resolve(&self, name: &str, globals: &dyn SymbolTable) -> Option<Symbol> {
        for depth in (1..=self.scopes.len()).rev() {
            if let Some(info) = self.scopes[depth - 1].symbols.get(name) {
                return Some(Symbol {
                    scope: self.path_to(depth),
                    name: name.to_string(),
                    type_id: info.type_id,
                    is_const: info.is_const,
                });
            }
        }

        globals.resolve(name).map(|info| Symbol {
            scope: String::new(),
            name: name.to_string(),
            type_id: info.type_id,
            is_const: info.is_const,
        })
    }
}
