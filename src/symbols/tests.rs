//! Unit tests for scope handling and symbol lookup.

use super::symbols::{GlobalScope, ScopeStack, SymbolTable};
use crate::{ast::types::TypeId, Position};

#[test]
fn test_global_scope_resolve() {
    let globals = GlobalScope::new()
        .with_symbol("buffer", TypeId::Block, false)
        .with_symbol("sampleRate", TypeId::Double, true);

    let info = globals.resolve("sampleRate").unwrap();
    assert_eq!(info.type_id, TypeId::Double);
    assert!(info.is_const);
    assert!(globals.resolve("missing").is_none());
}

#[test]
fn test_scope_paths() {
    let mut scopes = ScopeStack::new();
    assert_eq!(scopes.current_path(), "");

    scopes.push_named("process");
    scopes.push_anonymous();
    scopes.push_anonymous();
    assert_eq!(scopes.current_path(), "process.0.1");

    scopes.pop();
    scopes.push_anonymous();
    assert_eq!(scopes.current_path(), "process.0.2");
    assert_eq!(scopes.depth(), 3);
}

#[test]
fn test_program_scope_is_never_popped() {
    let mut scopes = ScopeStack::new();
    scopes.pop();
    scopes.pop();

    assert_eq!(scopes.depth(), 1);
}

#[test]
fn test_inner_scope_shadows_outer() {
    let globals = GlobalScope::new().with_symbol("x", TypeId::Double, false);
    let mut scopes = ScopeStack::new();
    scopes.push_named("f");
    scopes.push_anonymous();
    scopes
        .declare("x", TypeId::Integer, true, Position::null())
        .unwrap();

    let symbol = scopes.resolve("x", &globals).unwrap();
    assert_eq!(symbol.type_id, TypeId::Integer);
    assert_eq!(symbol.scope, "f.0");
    assert_eq!(symbol.to_string(), "f.0.x");

    scopes.pop();
    let symbol = scopes.resolve("x", &globals).unwrap();
    assert_eq!(symbol.type_id, TypeId::Double);
    assert_eq!(symbol.scope, "");
    assert_eq!(symbol.to_string(), "x");
}

#[test]
fn test_redeclaration_in_same_scope_fails() {
    let mut scopes = ScopeStack::new();
    scopes.push_named("f");
    scopes
        .declare("gain", TypeId::Float, false, Position::null())
        .unwrap();

    let error = scopes
        .declare("gain", TypeId::Float, false, Position::null())
        .unwrap_err();
    assert_eq!(error.get_error_name(), "SymbolAlreadyDefined");

    scopes.push_anonymous();
    assert!(scopes
        .declare("gain", TypeId::Float, false, Position::null())
        .is_ok());
}

#[test]
fn test_unknown_name_resolves_to_none() {
    let scopes = ScopeStack::new();

    assert!(scopes.resolve("nothing", &GlobalScope::new()).is_none());
}
