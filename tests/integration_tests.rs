//! Integration tests for the parser front end.
//!
//! These tests drive the public pipeline the way a host does: source text is
//! tokenized, then parsed into finalised function definitions (or a lone body)
//! against a symbol table owned by the caller.

use std::rc::Rc;

use dspc::{
    ast::{
        ast::Stmt,
        statements::{BlockStmt, FunctionDefinition},
        types::TypeId,
    },
    errors::errors::{Error, ErrorImpl},
    format_error,
    lexer::lexer::tokenize,
    parser::{function::parse_body, parser::parse},
    symbols::symbols::GlobalScope,
};

const FILE: &str = "test.dsp";

fn globals() -> GlobalScope {
    GlobalScope::new()
        .with_symbol("gain", TypeId::Float, true)
        .with_symbol("sin", TypeId::Float, true)
        .with_symbol("sampleRate", TypeId::Double, true)
        .with_symbol("phase", TypeId::Float, false)
}

fn parse_program(source: &str) -> Result<Vec<FunctionDefinition>, Error> {
    let tokens = tokenize(source.to_string(), Some(FILE.to_string()))?;
    parse(tokens, Rc::new(FILE.to_string()), &globals())
}

fn ends_in_return(stmt: &Stmt) -> bool {
    match stmt {
        Stmt::Return(_) => true,
        Stmt::Block(block) => statements_end_in_return(block),
        Stmt::If(if_stmt) => {
            ends_in_return(&if_stmt.then_body)
                && if_stmt.else_body.as_deref().is_some_and(ends_in_return)
        }
        _ => false,
    }
}

fn statements_end_in_return(block: &BlockStmt) -> bool {
    block.body.last().is_some_and(ends_in_return)
}

#[test]
fn test_parse_empty_program() {
    assert!(parse_program("").unwrap().is_empty());
    assert!(parse_program("  // nothing here\n").unwrap().is_empty());
}

#[test]
fn test_parse_processing_functions() {
    let source = r#"
        /* per sample gain */
        float applyGain(float in)
        {
            return in * gain;
        }

        void process(block data)
        {
            for (auto &s : data)
                s = applyGain(s);
        }
    "#;

    let functions = parse_program(source).unwrap();
    assert_eq!(functions.len(), 2);

    let apply_gain = &functions[0];
    assert_eq!(apply_gain.name.name, "applyGain");
    assert_eq!(apply_gain.return_type, TypeId::Float);
    assert_eq!(apply_gain.parameters.len(), 1);
    assert_eq!(apply_gain.parameters[0].name, "in");
    assert_eq!(apply_gain.parameters[0].scope, "applyGain");
    assert_eq!(apply_gain.body.len(), 1);

    let process = &functions[1];
    assert_eq!(process.return_type, TypeId::Void);
    assert_eq!(process.parameters[0].type_id, TypeId::Block);
    assert_eq!(process.body.len(), 2);
    assert!(matches!(process.body.body[0], Stmt::Loop(_)));
    assert!(matches!(process.body.body[1], Stmt::Return(ref ret) if ret.value.is_none()));
}

#[test]
fn test_parse_recursive_function() {
    let source = "int fact(int n) { return n > 1 ? n * fact(n - 1) : 1; }";

    let functions = parse_program(source).unwrap();

    match &functions[0].body.body[0] {
        Stmt::Return(ret) => {
            let value = ret.value.as_ref().unwrap();
            assert_eq!(value.to_string(), "((n > 1) ? (n * fact((n - 1))) : 1)");
        }
        other => panic!("Expected return, got {:?}", other),
    }
}

#[test]
fn test_locals_get_function_scope_paths() {
    let source = "float tick() { float next = phase + 1.0f; phase = next; return phase; }";

    let functions = parse_program(source).unwrap();

    match &functions[0].body.body[0] {
        Stmt::VariableDefinition(definition) => {
            assert_eq!(definition.symbol.to_string(), "tick.0.next");
        }
        other => panic!("Expected variable definition, got {:?}", other),
    }
}

#[test]
fn test_parameters_shadow_globals() {
    let source = "float scale(float gain) { gain = gain * 2.0f; return gain; }";

    assert!(parse_program(source).is_ok());

    let error = parse_program("void reset() { gain = 0.0f; }").unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::ConstAssignment {
            symbol: "gain".to_string()
        }
    );
}

#[test]
fn test_parameters_are_local_to_function() {
    let error = parse_program("float f(float a) { return a; } float g() { return a; }").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnknownSymbol {
            symbol: "a".to_string()
        }
    );
}

#[test]
fn test_redefinitions() {
    let error = parse_program("float f(float a, float a) { return a; }").unwrap_err();
    assert_eq!(error.get_error_name(), "SymbolAlreadyDefined");

    let error = parse_program("void f() {} void f() {}").unwrap_err();
    assert_eq!(error.get_error_name(), "SymbolAlreadyDefined");
}

#[test]
fn test_function_definition_errors() {
    let error = parse_program("f() {}").unwrap_err();
    assert_eq!(error.message(), "Expected return type");

    let error = parse_program("float f(a) {}").unwrap_err();
    assert_eq!(error.message(), "Expected parameter type");

    let error = parse_program("int f() { if (phase > 0.0f) return 1; }").unwrap_err();
    assert_eq!(error.message(), "Not all paths return a value");
}

#[test]
fn test_every_function_body_returns() {
    let source = r#"
        float clip(float x)
        {
            if (x > 1.0f) return 1.0f;
            else if (x < -1.0f) return -1.0f;
            else { phase = x; }
        }

        void advance()
        {
            phase += 1.0f / (float)sampleRate;
            if (phase > 1.0f) { phase -= 1.0f; } else { }
        }
    "#;

    for function in parse_program(source).unwrap() {
        assert!(
            statements_end_in_return(&function.body),
            "{} has a path without return",
            function.name
        );
    }
}

#[test]
fn test_parse_lone_body() {
    let tokens = tokenize(
        "{ float out = sin(phase) * gain; return out; }".to_string(),
        Some(FILE.to_string()),
    )
    .unwrap();

    let body = parse_body(tokens, Rc::new(FILE.to_string()), &globals()).unwrap();

    assert_eq!(body.len(), 2);
    assert!(body.body[1].is_return());
}

#[test]
fn test_error_is_rendered_at_offending_token() {
    let source = "int f() { phase = 1 }";

    let error = parse_program(source).unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: ";".to_string(),
            found: "}".to_string()
        }
    );
    assert_eq!(error.get_position().0, 20);

    let rendered = format_error(&error, FILE, source);
    let lines = rendered.lines().collect::<Vec<_>>();

    assert_eq!(lines[1], "-> test.dsp");
    assert_eq!(lines[3], "1 | int f() { phase = 1 }");
    assert!(lines[4].ends_with("-^"));
    assert_eq!(lines[4].len(), "  | ".len() + 21);
}
