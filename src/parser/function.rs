use std::rc::Rc;

use log::debug;

use crate::{
    ast::{
        statements::{BlockStmt, FunctionDefinition},
        types::TypeId,
    },
    errors::errors::Error,
    lexer::{
        grammar::GRAMMAR,
        stream::TokenStream,
        tokens::{Token, TokenKind},
    },
    symbols::symbols::{Symbol, SymbolTable},
};

use super::{finaliser::finalise_syntax_tree, parser::Parser, stmt::parse_block_stmt};

/// Parses `<type> <name>(<type> <name>, ...) { ... }`.
///
/// The function name is declared before its body is parsed, so the body
/// (and every later function) can call it.
pub fn parse_function_definition(parser: &mut Parser) -> Result<FunctionDefinition, Error> {
    let start = parser.current_token().span.clone();

    let Some(return_type) = parser.match_if_type_token() else {
        return Err(parser.syntax_error("Expected return type"));
    };

    let name_token = parser.expect_symbol_name()?;
    let name = parser.declare_symbol(&name_token, return_type, true)?;

    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = Vec::new();
    while !parser.is_eof() && parser.current_token_kind() != TokenKind::CloseParen {
        let Some(type_id) = parser.match_if_type_token() else {
            return Err(parser.syntax_error("Expected parameter type"));
        };
        let parameter = parser.expect_symbol_name()?;
        parameters.push((parameter, type_id));

        if !parser.match_if(TokenKind::Comma) {
            break;
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    let (parameters, body) = parse_function_body(parser, &name_token.value, &parameters)?;

    debug!(
        "Parsed function {} in {} with {} parameters and {} statements",
        name,
        parser.get_file(),
        parameters.len(),
        body.len()
    );

    Ok(FunctionDefinition {
        span: start.to(&body.span),
        name,
        return_type,
        parameters,
        body,
    })
}

/// Parses a function body in a fresh function scope holding `parameters`,
/// then finalises it so every path ends in a return.
pub fn parse_function_body(
    parser: &mut Parser,
    name: &str,
    parameters: &[(Token, TypeId)],
) -> Result<(Vec<Symbol>, BlockStmt), Error> {
    parser.push_function_scope(name);

    let mut symbols = Vec::with_capacity(parameters.len());
    for (token, type_id) in parameters {
        symbols.push(parser.declare_symbol(token, *type_id, false)?);
    }

    let mut body = parse_block_stmt(parser)?;
    finalise_syntax_tree(&mut body)?;

    parser.pop_scope();

    Ok((symbols, body))
}

/// Parses a lone function body, e.g. `{ return in * gain; }`, against `symbols`.
///
/// The whole input must be consumed by the body.
pub fn parse_body(
    tokens: Vec<Token>,
    file: Rc<String>,
    symbols: &dyn SymbolTable,
) -> Result<BlockStmt, Error> {
    let mut parser = Parser::new(TokenStream::new(tokens), file, &GRAMMAR, symbols);

    let (_, body) = parse_function_body(&mut parser, "body", &[])?;
    parser.expect(TokenKind::EOF)?;

    Ok(body)
}
