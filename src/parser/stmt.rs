use log::trace;

use crate::{
    ast::{
        ast::{Expr, Stmt},
        statements::{
            AssignmentStmt, BlockStmt, ExpressionStmt, IfStmt, LoopStmt, ReturnStmt, VarDefStmt,
        },
        types::TypeId,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    expr::{parse_bool_expr, parse_expr},
    parser::Parser,
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    trace!(
        "Parsing statement at {} ({})",
        parser.get_position(),
        parser.current_token_kind()
    );

    let start = parser.current_token().span.clone();
    let is_const = parser.match_if(TokenKind::Const);

    if is_const && parser.current_type_token().is_none() {
        return Err(parser.syntax_error("Expected type after const"));
    }

    match parser.current_token_kind() {
        TokenKind::If => parse_if_stmt(parser),
        TokenKind::OpenCurly => {
            let block = parse_block_stmt(parser)?;
            parser.match_if(TokenKind::Semicolon);
            Ok(Stmt::Block(block))
        }
        TokenKind::Return => parse_return_stmt(parser),
        TokenKind::For => parse_loop_stmt(parser),
        _ if parser.current_type_token().is_some() => parse_var_def_stmt(parser, start, is_const),
        _ => {
            let stmt = parse_assignment_stmt(parser)?;
            parser.expect(TokenKind::Semicolon)?;
            Ok(stmt)
        }
    }
}

/// Parses `{ ... }` in its own anonymous scope.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span;

    parser.push_anonymous_scope();

    let mut statements = Vec::new();
    while !parser.is_eof() && parser.current_token_kind() != TokenKind::CloseCurly {
        statements.push(parse_stmt(parser)?);
    }

    parser.pop_scope();

    let end = parser.expect(TokenKind::CloseCurly)?.span;

    Ok(BlockStmt {
        body: statements,
        span: start.to(&end),
    })
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span;

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_bool_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let then_body = parse_stmt(parser)?;

    let else_body = if parser.match_if(TokenKind::Else) {
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    let span = start.to(
        else_body
            .as_ref()
            .map(|body| body.get_span())
            .unwrap_or(then_body.get_span()),
    );

    Ok(Stmt::If(IfStmt {
        span,
        condition,
        then_body: Box::new(then_body),
        else_body,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span;

    let value = if parser.current_token_kind() == TokenKind::Semicolon {
        None
    } else {
        Some(parse_expr(parser)?)
    };

    let end = parser.expect(TokenKind::Semicolon)?.span;

    Ok(Stmt::Return(ReturnStmt {
        value,
        span: start.to(&end),
    }))
}

/// Parses `for (auto &<name> : <iterable>) <body>`.
///
/// The iteration variable is only visible inside the body.
pub fn parse_loop_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span;

    parser.expect(TokenKind::OpenParen)?;
    parser.expect(TokenKind::Auto)?;
    parser.expect(TokenKind::Ampersand)?;
    let name = parser.expect_symbol_name()?;
    parser.expect(TokenKind::Colon)?;

    let iterable = parse_expr(parser)?;

    parser.expect(TokenKind::CloseParen)?;

    parser.push_anonymous_scope();
    // block elements are floats
    let variable = parser.declare_symbol(&name, TypeId::Float, false)?;
    let body = parse_stmt(parser)?;
    parser.pop_scope();

    Ok(Stmt::Loop(LoopStmt {
        span: start.to(body.get_span()),
        variable,
        iterable,
        body: Box::new(body),
    }))
}

/// Parses `<type> <name> = <value>;`, the type token being current.
pub fn parse_var_def_stmt(parser: &mut Parser, start: Span, is_const: bool) -> Result<Stmt, Error> {
    let Some(type_id) = parser.match_if_type_token() else {
        return Err(parser.syntax_error("Expected type"));
    };

    if type_id == TypeId::Void {
        return Err(parser.syntax_error("Can't define a void variable"));
    }

    let name = parser.expect_symbol_name()?;

    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser)?;
    let end = parser.expect(TokenKind::Semicolon)?.span;

    // declared after the initializer, which can't see the new name
    let symbol = parser.declare_symbol(&name, type_id, is_const)?;

    Ok(Stmt::VariableDefinition(VarDefStmt {
        symbol,
        value,
        span: start.to(&end),
    }))
}

/// Parses an expression, wrapping it in an assignment when an assignment operator follows.
pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let target = parse_expr(parser)?;

    if !parser.current_token_kind().is_assignment() {
        return Ok(Stmt::Expression(ExpressionStmt {
            span: target.get_span().clone(),
            expression: target,
        }));
    }

    match &target {
        Expr::VariableReference(reference) if reference.symbol.is_const => {
            return Err(Error::new(
                ErrorImpl::ConstAssignment {
                    symbol: reference.symbol.name.clone(),
                },
                reference.span.start.clone(),
            ));
        }
        Expr::VariableReference(_) | Expr::BlockAccess(_) => {}
        _ => {
            return Err(Error::syntax(
                "Can't assign to this expression",
                target.get_span().start.clone(),
            ));
        }
    }

    let operator = parser.advance().kind;
    let value = parse_expr(parser)?;

    let stmt = AssignmentStmt {
        span: target.get_span().to(value.get_span()),
        target,
        operator,
        value,
    };

    if let Expr::BlockAccess(_) = stmt.target {
        Ok(Stmt::BlockAssignment(stmt))
    } else {
        Ok(Stmt::Assignment(stmt))
    }
}
