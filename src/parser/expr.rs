//! Expression parsing.
//!
//! Precedence is encoded as call depth, loosest binding first:
//!
//! 1. ternary `c ? a : b`
//! 2. logical `&&` / `||`
//! 3. one comparison `> >= < <= == !=`
//! 4. sum `+`
//! 5. difference `-`
//! 6. product `* / %`
//! 7. term: parentheses and casts
//! 8. unary, factor and symbol-or-literal
//!
//! Every binary level recurses into itself for its right operand, so chains
//! group to the right: `a - b - c` is `a - (b - c)` and `a + b - c` is
//! `a + (b - c)`, while `a - b + c` is `(a - b) + c`.

use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BinaryExpr, BlockAccessExpr, CallExpr, CastExpr, CompareExpr, ImmediateExpr,
            IncrementExpr, SymbolExpr, TernaryExpr, UnaryExpr,
        },
        types::{TypeId, VariableStorage},
    },
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
    Span,
};

use super::parser::Parser;

pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_ternary_expr(parser)
}

fn binary(left: Expr, operator: TokenKind, right: Expr) -> Expr {
    Expr::Binary(BinaryExpr {
        span: left.get_span().to(right.get_span()),
        left: Box::new(left),
        operator,
        right: Box::new(right),
    })
}

pub fn parse_ternary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let condition = parse_bool_expr(parser)?;

    if !parser.match_if(TokenKind::Question) {
        return Ok(condition);
    }

    let then_expr = parse_expr(parser)?;
    parser.expect(TokenKind::Colon)?;
    let else_expr = parse_expr(parser)?;

    Ok(Expr::Ternary(TernaryExpr {
        span: condition.get_span().to(else_expr.get_span()),
        condition: Box::new(condition),
        then_expr: Box::new(then_expr),
        else_expr: Box::new(else_expr),
    }))
}

/// Parses a logic operation, optionally inverted by a leading `!`.
///
/// The `!` applies to the whole logic operation that follows it.
pub fn parse_bool_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let not_token = if parser.current_token_kind() == TokenKind::Not {
        Some(parser.advance())
    } else {
        None
    };

    let result = parse_logic_expr(parser)?;

    match not_token {
        Some(token) => Ok(Expr::LogicalNot(UnaryExpr {
            span: token.span.to(result.get_span()),
            expr: Box::new(result),
        })),
        None => Ok(result),
    }
}

pub fn parse_logic_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_comparison_expr(parser)?;

    match parser.current_token_kind() {
        operator @ (TokenKind::And | TokenKind::Or) => {
            parser.advance();
            let right = parse_logic_expr(parser)?;
            Ok(binary(left, operator, right))
        }
        _ => Ok(left),
    }
}

pub fn parse_comparison_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_sum_expr(parser)?;

    let operator = parser.current_token_kind();
    if !operator.is_comparison() {
        return Ok(left);
    }

    parser.advance();
    let right = parse_sum_expr(parser)?;

    Ok(Expr::Compare(CompareExpr {
        span: left.get_span().to(right.get_span()),
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_sum_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_difference_expr(parser)?;

    if !parser.match_if(TokenKind::Plus) {
        return Ok(left);
    }

    let right = parse_sum_expr(parser)?;
    Ok(binary(left, TokenKind::Plus, right))
}

pub fn parse_difference_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_product_expr(parser)?;

    if !parser.match_if(TokenKind::Dash) {
        return Ok(left);
    }

    let right = parse_difference_expr(parser)?;
    Ok(binary(left, TokenKind::Dash, right))
}

pub fn parse_product_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_term_expr(parser)?;

    match parser.current_token_kind() {
        operator @ (TokenKind::Star | TokenKind::Slash | TokenKind::Percent) => {
            parser.advance();
            let right = parse_product_expr(parser)?;
            Ok(binary(left, operator, right))
        }
        _ => Ok(left),
    }
}

/// Parses a parenthesized expression, a cast or a unary expression.
///
/// A type token right after `(` makes it a cast.
pub fn parse_term_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.current_token_kind() != TokenKind::OpenParen {
        return parse_unary_expr(parser);
    }

    let open = parser.advance();

    if let Some(target) = parser.match_if_type_token() {
        return parse_cast_expr(parser, open.span, target);
    }

    let result = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(result)
}

fn parse_cast_expr(parser: &mut Parser, start: Span, target: TypeId) -> Result<Expr, Error> {
    parser.expect(TokenKind::CloseParen)?;

    let source = parse_term_expr(parser)?;

    Ok(Expr::Cast(CastExpr {
        span: start.to(source.get_span()),
        target,
        expr: Box::new(source),
    }))
}

pub fn parse_unary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier
        | TokenKind::Literal
        | TokenKind::Dash
        | TokenKind::PlusPlus
        | TokenKind::MinusMinus => parse_factor_expr(parser),
        TokenKind::True => Ok(Expr::Immediate(ImmediateExpr {
            value: VariableStorage::Integer(1),
            span: parser.advance().span,
        })),
        TokenKind::False => Ok(Expr::Immediate(ImmediateExpr {
            value: VariableStorage::Integer(0),
            span: parser.advance().span,
        })),
        TokenKind::Not => parse_bool_expr(parser),
        _ => Err(parser.syntax_error("Parsing error")),
    }
}

/// Parses prefix increments and negation, folding `-<literal>` into the literal.
pub fn parse_factor_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        kind @ (TokenKind::PlusPlus | TokenKind::MinusMinus) => {
            let operator = parser.advance();
            let name = parser.expect_symbol_name()?;
            let target = parse_reference(parser, &name)?;

            Ok(Expr::Increment(IncrementExpr {
                span: operator.span.to(target.get_span()),
                target: Box::new(target),
                is_prefix: true,
                is_decrement: kind == TokenKind::MinusMinus,
            }))
        }
        TokenKind::Dash => {
            let minus = parser.advance();

            if parser.current_token_kind() == TokenKind::Literal {
                return parse_literal(parser, Some(minus.span));
            }

            let expr = parse_symbol_or_literal(parser)?;

            Ok(Expr::Negation(UnaryExpr {
                span: minus.span.to(expr.get_span()),
                expr: Box::new(expr),
            }))
        }
        _ => parse_symbol_or_literal(parser),
    }
}

/// Parses a reference, call, postfix increment or block access, or else a literal.
pub fn parse_symbol_or_literal(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.current_token_kind() != TokenKind::Identifier {
        return parse_literal(parser, None);
    }

    let name = parser.advance();

    if parser.match_if(TokenKind::OpenParen) {
        return parse_call_expr(parser, &name);
    }

    let expr = parse_reference(parser, &name)?;

    match parser.current_token_kind() {
        kind @ (TokenKind::PlusPlus | TokenKind::MinusMinus) => {
            let operator = parser.advance();

            Ok(Expr::Increment(IncrementExpr {
                span: expr.get_span().to(&operator.span),
                target: Box::new(expr),
                is_prefix: false,
                is_decrement: kind == TokenKind::MinusMinus,
            }))
        }
        TokenKind::OpenBracket => {
            parser.advance();
            let index = parse_expr(parser)?;
            let end = parser.expect(TokenKind::CloseBracket)?;

            Ok(Expr::BlockAccess(BlockAccessExpr {
                span: expr.get_span().to(&end.span),
                base: Box::new(expr),
                index: Box::new(index),
            }))
        }
        _ => Ok(expr),
    }
}

fn parse_reference(parser: &mut Parser, name: &Token) -> Result<Expr, Error> {
    let symbol = parser.resolve_symbol(name)?;

    Ok(Expr::VariableReference(SymbolExpr {
        symbol,
        span: name.span.clone(),
    }))
}

/// Parses the arguments of a call, the opening parenthesis being consumed.
pub fn parse_call_expr(parser: &mut Parser, name: &Token) -> Result<Expr, Error> {
    let callee = parser.resolve_symbol(name)?;

    let mut arguments = vec![];

    while !parser.is_eof() && parser.current_token_kind() != TokenKind::CloseParen {
        arguments.push(parse_expr(parser)?);
        parser.match_if(TokenKind::Comma);
    }

    let end = parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::Call(CallExpr {
        span: name.span.to(&end.span),
        callee,
        arguments,
    }))
}

/// Parses a literal; `negative` holds the span of an already consumed minus sign.
pub fn parse_literal(parser: &mut Parser, negative: Option<Span>) -> Result<Expr, Error> {
    if parser.current_token_kind() != TokenKind::Literal {
        return Err(parser.syntax_error("Expected literal"));
    }

    let token = parser.advance();
    let value = token.literal_value(negative.is_some())?;

    Ok(match negative {
        Some(minus) => Expr::Immediate(ImmediateExpr {
            value,
            span: minus.to(&token.span),
        }),
        None => Expr::Immediate(ImmediateExpr {
            value,
            span: token.span,
        }),
    })
}
