use crate::{lexer::tokens::TokenKind, symbols::symbols::Symbol, Span};

use super::{
    ast::Expr,
    types::{TypeId, VariableStorage},
};

// LITERALS

/// Immediate Expression
/// A typed scalar literal. `true` and `false` are stored as integers.
#[derive(Debug, Clone, PartialEq)]
pub struct ImmediateExpr {
    pub value: VariableStorage,
    pub span: Span,
}

/// Symbol Expression
/// A reference to a variable.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub symbol: Symbol,
    pub span: Span,
}

// COMPLEX

/// Binary Expression
/// Arithmetic (`+ - * / %`) and logical (`&& ||`) operations.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: TokenKind,
    pub right: Box<Expr>,
    pub span: Span,
}

/// Compare Expression
/// A single relational comparison; comparisons don't chain.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareExpr {
    pub left: Box<Expr>,
    pub operator: TokenKind,
    pub right: Box<Expr>,
    pub span: Span,
}

/// Operand of a logical not or a negation.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub expr: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TernaryExpr {
    pub condition: Box<Expr>,
    pub then_expr: Box<Expr>,
    pub else_expr: Box<Expr>,
    pub span: Span,
}

/// Cast Expression
/// `(type)expr`
#[derive(Debug, Clone, PartialEq)]
pub struct CastExpr {
    pub target: TypeId,
    pub expr: Box<Expr>,
    pub span: Span,
}

/// Increment Expression
/// `++x`, `--x`, `x++` and `x--`.
#[derive(Debug, Clone, PartialEq)]
pub struct IncrementExpr {
    pub target: Box<Expr>,
    pub is_prefix: bool,
    pub is_decrement: bool,
    pub span: Span,
}

/// Call Expression
/// Arguments are kept in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Symbol,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

/// Block Access Expression
/// Indexed read of a block, `base[index]`.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockAccessExpr {
    pub base: Box<Expr>,
    pub index: Box<Expr>,
    pub span: Span,
}
