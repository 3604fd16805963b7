use std::fmt::Display;

use crate::Span;

use super::{
    expressions::{
        BinaryExpr, BlockAccessExpr, CallExpr, CastExpr, CompareExpr, ImmediateExpr,
        IncrementExpr, SymbolExpr, TernaryExpr, UnaryExpr,
    },
    statements::{AssignmentStmt, BlockStmt, ExpressionStmt, IfStmt, LoopStmt, ReturnStmt, VarDefStmt},
};

/// Statement nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(BlockStmt),
    If(IfStmt),
    Loop(LoopStmt),
    Return(ReturnStmt),
    VariableDefinition(VarDefStmt),
    Assignment(AssignmentStmt),
    /// Assignment whose target is a `BlockAccess`.
    BlockAssignment(AssignmentStmt),
    /// An expression evaluated for its side effects.
    Expression(ExpressionStmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Block(stmt) => &stmt.span,
            Stmt::If(stmt) => &stmt.span,
            Stmt::Loop(stmt) => &stmt.span,
            Stmt::Return(stmt) => &stmt.span,
            Stmt::VariableDefinition(stmt) => &stmt.span,
            Stmt::Assignment(stmt) | Stmt::BlockAssignment(stmt) => &stmt.span,
            Stmt::Expression(stmt) => &stmt.span,
        }
    }

    pub fn is_return(&self) -> bool {
        matches!(self, Stmt::Return(_))
    }
}

/// Expression nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Immediate(ImmediateExpr),
    VariableReference(SymbolExpr),
    Binary(BinaryExpr),
    Compare(CompareExpr),
    LogicalNot(UnaryExpr),
    Ternary(TernaryExpr),
    Cast(CastExpr),
    Negation(UnaryExpr),
    Increment(IncrementExpr),
    Call(CallExpr),
    BlockAccess(BlockAccessExpr),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Immediate(expr) => &expr.span,
            Expr::VariableReference(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Compare(expr) => &expr.span,
            Expr::LogicalNot(expr) | Expr::Negation(expr) => &expr.span,
            Expr::Ternary(expr) => &expr.span,
            Expr::Cast(expr) => &expr.span,
            Expr::Increment(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
            Expr::BlockAccess(expr) => &expr.span,
        }
    }
}

// Fully parenthesized, so the printed form shows how operators bound.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Immediate(expr) => write!(f, "{}", expr.value),
            Expr::VariableReference(expr) => write!(f, "{}", expr.symbol.name),
            Expr::Binary(expr) => write!(
                f,
                "({} {} {})",
                expr.left,
                expr.operator.as_str().unwrap_or("?"),
                expr.right
            ),
            Expr::Compare(expr) => write!(
                f,
                "({} {} {})",
                expr.left,
                expr.operator.as_str().unwrap_or("?"),
                expr.right
            ),
            Expr::LogicalNot(expr) => write!(f, "!{}", expr.expr),
            Expr::Ternary(expr) => write!(
                f,
                "({} ? {} : {})",
                expr.condition, expr.then_expr, expr.else_expr
            ),
            Expr::Cast(expr) => write!(f, "({}){}", expr.target, expr.expr),
            Expr::Negation(expr) => write!(f, "-{}", expr.expr),
            Expr::Increment(expr) => {
                let operator = if expr.is_decrement { "--" } else { "++" };
                if expr.is_prefix {
                    write!(f, "{}{}", operator, expr.target)
                } else {
                    write!(f, "{}{}", expr.target, operator)
                }
            }
            Expr::Call(expr) => {
                let arguments = expr
                    .arguments
                    .iter()
                    .map(|argument| argument.to_string())
                    .collect::<Vec<_>>();
                write!(f, "{}({})", expr.callee.name, arguments.join(", "))
            }
            Expr::BlockAccess(expr) => write!(f, "{}[{}]", expr.base, expr.index),
        }
    }
}
