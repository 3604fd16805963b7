use crate::{lexer::tokens::TokenKind, symbols::symbols::Symbol, Span};

use super::{ast::{Expr, Stmt}, types::TypeId};

/// An ordered list of statements forming one lexical scope.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl BlockStmt {
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn add_statement(&mut self, stmt: Stmt) {
        self.body.push(stmt);
    }

    /// The statement control ends on, looking through trailing nested blocks.
    pub fn last_statement(&self) -> Option<&Stmt> {
        let mut last = self.body.last()?;

        while let Stmt::Block(block) = last {
            match block.body.last() {
                Some(inner) => last = inner,
                None => break,
            }
        }

        Some(last)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}

/// `[const] <type> <name> = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct VarDefStmt {
    pub symbol: Symbol,
    pub value: Expr,
    pub span: Span,
}

impl VarDefStmt {
    pub fn is_const(&self) -> bool {
        self.symbol.is_const
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub target: Expr,
    pub operator: TokenKind,
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Box<Stmt>,
    pub else_body: Option<Box<Stmt>>,
    pub span: Span,
}

impl IfStmt {
    pub fn has_false_branch(&self) -> bool {
        self.else_body.is_some()
    }
}

/// `for (auto &<variable> : <iterable>) <body>`
#[derive(Debug, Clone, PartialEq)]
pub struct LoopStmt {
    pub variable: Symbol,
    pub iterable: Expr,
    pub body: Box<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub span: Span,
}

/// A function with its parsed and finalised body.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDefinition {
    pub name: Symbol,
    pub return_type: TypeId,
    pub parameters: Vec<Symbol>,
    pub body: BlockStmt,
    pub span: Span,
}
