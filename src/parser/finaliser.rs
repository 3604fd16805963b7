//! Return finalisation of function bodies.
//!
//! The code generator expects every control path of a body to leave through
//! an explicit `Return`. The finaliser looks at the statement control ends on
//! (through trailing nested blocks) and appends value-less returns where one
//! is missing. A trailing `if` without an `else` is rejected.

use log::debug;

use crate::{
    ast::{
        ast::Stmt,
        statements::{BlockStmt, ReturnStmt},
    },
    errors::errors::Error,
    Span,
};

enum Tail {
    Returns,
    Open,
}

pub fn finalise_syntax_tree(tree: &mut BlockStmt) -> Result<(), Error> {
    let tail = match tree.body.last_mut() {
        Some(last) => resolve_tail(last)?,
        None => Tail::Open,
    };

    if let Tail::Open = tail {
        debug!("Appending return at the end of the body");

        let span = Span {
            start: tree.span.end.clone(),
            end: tree.span.end.clone(),
        };
        tree.add_statement(synthesized_return(span));
    }

    Ok(())
}

fn synthesized_return(span: Span) -> Stmt {
    Stmt::Return(ReturnStmt { value: None, span })
}

fn resolve_tail(stmt: &mut Stmt) -> Result<Tail, Error> {
    match stmt {
        Stmt::Block(block) => match block.body.last_mut() {
            Some(last) => resolve_tail(last),
            None => Ok(Tail::Open),
        },
        Stmt::Return(_) => Ok(Tail::Returns),
        Stmt::If(if_stmt) => {
            let Some(else_body) = if_stmt.else_body.as_mut() else {
                return Err(Error::syntax(
                    "Not all paths return a value",
                    if_stmt.span.start.clone(),
                ));
            };

            if !ends_with_return(else_body) {
                append_return(else_body);
            }

            if !ends_with_return(&if_stmt.then_body) {
                append_return(&mut if_stmt.then_body);
            }

            Ok(Tail::Returns)
        }
        _ => Ok(Tail::Open),
    }
}

fn ends_with_return(branch: &Stmt) -> bool {
    match branch {
        Stmt::Block(block) => block.last_statement().is_some_and(Stmt::is_return),
        other => other.is_return(),
    }
}

/// Appends a return to a branch, wrapping a single statement into a block.
fn append_return(branch: &mut Stmt) {
    let span = branch.get_span().clone();
    debug!("Appending return to branch at {}", span.start);

    let return_span = Span {
        start: span.end.clone(),
        end: span.end.clone(),
    };

    if let Stmt::Block(block) = branch {
        block.add_statement(synthesized_return(return_span));
        return;
    }

    let original = std::mem::replace(
        branch,
        Stmt::Block(BlockStmt {
            body: vec![],
            span: span.clone(),
        }),
    );

    *branch = Stmt::Block(BlockStmt {
        body: vec![original, synthesized_return(return_span)],
        span,
    });
}
