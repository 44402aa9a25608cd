//! Statement nodes.

use super::{Expr, Variable};
use crate::Span;

/// A statement node with its source span.
#[derive(Debug, PartialEq)]
pub struct Stmt {
    pub(super) kind: StmtKind,
    pub(super) span: Span,
}

/// The closed set of statement kinds.
#[derive(Debug, PartialEq)]
pub enum StmtKind {
    /// A bare `;`.
    Empty,
    /// `{ ... }`; a lexical scope boundary at parse time only.
    Block(Vec<Stmt>),
    /// `name = expr;`.
    Assign { target: Variable, value: Expr },
    /// `if (cond) then [else other]`.
    If {
        cond: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    /// `while (cond) body`. No iteration bound.
    While { cond: Expr, body: Box<Stmt> },
    /// `print expr;`.
    Print(Expr),
}

impl Stmt {
    /// Empty statement node.
    pub fn empty(span: Span) -> Stmt {
        Stmt {
            kind: StmtKind::Empty,
            span,
        }
    }

    /// Block node; takes ownership of the contained statements.
    pub fn block(stmts: Vec<Stmt>, span: Span) -> Stmt {
        Stmt {
            kind: StmtKind::Block(stmts),
            span,
        }
    }

    /// Assignment statement node.
    pub fn assign(target: Variable, value: Expr, span: Span) -> Stmt {
        Stmt {
            kind: StmtKind::Assign { target, value },
            span,
        }
    }

    /// Conditional node; takes ownership of condition and branches.
    pub fn if_stmt(cond: Expr, then_branch: Stmt, else_branch: Option<Stmt>, span: Span) -> Stmt {
        Stmt {
            kind: StmtKind::If {
                cond,
                then_branch: Box::new(then_branch),
                else_branch: else_branch.map(Box::new),
            },
            span,
        }
    }

    /// Loop node; takes ownership of condition and body.
    pub fn while_stmt(cond: Expr, body: Stmt, span: Span) -> Stmt {
        Stmt {
            kind: StmtKind::While {
                cond,
                body: Box::new(body),
            },
            span,
        }
    }

    /// Print statement node.
    pub fn print(value: Expr, span: Span) -> Stmt {
        Stmt {
            kind: StmtKind::Print(value),
            span,
        }
    }

    /// The node's kind.
    #[inline]
    pub fn kind(&self) -> &StmtKind {
        &self.kind
    }

    /// The node's source span.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }
}
