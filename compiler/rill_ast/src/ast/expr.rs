//! Expression nodes.

use super::Variable;
use crate::{BinOp, Name, Span, UnOp};

/// An expression node with its source span.
///
/// Construct only through the builder methods below; the fields stay
/// private so every child is owned exactly once.
#[derive(Debug, PartialEq)]
pub struct Expr {
    pub(super) kind: ExprKind,
    pub(super) span: Span,
}

/// The closed set of expression kinds.
#[derive(Debug, PartialEq)]
pub enum ExprKind {
    /// Integer literal.
    Number(i64),
    /// Variable read.
    Variable(Name),
    /// One blocking integer read (`?`).
    Input,
    /// Assignment as an expression; yields the assigned value.
    Assign { target: Variable, value: Box<Expr> },
    /// Binary operation; operands evaluate strictly left to right.
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Unary operation.
    Unary { op: UnOp, operand: Box<Expr> },
}

impl Expr {
    /// Integer literal node.
    pub fn number(value: i64, span: Span) -> Expr {
        Expr {
            kind: ExprKind::Number(value),
            span,
        }
    }

    /// Variable read node.
    pub fn variable(name: Name, span: Span) -> Expr {
        Expr {
            kind: ExprKind::Variable(name),
            span,
        }
    }

    /// Input read node (`?`).
    pub fn input(span: Span) -> Expr {
        Expr {
            kind: ExprKind::Input,
            span,
        }
    }

    /// Assignment expression node; takes ownership of the value.
    pub fn assign(target: Variable, value: Expr, span: Span) -> Expr {
        Expr {
            kind: ExprKind::Assign {
                target,
                value: Box::new(value),
            },
            span,
        }
    }

    /// Binary operation node; takes ownership of both operands.
    pub fn binary(op: BinOp, left: Expr, right: Expr, span: Span) -> Expr {
        Expr {
            kind: ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
        }
    }

    /// Unary operation node; takes ownership of the operand.
    pub fn unary(op: UnOp, operand: Expr, span: Span) -> Expr {
        Expr {
            kind: ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        }
    }

    /// The node's kind.
    #[inline]
    pub fn kind(&self) -> &ExprKind {
        &self.kind
    }

    /// The node's source span.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }
}
