//! The abstract syntax tree.
//!
//! `Program` is the root and owns an ordered statement list; statements
//! own their expressions and sub-statements. Node fields are private so
//! the builder constructors are the only construction path, which is what
//! keeps the strict-tree invariant: children are handed over by value,
//! never shared or borrowed.

mod expr;
mod stmt;
mod teardown;

#[cfg(test)]
mod tests;

pub use expr::{Expr, ExprKind};
pub use stmt::{Stmt, StmtKind};

use super::{Name, Span};

/// A variable reference: a resolved, canonical name plus its source span.
///
/// Leaf data, not an owning node; assignment nodes embed one directly.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Variable {
    pub name: Name,
    pub span: Span,
}

impl Variable {
    #[inline]
    pub fn new(name: Name, span: Span) -> Self {
        Variable { name, span }
    }
}

/// Root of a parsed unit: the ordered list of top-level statements.
///
/// Exactly one `Program` exists per parse. Dropping it releases the whole
/// tree in one iterative teardown pass (see `teardown`).
#[derive(Debug, PartialEq, Default)]
pub struct Program {
    stmts: Vec<Stmt>,
}

impl Program {
    /// Build the root from already-owned statements.
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Program { stmts }
    }

    /// The top-level statements in source order.
    #[inline]
    pub fn stmts(&self) -> &[Stmt] {
        &self.stmts
    }
}
