//! Iterative tree teardown.
//!
//! A naive drop of a deeply nested tree recurses once per level and can
//! overflow the call stack on generated programs (a right-leaning chain of
//! 100k binary nodes, say). The hand-written `Drop` impls here keep stack
//! depth O(1) in tree depth: a node hands ownership of its direct children
//! to an explicit worklist (becoming childless in the process), and the
//! worklist is drained until empty. Each node is visited once, so the cost
//! is O(nodes).
//!
//! Invariant relied on below: a node popped from the worklist is detached
//! before it is dropped, so its own `Drop` hits the childless fast path
//! and never recurses further.

use std::mem;

use super::{Expr, ExprKind, Stmt, StmtKind};

/// An owned node whose children still need releasing.
enum Detached {
    Expr(Expr),
    Stmt(Stmt),
}

impl Expr {
    /// Move every owned child onto `worklist`, leaving `self` childless.
    fn detach_children(&mut self, worklist: &mut Vec<Detached>) {
        match mem::replace(&mut self.kind, ExprKind::Number(0)) {
            ExprKind::Number(_) | ExprKind::Variable(_) | ExprKind::Input => {}
            ExprKind::Assign { value, .. } => worklist.push(Detached::Expr(*value)),
            ExprKind::Binary { left, right, .. } => {
                worklist.push(Detached::Expr(*left));
                worklist.push(Detached::Expr(*right));
            }
            ExprKind::Unary { operand, .. } => worklist.push(Detached::Expr(*operand)),
        }
    }

    fn is_leaf(&self) -> bool {
        matches!(
            self.kind,
            ExprKind::Number(_) | ExprKind::Variable(_) | ExprKind::Input
        )
    }
}

impl Stmt {
    /// Move every owned child onto `worklist`, leaving `self` childless.
    fn detach_children(&mut self, worklist: &mut Vec<Detached>) {
        match mem::replace(&mut self.kind, StmtKind::Empty) {
            StmtKind::Empty => {}
            StmtKind::Block(stmts) => worklist.extend(stmts.into_iter().map(Detached::Stmt)),
            StmtKind::Assign { value, .. } => worklist.push(Detached::Expr(value)),
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                worklist.push(Detached::Expr(cond));
                worklist.push(Detached::Stmt(*then_branch));
                if let Some(other) = else_branch {
                    worklist.push(Detached::Stmt(*other));
                }
            }
            StmtKind::While { cond, body } => {
                worklist.push(Detached::Expr(cond));
                worklist.push(Detached::Stmt(*body));
            }
            StmtKind::Print(value) => worklist.push(Detached::Expr(value)),
        }
    }
}

/// Pop, detach, drop, repeat. Every popped node is childless when its
/// `Drop` runs, so the recursion bottoms out immediately.
fn drain(mut worklist: Vec<Detached>) {
    while let Some(node) = worklist.pop() {
        match node {
            Detached::Expr(mut expr) => expr.detach_children(&mut worklist),
            Detached::Stmt(mut stmt) => stmt.detach_children(&mut worklist),
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        // Leaves (including already-detached nodes) release nothing.
        if self.is_leaf() {
            return;
        }
        let mut worklist = Vec::new();
        self.detach_children(&mut worklist);
        drain(worklist);
    }
}

impl Drop for Stmt {
    fn drop(&mut self) {
        if matches!(self.kind, StmtKind::Empty) {
            return;
        }
        let mut worklist = Vec::new();
        self.detach_children(&mut worklist);
        drain(worklist);
    }
}
