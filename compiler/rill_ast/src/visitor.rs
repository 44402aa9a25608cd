//! AST visitor protocol.
//!
//! Double dispatch over the closed node-kind set: `accept` on a node
//! invokes the `visit_*` method matching the node's concrete kind, so
//! behavior is selected by kind rather than by call site. Every traversal
//! (evaluation, Graphviz export, future semantic passes) is one `Visitor`
//! impl; node definitions never change when a traversal is added.
//!
//! Default `visit_*` bodies delegate to `walk_*` functions that descend
//! into children, so a visitor overrides only the kinds it cares about.
//! The associated `Error` type lets fallible traversals (the evaluator)
//! and infallible ones share the protocol.
//!
//! ```text
//! struct CountNodes {
//!     count: usize,
//! }
//!
//! impl Visitor for CountNodes {
//!     type Error = std::convert::Infallible;
//!
//!     fn visit_number(&mut self, _value: i64, _span: Span) -> Result<(), Self::Error> {
//!         self.count += 1;
//!         Ok(())
//!     }
//! }
//! ```

use crate::ast::{Expr, ExprKind, Program, Stmt, StmtKind, Variable};
use crate::{BinOp, Name, Span, UnOp};

/// A traversal over the fixed node-kind set.
///
/// Override `visit_*` methods for custom behavior; call the matching
/// `walk_*` to continue into children. The visitor may mutate its own
/// state, the tree stays immutable.
pub trait Visitor {
    type Error;

    /// Visit the program root.
    fn visit_program(&mut self, program: &Program) -> Result<(), Self::Error> {
        walk_program(self, program)
    }

    /// Visit an empty statement.
    fn visit_empty(&mut self, span: Span) -> Result<(), Self::Error> {
        let _ = span;
        Ok(())
    }

    /// Visit a block statement.
    fn visit_block(&mut self, stmts: &[Stmt], span: Span) -> Result<(), Self::Error> {
        let _ = span;
        walk_stmts(self, stmts)
    }

    /// Visit an assignment statement.
    fn visit_assign_stmt(
        &mut self,
        target: &Variable,
        value: &Expr,
        span: Span,
    ) -> Result<(), Self::Error> {
        let _ = span;
        walk_assign(self, target, value)
    }

    /// Visit a conditional statement.
    fn visit_if(
        &mut self,
        cond: &Expr,
        then_branch: &Stmt,
        else_branch: Option<&Stmt>,
        span: Span,
    ) -> Result<(), Self::Error> {
        let _ = span;
        walk_if(self, cond, then_branch, else_branch)
    }

    /// Visit a loop statement.
    fn visit_while(&mut self, cond: &Expr, body: &Stmt, span: Span) -> Result<(), Self::Error> {
        let _ = span;
        cond.accept(self)?;
        body.accept(self)
    }

    /// Visit a print statement.
    fn visit_print(&mut self, value: &Expr, span: Span) -> Result<(), Self::Error> {
        let _ = span;
        value.accept(self)
    }

    /// Visit an integer literal.
    fn visit_number(&mut self, value: i64, span: Span) -> Result<(), Self::Error> {
        let _ = (value, span);
        Ok(())
    }

    /// Visit a variable read.
    fn visit_variable(&mut self, name: Name, span: Span) -> Result<(), Self::Error> {
        let _ = (name, span);
        Ok(())
    }

    /// Visit an input read.
    fn visit_input(&mut self, span: Span) -> Result<(), Self::Error> {
        let _ = span;
        Ok(())
    }

    /// Visit an assignment expression.
    fn visit_assign_expr(
        &mut self,
        target: &Variable,
        value: &Expr,
        span: Span,
    ) -> Result<(), Self::Error> {
        let _ = span;
        walk_assign(self, target, value)
    }

    /// Visit a binary operation.
    fn visit_binary(
        &mut self,
        op: BinOp,
        left: &Expr,
        right: &Expr,
        span: Span,
    ) -> Result<(), Self::Error> {
        let _ = (op, span);
        left.accept(self)?;
        right.accept(self)
    }

    /// Visit a unary operation.
    fn visit_unary(&mut self, op: UnOp, operand: &Expr, span: Span) -> Result<(), Self::Error> {
        let _ = (op, span);
        operand.accept(self)
    }
}

/// Walk the program's top-level statements in source order.
pub fn walk_program<V: Visitor + ?Sized>(
    visitor: &mut V,
    program: &Program,
) -> Result<(), V::Error> {
    walk_stmts(visitor, program.stmts())
}

/// Walk a statement sequence in source order.
pub fn walk_stmts<V: Visitor + ?Sized>(visitor: &mut V, stmts: &[Stmt]) -> Result<(), V::Error> {
    for stmt in stmts {
        stmt.accept(visitor)?;
    }
    Ok(())
}

/// Walk an assignment: the target variable, then the value.
pub fn walk_assign<V: Visitor + ?Sized>(
    visitor: &mut V,
    target: &Variable,
    value: &Expr,
) -> Result<(), V::Error> {
    visitor.visit_variable(target.name, target.span)?;
    value.accept(visitor)
}

/// Walk a conditional: condition, then branch, optional else branch.
pub fn walk_if<V: Visitor + ?Sized>(
    visitor: &mut V,
    cond: &Expr,
    then_branch: &Stmt,
    else_branch: Option<&Stmt>,
) -> Result<(), V::Error> {
    cond.accept(visitor)?;
    then_branch.accept(visitor)?;
    if let Some(other) = else_branch {
        other.accept(visitor)?;
    }
    Ok(())
}

impl Program {
    /// Dispatch to the visitor's program handler.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<(), V::Error> {
        visitor.visit_program(self)
    }
}

impl Stmt {
    /// Dispatch to the visitor method for this statement's concrete kind.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<(), V::Error> {
        match self.kind() {
            StmtKind::Empty => visitor.visit_empty(self.span()),
            StmtKind::Block(stmts) => visitor.visit_block(stmts, self.span()),
            StmtKind::Assign { target, value } => {
                visitor.visit_assign_stmt(target, value, self.span())
            }
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => visitor.visit_if(cond, then_branch, else_branch.as_deref(), self.span()),
            StmtKind::While { cond, body } => visitor.visit_while(cond, body, self.span()),
            StmtKind::Print(value) => visitor.visit_print(value, self.span()),
        }
    }
}

impl Expr {
    /// Dispatch to the visitor method for this expression's concrete kind.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<(), V::Error> {
        match self.kind() {
            ExprKind::Number(value) => visitor.visit_number(*value, self.span()),
            ExprKind::Variable(name) => visitor.visit_variable(*name, self.span()),
            ExprKind::Input => visitor.visit_input(self.span()),
            ExprKind::Assign { target, value } => {
                visitor.visit_assign_expr(target, value, self.span())
            }
            ExprKind::Binary { op, left, right } => {
                visitor.visit_binary(*op, left, right, self.span())
            }
            ExprKind::Unary { op, operand } => visitor.visit_unary(*op, operand, self.span()),
        }
    }
}
