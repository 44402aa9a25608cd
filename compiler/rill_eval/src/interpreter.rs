//! The evaluating visitor.

use rill_ast::visitor::walk_stmts;
use rill_ast::{BinOp, Expr, Name, Program, Span, Stmt, StringInterner, UnOp, Variable, Visitor};
use rill_stack::ensure_sufficient_stack;

use crate::io::{InputSource, OutputSink};
use crate::operators::{apply_binary, apply_unary};
use crate::{Environment, RuntimeError};

/// Visitor implementing the runtime semantics.
///
/// Expression handlers deposit their result in a slot that the enclosing
/// handler reads back; statement handlers produce no value. Operand
/// order is strict: the left operand of a binary node is fully evaluated
/// (side effects included) before the right one is touched, and logical
/// operators do not short-circuit.
pub struct Evaluator<'a, I, O> {
    env: Environment,
    /// Result of the most recently visited expression.
    value: i64,
    interner: &'a StringInterner,
    input: &'a mut I,
    output: &'a mut O,
}

impl<'a, I: InputSource, O: OutputSink> Evaluator<'a, I, O> {
    /// Create an evaluator with an empty environment.
    pub fn new(interner: &'a StringInterner, input: &'a mut I, output: &'a mut O) -> Self {
        Evaluator {
            env: Environment::new(),
            value: 0,
            interner,
            input,
            output,
        }
    }

    /// Evaluate one expression to its value.
    ///
    /// Wrapped in `ensure_sufficient_stack`: evaluation recurses once
    /// per expression nesting level.
    fn eval_expr(&mut self, expr: &Expr) -> Result<i64, RuntimeError> {
        ensure_sufficient_stack(|| {
            expr.accept(self)?;
            Ok(self.value)
        })
    }

    /// The environment as it stands (final state after a run).
    pub fn env(&self) -> &Environment {
        &self.env
    }
}

impl<I: InputSource, O: OutputSink> Visitor for Evaluator<'_, I, O> {
    type Error = RuntimeError;

    fn visit_empty(&mut self, _span: Span) -> Result<(), RuntimeError> {
        Ok(())
    }

    // Blocks scope names at compile time only; at runtime they just run
    // their statements in order against the flat environment.
    fn visit_block(&mut self, stmts: &[Stmt], _span: Span) -> Result<(), RuntimeError> {
        walk_stmts(self, stmts)
    }

    fn visit_assign_stmt(
        &mut self,
        target: &Variable,
        value: &Expr,
        _span: Span,
    ) -> Result<(), RuntimeError> {
        // Right-hand side first, then bind.
        let result = self.eval_expr(value)?;
        self.env.set(target.name, result);
        Ok(())
    }

    fn visit_if(
        &mut self,
        cond: &Expr,
        then_branch: &Stmt,
        else_branch: Option<&Stmt>,
        _span: Span,
    ) -> Result<(), RuntimeError> {
        if self.eval_expr(cond)? != 0 {
            then_branch.accept(self)
        } else if let Some(other) = else_branch {
            other.accept(self)
        } else {
            Ok(())
        }
    }

    fn visit_while(&mut self, cond: &Expr, body: &Stmt, _span: Span) -> Result<(), RuntimeError> {
        // No iteration bound; non-terminating programs are expected
        // behavior for this language.
        while self.eval_expr(cond)? != 0 {
            body.accept(self)?;
        }
        Ok(())
    }

    fn visit_print(&mut self, value: &Expr, _span: Span) -> Result<(), RuntimeError> {
        let result = self.eval_expr(value)?;
        self.output.write_int(result);
        Ok(())
    }

    fn visit_number(&mut self, value: i64, _span: Span) -> Result<(), RuntimeError> {
        self.value = value;
        Ok(())
    }

    fn visit_variable(&mut self, name: Name, span: Span) -> Result<(), RuntimeError> {
        match self.env.get(name) {
            Some(value) => {
                self.value = value;
                Ok(())
            }
            None => Err(RuntimeError::UndefinedVariable {
                name: self.interner.resolve(name).to_owned(),
                span,
            }),
        }
    }

    fn visit_input(&mut self, span: Span) -> Result<(), RuntimeError> {
        self.value = self
            .input
            .read_int()
            .map_err(|source| RuntimeError::Input { source, span })?;
        Ok(())
    }

    fn visit_assign_expr(
        &mut self,
        target: &Variable,
        value: &Expr,
        _span: Span,
    ) -> Result<(), RuntimeError> {
        let result = self.eval_expr(value)?;
        self.env.set(target.name, result);
        // The expression form yields the assigned value.
        self.value = result;
        Ok(())
    }

    fn visit_binary(
        &mut self,
        op: BinOp,
        left: &Expr,
        right: &Expr,
        span: Span,
    ) -> Result<(), RuntimeError> {
        // Strict left-to-right: the left operand's side effects land
        // before the right operand runs, even for `&&`/`||`.
        let left_value = self.eval_expr(left)?;
        let right_value = self.eval_expr(right)?;
        self.value = apply_binary(op, left_value, right_value, span)?;
        Ok(())
    }

    fn visit_unary(&mut self, op: UnOp, operand: &Expr, _span: Span) -> Result<(), RuntimeError> {
        let result = self.eval_expr(operand)?;
        self.value = apply_unary(op, result);
        Ok(())
    }
}

/// Run a program to completion, to a typed error, or forever.
pub fn evaluate(
    program: &Program,
    interner: &StringInterner,
    input: &mut impl InputSource,
    output: &mut impl OutputSink,
) -> Result<(), RuntimeError> {
    let mut evaluator = Evaluator::new(interner, input, output);
    let result = program.accept(&mut evaluator);
    tracing::debug!(ok = result.is_ok(), "evaluation finished");
    result
}
