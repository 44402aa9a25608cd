//! Tree construction, traversal and teardown tests.

use pretty_assertions::assert_eq;

use crate::ast::{Expr, Program, Stmt, Variable};
use crate::visitor::{walk_assign, walk_if, walk_stmts};
use crate::{BinOp, Name, Span, StringInterner, UnOp, Visitor};

const DEEP: usize = 100_000;

/// Counts every node visit; used to check the visit-once property.
#[derive(Default)]
struct CountNodes {
    count: usize,
}

impl Visitor for CountNodes {
    type Error = std::convert::Infallible;

    fn visit_empty(&mut self, _span: Span) -> Result<(), Self::Error> {
        self.count += 1;
        Ok(())
    }

    fn visit_block(&mut self, stmts: &[Stmt], _span: Span) -> Result<(), Self::Error> {
        self.count += 1;
        walk_stmts(self, stmts)
    }

    fn visit_assign_stmt(
        &mut self,
        target: &Variable,
        value: &Expr,
        _span: Span,
    ) -> Result<(), Self::Error> {
        self.count += 1;
        walk_assign(self, target, value)
    }

    fn visit_if(
        &mut self,
        cond: &Expr,
        then_branch: &Stmt,
        else_branch: Option<&Stmt>,
        _span: Span,
    ) -> Result<(), Self::Error> {
        self.count += 1;
        walk_if(self, cond, then_branch, else_branch)
    }

    fn visit_while(&mut self, cond: &Expr, body: &Stmt, _span: Span) -> Result<(), Self::Error> {
        self.count += 1;
        cond.accept(self)?;
        body.accept(self)
    }

    fn visit_print(&mut self, value: &Expr, _span: Span) -> Result<(), Self::Error> {
        self.count += 1;
        value.accept(self)
    }

    fn visit_number(&mut self, _value: i64, _span: Span) -> Result<(), Self::Error> {
        self.count += 1;
        Ok(())
    }

    fn visit_variable(&mut self, _name: Name, _span: Span) -> Result<(), Self::Error> {
        self.count += 1;
        Ok(())
    }

    fn visit_input(&mut self, _span: Span) -> Result<(), Self::Error> {
        self.count += 1;
        Ok(())
    }

    fn visit_assign_expr(
        &mut self,
        target: &Variable,
        value: &Expr,
        _span: Span,
    ) -> Result<(), Self::Error> {
        self.count += 1;
        walk_assign(self, target, value)
    }

    fn visit_binary(
        &mut self,
        _op: BinOp,
        left: &Expr,
        right: &Expr,
        _span: Span,
    ) -> Result<(), Self::Error> {
        self.count += 1;
        left.accept(self)?;
        right.accept(self)
    }

    fn visit_unary(&mut self, _op: UnOp, operand: &Expr, _span: Span) -> Result<(), Self::Error> {
        self.count += 1;
        operand.accept(self)
    }
}

fn var(interner: &mut StringInterner, text: &str) -> Variable {
    Variable::new(interner.intern(text), Span::DUMMY)
}

#[test]
fn visitor_visits_every_node_once() {
    let mut interner = StringInterner::new();
    let x = var(&mut interner, "x");

    // x = 1; while (x < 3) { print x; x = x + 1; }
    let s = Span::DUMMY;
    let program = Program::new(vec![
        Stmt::assign(x, Expr::number(1, s), s),
        Stmt::while_stmt(
            Expr::binary(
                BinOp::Lt,
                Expr::variable(x.name, s),
                Expr::number(3, s),
                s,
            ),
            Stmt::block(
                vec![
                    Stmt::print(Expr::variable(x.name, s), s),
                    Stmt::assign(
                        x,
                        Expr::binary(
                            BinOp::Add,
                            Expr::variable(x.name, s),
                            Expr::number(1, s),
                            s,
                        ),
                        s,
                    ),
                ],
                s,
            ),
            s,
        ),
    ]);

    let mut counter = CountNodes::default();
    program.accept(&mut counter).unwrap();
    // assign(tgt,1) = 3 nodes; while + (x<3) = 4; block = 1;
    // print x = 2; assign(tgt, x+1) = 5.
    assert_eq!(counter.count, 15);
}

#[test]
fn deep_expression_chain_drops_without_overflow() {
    let s = Span::DUMMY;
    // Right-leaning: each new node owns the previous chain as its right
    // operand. Built iteratively; the point of the test is the drop.
    let mut expr = Expr::number(0, s);
    for _ in 0..DEEP {
        expr = Expr::binary(BinOp::Add, Expr::number(1, s), expr, s);
    }
    drop(expr);
}

#[test]
fn deep_statement_nesting_drops_without_overflow() {
    let s = Span::DUMMY;
    let mut stmt = Stmt::empty(s);
    for _ in 0..DEEP {
        stmt = Stmt::block(vec![stmt], s);
    }
    drop(stmt);
}

#[test]
fn deep_mixed_nesting_drops_without_overflow() {
    let mut interner = StringInterner::new();
    let x = var(&mut interner, "x");
    let s = Span::DUMMY;

    // Alternate statement and expression nesting through if/while bodies
    // and assignment expressions.
    let mut stmt = Stmt::print(Expr::number(0, s), s);
    for i in 0..DEEP {
        stmt = if i % 2 == 0 {
            Stmt::if_stmt(
                Expr::unary(UnOp::Not, Expr::assign(x, Expr::input(s), s), s),
                stmt,
                None,
                s,
            )
        } else {
            Stmt::while_stmt(Expr::number(0, s), stmt, s)
        };
    }
    drop(stmt);
}

#[test]
fn program_drop_releases_all_top_level_statements() {
    let s = Span::DUMMY;
    let mut stmts = Vec::new();
    for _ in 0..64 {
        let mut chain = Expr::number(0, s);
        for _ in 0..1_000 {
            chain = Expr::unary(UnOp::Neg, chain, s);
        }
        stmts.push(Stmt::print(chain, s));
    }
    drop(Program::new(stmts));
}
