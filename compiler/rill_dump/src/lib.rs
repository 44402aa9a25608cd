//! Graphviz export for Rill syntax trees.
//!
//! Renders a parsed [`Program`] as a DOT digraph of Mrecord nodes, one
//! per tree node, with edges from parent to child. Node kinds get
//! distinct fill colors so the shape of a tree is readable at a glance.
//! The export is a [`Visitor`] impl like every other traversal; it never
//! mutates the tree and is entirely optional at runtime (the driver only
//! runs it when asked for a dump).
//!
//! Feed the output to `dot -Tsvg` to get a picture.

use std::fmt::{self, Write};

use rill_ast::visitor::Visitor;
use rill_ast::{BinOp, Expr, Name, Program, Span, Stmt, StringInterner, UnOp, Variable};
use rill_stack::ensure_sufficient_stack;

/// Render `program` as a DOT digraph into `out`.
pub fn write_graphviz(
    program: &Program,
    interner: &StringInterner,
    out: &mut impl fmt::Write,
) -> fmt::Result {
    writeln!(out, "digraph ast {{")?;
    writeln!(out, "    rankdir=TB;")?;
    writeln!(
        out,
        "    node [shape=Mrecord; style=filled; fontname=\"Helvetica\"; \
         color=\"#252a34\"; fontcolor=\"#000000\"; penwidth=2.0];"
    )?;
    writeln!(out, "    bgcolor=\"lemonchiffon\";")?;
    writeln!(out)?;

    let mut writer = GraphWriter {
        out: &mut *out,
        interner,
        next_id: 0,
        parent: None,
    };
    program.accept(&mut writer)?;

    writeln!(out, "}}")
}

/// Render `program` as a DOT digraph string.
pub fn graphviz_string(program: &Program, interner: &StringInterner) -> String {
    let mut dot = String::new();
    // Writing into a String never fails.
    let _ = write_graphviz(program, interner, &mut dot);
    dot
}

/// The rendering visitor. Node ids are allocated in visit order; each
/// node emits its own record line plus the edge from its parent.
struct GraphWriter<'a, W> {
    out: &'a mut W,
    interner: &'a StringInterner,
    next_id: u32,
    parent: Option<u32>,
}

impl<W: fmt::Write> GraphWriter<'_, W> {
    /// Emit one record node and its incoming edge, returning its id.
    fn node(&mut self, fillcolor: &str, label: &str, span: Span) -> Result<u32, fmt::Error> {
        let id = self.next_id;
        self.next_id += 1;
        writeln!(
            self.out,
            "    n{id} [fillcolor={fillcolor}; label=\"{{ {label} | span: {span} }}\"];"
        )?;
        if let Some(parent) = self.parent {
            writeln!(self.out, "    n{parent} -> n{id};")?;
        }
        Ok(id)
    }

    /// Visit `node` with `id` as the current parent.
    fn child(&mut self, id: u32, node: &dyn Accept<W>) -> fmt::Result {
        let saved = self.parent.replace(id);
        // One stack frame per nesting level; grow on demand.
        let result = ensure_sufficient_stack(|| node.accept_dump(self));
        self.parent = saved;
        result
    }
}

/// Object-safe hook so [`GraphWriter::child`] takes statements and
/// expressions uniformly.
trait Accept<W> {
    fn accept_dump(&self, writer: &mut GraphWriter<'_, W>) -> fmt::Result;
}

impl<W: fmt::Write> Accept<W> for Stmt {
    fn accept_dump(&self, writer: &mut GraphWriter<'_, W>) -> fmt::Result {
        self.accept(writer)
    }
}

impl<W: fmt::Write> Accept<W> for Expr {
    fn accept_dump(&self, writer: &mut GraphWriter<'_, W>) -> fmt::Result {
        self.accept(writer)
    }
}

/// Escape the characters that delimit record labels.
fn escape(symbol: &str) -> String {
    let mut escaped = String::with_capacity(symbol.len());
    for c in symbol.chars() {
        if matches!(c, '{' | '}' | '<' | '>' | '|') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl<W: fmt::Write> Visitor for GraphWriter<'_, W> {
    type Error = fmt::Error;

    fn visit_program(&mut self, program: &Program) -> fmt::Result {
        let label = format!("Program | stmts: {}", program.stmts().len());
        let id = self.node("salmon", &label, Span::DUMMY)?;
        for stmt in program.stmts() {
            self.child(id, stmt)?;
        }
        Ok(())
    }

    fn visit_empty(&mut self, span: Span) -> fmt::Result {
        self.node("lavenderblush1", "Empty", span)?;
        Ok(())
    }

    fn visit_block(&mut self, stmts: &[Stmt], span: Span) -> fmt::Result {
        let label = format!("Block | stmts: {}", stmts.len());
        let id = self.node("lightgoldenrod1", &label, span)?;
        for stmt in stmts {
            self.child(id, stmt)?;
        }
        Ok(())
    }

    fn visit_assign_stmt(&mut self, target: &Variable, value: &Expr, span: Span) -> fmt::Result {
        let label = format!("Assign | target: {}", self.interner.resolve(target.name));
        let id = self.node("plum", &label, span)?;
        self.child(id, value)
    }

    fn visit_if(
        &mut self,
        cond: &Expr,
        then_branch: &Stmt,
        else_branch: Option<&Stmt>,
        span: Span,
    ) -> fmt::Result {
        let label = if else_branch.is_some() {
            "If | {cond | then | else}"
        } else {
            "If | {cond | then}"
        };
        let id = self.node("turquoise", label, span)?;
        self.child(id, cond)?;
        self.child(id, then_branch)?;
        if let Some(other) = else_branch {
            self.child(id, other)?;
        }
        Ok(())
    }

    fn visit_while(&mut self, cond: &Expr, body: &Stmt, span: Span) -> fmt::Result {
        let id = self.node("turquoise", "While | {cond | body}", span)?;
        self.child(id, cond)?;
        self.child(id, body)
    }

    fn visit_print(&mut self, value: &Expr, span: Span) -> fmt::Result {
        let id = self.node("darkorange", "Print", span)?;
        self.child(id, value)
    }

    fn visit_number(&mut self, value: i64, span: Span) -> fmt::Result {
        let label = format!("Number | value: {value}");
        self.node("palegreen", &label, span)?;
        Ok(())
    }

    fn visit_variable(&mut self, name: Name, span: Span) -> fmt::Result {
        let label = format!("Variable | name: {}", self.interner.resolve(name));
        self.node("cornflowerblue", &label, span)?;
        Ok(())
    }

    fn visit_input(&mut self, span: Span) -> fmt::Result {
        self.node("lavenderblush1", "Input", span)?;
        Ok(())
    }

    fn visit_assign_expr(&mut self, target: &Variable, value: &Expr, span: Span) -> fmt::Result {
        let label = format!(
            "Assign expr | target: {}",
            self.interner.resolve(target.name)
        );
        let id = self.node("plum", &label, span)?;
        self.child(id, value)
    }

    fn visit_binary(&mut self, op: BinOp, left: &Expr, right: &Expr, span: Span) -> fmt::Result {
        let label = format!("Binary | op: {}", escape(op.as_symbol()));
        let id = self.node("lightsteelblue1", &label, span)?;
        self.child(id, left)?;
        self.child(id, right)
    }

    fn visit_unary(&mut self, op: UnOp, operand: &Expr, span: Span) -> fmt::Result {
        let label = format!("Unary | op: {}", escape(op.as_symbol()));
        let id = self.node("lightsteelblue1", &label, span)?;
        self.child(id, operand)
    }
}
