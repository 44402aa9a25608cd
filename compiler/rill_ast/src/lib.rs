//! Syntax tree types for the Rill interpreter.
//!
//! The tree is strictly owned: every interior node exclusively owns its
//! children, there is no sharing and no cycles, and the structure is
//! immutable once built. Construction goes through the builder methods on
//! [`Expr`], [`Stmt`] and [`Program`] (the node fields are private), which
//! take already-owned children by value.
//!
//! Releasing the root tears the whole tree down iteratively with bounded
//! stack depth, see `ast::teardown`.

pub mod ast;
mod interner;
mod operators;
mod span;
mod token;
pub mod visitor;

pub use ast::{Expr, ExprKind, Program, Stmt, StmtKind, Variable};
pub use interner::{Name, StringInterner};
pub use operators::{BinOp, UnOp};
pub use span::Span;
pub use token::{Token, TokenKind};
pub use visitor::Visitor;
