//! Recursive descent parser for Rill.
//!
//! The parser consumes the lexer's spanned tokens and builds the owned
//! tree through the `rill_ast` builder constructors, consulting the scope
//! table for declarations and lookups as it goes. Syntax errors are
//! accumulated (with statement-boundary recovery) so one run reports as
//! many problems as it can; the driver suppresses evaluation whenever any
//! error was collected.

mod cursor;
mod error;
mod grammar;
mod recovery;
pub mod scope;


pub use cursor::Cursor;
pub use error::ParseError;
pub use scope::ScopeStack;

use rill_ast::{Program, StringInterner, Token};
use rill_diagnostic::{Diagnostic, ErrorCode, ErrorCollector};
use rill_lexer::LexError;

/// Parser state.
pub struct Parser<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) scopes: ScopeStack,
    pub(crate) errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Create a parser over a token stream (which must end with `Eof`).
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            scopes: ScopeStack::new(),
            errors: Vec::new(),
        }
    }

    /// Parse a whole program.
    ///
    /// Always produces a `Program` (possibly partial) together with every
    /// syntax error encountered; callers must treat a non-empty error list
    /// as fatal for evaluation.
    pub fn parse_program(mut self) -> (Program, Vec<ParseError>) {
        let mut stmts = Vec::new();
        while !self.cursor.is_at_end() {
            match self.parse_stmt() {
                Ok(stmt) => stmts.push(stmt),
                Err(error) => {
                    self.errors.push(error);
                    self.synchronize();
                }
            }
        }
        tracing::debug!(
            statements = stmts.len(),
            errors = self.errors.len(),
            "parse complete"
        );
        (Program::new(stmts), self.errors)
    }
}

/// A parsed unit plus everything that went wrong producing it.
pub struct ParseOutcome {
    pub program: Program,
    /// Lex and parse diagnostics, sorted by source position.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutcome {
    /// Whether evaluation may proceed.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.iter().all(|d| !d.is_error())
    }
}

fn lex_error_code(error: &LexError) -> ErrorCode {
    match error {
        LexError::UnknownCharacter { .. } => ErrorCode::UnknownCharacter,
        LexError::IntegerOverflow { .. } => ErrorCode::IntegerOverflow,
    }
}

/// Lex and parse `source` in one step.
pub fn parse_source(source: &str, interner: &mut StringInterner) -> ParseOutcome {
    let (tokens, lex_errors) = rill_lexer::tokenize(source, interner);
    tracing::debug!(tokens = tokens.len(), lex_errors = lex_errors.len(), "lexed");

    let (program, parse_errors) = Parser::new(&tokens).parse_program();

    let mut collector = ErrorCollector::new();
    for error in lex_errors {
        let code = lex_error_code(&error);
        collector.push(Diagnostic::error(error.to_string(), error.span()).with_code(code));
    }
    for error in parse_errors {
        collector.push(error.into_diagnostic());
    }

    ParseOutcome {
        program,
        diagnostics: collector.into_sorted(),
    }
}
