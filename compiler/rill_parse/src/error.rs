//! Parse errors.

use rill_ast::{Span, TokenKind};
use rill_diagnostic::{Diagnostic, ErrorCode};

/// A syntax error with its source span.
///
/// The parser accumulates these instead of stopping at the first one;
/// the driver converts them to diagnostics for rendering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at {span}")]
pub struct ParseError {
    pub message: String,
    pub span: Span,
    pub code: ErrorCode,
}

impl ParseError {
    /// A token that no production expects here.
    pub fn unexpected(expected: &str, found: TokenKind, span: Span) -> Self {
        let code = if found == TokenKind::Eof {
            ErrorCode::UnexpectedEof
        } else {
            ErrorCode::UnexpectedToken
        };
        ParseError {
            message: format!("expected {expected}, found {found}", found = found.describe()),
            span,
            code,
        }
    }

    /// Convert into a renderable diagnostic.
    pub fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::error(self.message, self.span).with_code(self.code)
    }
}

