//! Runtime errors.

use rill_ast::Span;
use rill_diagnostic::{Diagnostic, ErrorCode};

/// A runtime failure. Any of these aborts the evaluation that produced
/// it; the caller owns presentation.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// Read of a variable that was never assigned.
    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: String, span: Span },

    /// `/` or `%` with a zero right operand.
    #[error("division by zero")]
    DivisionByZero { span: Span },

    /// The `?` read failed at the I/O boundary.
    #[error("input read failed: {source}")]
    Input {
        #[source]
        source: std::io::Error,
        span: Span,
    },
}

impl RuntimeError {
    /// The source span the error points at.
    pub fn span(&self) -> Span {
        match self {
            RuntimeError::UndefinedVariable { span, .. }
            | RuntimeError::DivisionByZero { span }
            | RuntimeError::Input { span, .. } => *span,
        }
    }

    /// The matching diagnostic code.
    pub fn code(&self) -> ErrorCode {
        match self {
            RuntimeError::UndefinedVariable { .. } => ErrorCode::UndefinedVariable,
            RuntimeError::DivisionByZero { .. } => ErrorCode::DivisionByZero,
            RuntimeError::Input { .. } => ErrorCode::InputFailed,
        }
    }

    /// Convert into a renderable diagnostic.
    pub fn into_diagnostic(self) -> Diagnostic {
        let span = self.span();
        let code = self.code();
        Diagnostic::error(self.to_string(), span).with_code(code)
    }
}
