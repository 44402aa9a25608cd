//! Error accumulation.

use crate::{Diagnostic, Severity};

/// Accumulates diagnostics across a whole front-end pass.
///
/// The parser keeps going after an error (synchronizing to the next
/// statement boundary), so a single run can report several problems.
/// Reports come out sorted by source position regardless of discovery
/// order.
#[derive(Default, Debug)]
pub struct ErrorCollector {
    diagnostics: Vec<Diagnostic>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        ErrorCollector::default()
    }

    /// Record a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Whether any error-severity diagnostic was recorded.
    ///
    /// Warnings and notes do not suppress evaluation; errors do.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Number of recorded error-severity diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// Total number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// All diagnostics, sorted by primary span start.
    pub fn into_sorted(mut self) -> Vec<Diagnostic> {
        self.diagnostics
            .sort_by_key(|d| (d.span.start, d.span.end));
        self.diagnostics
    }

    /// Borrowing view in recording order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorCollector;
    use crate::Diagnostic;
    use rill_ast::Span;

    #[test]
    fn sorts_by_position() {
        let mut collector = ErrorCollector::new();
        collector.push(Diagnostic::error("late", Span::new(40, 42)));
        collector.push(Diagnostic::error("early", Span::new(3, 7)));
        assert!(collector.has_errors());
        assert_eq!(collector.error_count(), 2);

        let sorted = collector.into_sorted();
        assert_eq!(sorted[0].message, "early");
        assert_eq!(sorted[1].message, "late");
    }

    #[test]
    fn warnings_do_not_count_as_errors() {
        let mut collector = ErrorCollector::new();
        collector.push(Diagnostic::warning("odd", Span::new(0, 1)));
        assert!(!collector.has_errors());
        assert_eq!(collector.len(), 1);
    }
}
