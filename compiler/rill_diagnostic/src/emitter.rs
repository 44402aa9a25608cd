//! Terminal rendering via ariadne.

use std::io;

use ariadne::{Color, Config, Label as AriadneLabel, Report, ReportKind, Source};

use crate::{Diagnostic, Severity};

fn report_kind(severity: Severity) -> ReportKind<'static> {
    match severity {
        Severity::Error => ReportKind::Error,
        Severity::Warning => ReportKind::Warning,
        Severity::Note => ReportKind::Advice,
    }
}

fn primary_color(severity: Severity) -> Color {
    match severity {
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
        Severity::Note => Color::Cyan,
    }
}

/// Render one diagnostic against its source text.
///
/// `file_id` is the display name of the source (usually the path).
/// `color` controls ANSI escapes; pass `false` when the output is not a
/// terminal.
pub fn emit(
    diagnostic: &Diagnostic,
    file_id: &str,
    source: &str,
    color: bool,
    out: &mut impl io::Write,
) -> io::Result<()> {
    let mut report = Report::build(
        report_kind(diagnostic.severity),
        file_id,
        diagnostic.span.start as usize,
    )
    .with_config(Config::default().with_color(color))
    .with_message(&diagnostic.message)
    .with_label(
        AriadneLabel::new((file_id, diagnostic.span.range()))
            .with_message(&diagnostic.message)
            .with_color(primary_color(diagnostic.severity)),
    );

    if let Some(code) = diagnostic.code {
        report = report.with_code(code);
    }
    for label in &diagnostic.labels {
        report = report.with_label(
            AriadneLabel::new((file_id, label.span.range()))
                .with_message(&label.message)
                .with_color(Color::Blue),
        );
    }
    for note in &diagnostic.notes {
        report = report.with_note(note);
    }

    report
        .finish()
        .write((file_id, Source::from(source)), &mut *out)
}

/// Render a batch of diagnostics in order.
pub fn emit_all<'a>(
    diagnostics: impl IntoIterator<Item = &'a Diagnostic>,
    file_id: &str,
    source: &str,
    color: bool,
    out: &mut impl io::Write,
) -> io::Result<()> {
    for diagnostic in diagnostics {
        emit(diagnostic, file_id, source, color, out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::emit;
    use crate::{Diagnostic, ErrorCode};
    use rill_ast::Span;

    #[test]
    fn renders_message_and_code() {
        let source = "print 7 / 0;\n";
        let diagnostic = Diagnostic::error("division by zero", Span::new(6, 11))
            .with_code(ErrorCode::DivisionByZero);

        let mut out = Vec::new();
        emit(&diagnostic, "test.rill", source, false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("division by zero"));
        assert!(text.contains("E1002"));
    }
}
