//! Driver pipeline for the `rill` binary.
//!
//! One command, one pipeline: read the source file, lex and parse it,
//! render any accumulated diagnostics, and only when the parse is clean
//! hand the tree to the evaluator. Runtime errors come back as typed
//! values and are rendered through the same diagnostic path as parse
//! errors. The optional Graphviz dump runs between parsing and
//! evaluation, so a tree can be inspected even when the program then
//! fails at runtime.

use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::Once;

use rill_ast::StringInterner;
use rill_diagnostic::{emit, emit_all};
use rill_eval::{evaluate, InputSource, OutputSink, StdinInput, StdoutOutput};
use rill_parse::parse_source;

#[cfg(test)]
mod tests;

/// Options for the `run` command.
#[derive(Debug, Default)]
pub struct RunOptions {
    /// Write a Graphviz dump of the parsed tree to this path.
    pub dump_ast: Option<PathBuf>,
    /// Suppress diagnostic rendering; the exit status still reflects
    /// what happened.
    pub quiet: bool,
}

/// How a run ended. `main` maps this to the process exit code.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    /// The source did not parse; nothing was evaluated.
    CompileError,
    /// The program started and hit a runtime error.
    RuntimeError,
    /// The source file or a dump path could not be accessed.
    IoError,
}

impl RunStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            RunStatus::Success => 0,
            _ => 1,
        }
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing from the `RILL_LOG` environment variable.
///
/// Does nothing when the variable is unset. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if let Ok(filter) = std::env::var("RILL_LOG") {
            use tracing_subscriber::{fmt, prelude::*, EnvFilter};
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(io::stderr))
                .with(EnvFilter::new(filter))
                .init();
        }
    });
}

/// Run a source file with real stdin/stdout attached.
pub fn run_file(path: &str, options: &RunOptions) -> RunStatus {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            let reason = match error.kind() {
                io::ErrorKind::NotFound => format!("cannot find file `{path}`"),
                io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading `{path}`")
                }
                io::ErrorKind::InvalidData => format!("`{path}` is not valid UTF-8"),
                _ => format!("error reading `{path}`: {error}"),
            };
            eprintln!("error: {reason}");
            return RunStatus::IoError;
        }
    };

    let color = io::stderr().is_terminal();
    let mut input = StdinInput;
    let mut output = StdoutOutput;
    run_source(
        &source,
        path,
        options,
        &mut input,
        &mut output,
        color,
        &mut io::stderr(),
    )
}

/// The pipeline proper, with every endpoint injectable.
///
/// `file_id` names the source in rendered diagnostics (usually the
/// path); `diag_out` receives the rendered diagnostics.
pub fn run_source(
    source: &str,
    file_id: &str,
    options: &RunOptions,
    input: &mut impl InputSource,
    output: &mut impl OutputSink,
    color: bool,
    diag_out: &mut impl io::Write,
) -> RunStatus {
    let mut interner = StringInterner::new();
    let outcome = parse_source(source, &mut interner);
    tracing::debug!(
        stmts = outcome.program.stmts().len(),
        diagnostics = outcome.diagnostics.len(),
        "parsed {file_id}"
    );

    if !outcome.is_clean() {
        if !options.quiet {
            // Rendering failures on a closed stderr are not actionable.
            let _ = emit_all(&outcome.diagnostics, file_id, source, color, diag_out);
        }
        return RunStatus::CompileError;
    }

    if let Some(path) = &options.dump_ast {
        let dot = rill_dump::graphviz_string(&outcome.program, &interner);
        if let Err(error) = fs::write(path, dot) {
            eprintln!("error: cannot write `{}`: {error}", path.display());
            return RunStatus::IoError;
        }
    }

    match evaluate(&outcome.program, &interner, input, output) {
        Ok(()) => RunStatus::Success,
        Err(error) => {
            if !options.quiet {
                let diagnostic = error.into_diagnostic();
                let _ = emit(&diagnostic, file_id, source, color, diag_out);
            }
            RunStatus::RuntimeError
        }
    }
}
