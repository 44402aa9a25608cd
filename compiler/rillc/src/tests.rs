use pretty_assertions::assert_eq;

use rill_eval::{CapturedOutput, QueuedInput};

use crate::{run_source, RunOptions, RunStatus};

struct Run {
    status: RunStatus,
    printed: Vec<i64>,
    diagnostics: String,
}

fn run(source: &str, inputs: &[i64], options: &RunOptions) -> Run {
    let mut input = QueuedInput::new(inputs.iter().copied());
    let mut output = CapturedOutput::new();
    let mut diag_out = Vec::new();
    let status = run_source(
        source,
        "test.rill",
        options,
        &mut input,
        &mut output,
        false,
        &mut diag_out,
    );
    Run {
        status,
        printed: output.values().to_vec(),
        diagnostics: String::from_utf8(diag_out).unwrap(),
    }
}

#[test]
fn clean_program_runs_to_completion() {
    let run = run("x = ?; print x * 2;", &[21], &RunOptions::default());
    assert_eq!(run.status, RunStatus::Success);
    assert_eq!(run.printed, vec![42]);
    assert_eq!(run.diagnostics, "");
    assert_eq!(run.status.exit_code(), 0);
}

#[test]
fn parse_errors_suppress_evaluation() {
    // The first statement would print; the second fails to parse.
    let run = run("print 1; print ;", &[], &RunOptions::default());
    assert_eq!(run.status, RunStatus::CompileError);
    assert_eq!(run.printed, Vec::<i64>::new());
    assert!(run.diagnostics.contains("E0001"), "{}", run.diagnostics);
    assert_eq!(run.status.exit_code(), 1);
}

#[test]
fn quiet_mode_still_reports_failure_in_the_status() {
    let options = RunOptions {
        quiet: true,
        ..RunOptions::default()
    };
    let run = run("print ;", &[], &options);
    assert_eq!(run.status, RunStatus::CompileError);
    assert_eq!(run.diagnostics, "");
}

#[test]
fn runtime_errors_render_as_diagnostics() {
    let run = run("print ghost;", &[], &RunOptions::default());
    assert_eq!(run.status, RunStatus::RuntimeError);
    assert!(run.diagnostics.contains("E1001"), "{}", run.diagnostics);
    assert!(
        run.diagnostics.contains("undefined variable `ghost`"),
        "{}",
        run.diagnostics
    );
}

#[test]
fn output_before_a_runtime_error_is_kept() {
    let run = run("print 1; print 1 / 0;", &[], &RunOptions::default());
    assert_eq!(run.status, RunStatus::RuntimeError);
    assert_eq!(run.printed, vec![1]);
    assert!(run.diagnostics.contains("E1002"), "{}", run.diagnostics);
}

#[test]
fn dump_ast_writes_a_dot_file() {
    let path = std::env::temp_dir().join("rillc_dump_ast_test.gv");
    let options = RunOptions {
        dump_ast: Some(path.clone()),
        ..RunOptions::default()
    };
    let run = run("print 1 + 2;", &[], &options);
    assert_eq!(run.status, RunStatus::Success);

    let dot = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert!(dot.starts_with("digraph ast {"));
    assert!(dot.contains("Binary"));
}

#[test]
fn multiple_parse_errors_all_render() {
    let run = run("print ; x = $; print 3;", &[], &RunOptions::default());
    assert_eq!(run.status, RunStatus::CompileError);
    // One parse error and one lexer error, both rendered.
    assert!(run.diagnostics.contains("E0001"), "{}", run.diagnostics);
    assert!(run.diagnostics.contains("E0002"), "{}", run.diagnostics);
}
