use pretty_assertions::assert_eq;

use rill_ast::StringInterner;

use crate::io::{CapturedOutput, QueuedInput};
use crate::tests::{parse_clean, run};
use crate::{Evaluator, RuntimeError};

#[test]
fn counting_loop_prints_each_value() {
    let printed = run(
        "n = 5;\n\
         i = 1;\n\
         while (i < n) {\n\
             print i;\n\
             i = i + 1;\n\
         }\n",
        &[],
    )
    .unwrap();
    assert_eq!(printed, vec![1, 2, 3, 4]);
}

#[test]
fn if_else_takes_the_right_branch() {
    let printed = run("x = 3; if (x > 2) print 1; else print 0;", &[]).unwrap();
    assert_eq!(printed, vec![1]);
    let printed = run("x = 3; if (x > 10) print 1; else print 0;", &[]).unwrap();
    assert_eq!(printed, vec![0]);
}

#[test]
fn if_without_else_skips_on_false() {
    let printed = run("if (0) print 99; print 7;", &[]).unwrap();
    assert_eq!(printed, vec![7]);
}

#[test]
fn input_values_feed_the_program() {
    let printed = run("a = ?; b = ?; print a + b;", &[20, 22]).unwrap();
    assert_eq!(printed, vec![42]);
}

#[test]
fn exhausted_input_is_a_runtime_error() {
    let err = run("a = ?;", &[]).unwrap_err();
    assert!(matches!(err, RuntimeError::Input { .. }));
}

#[test]
fn assignment_expression_yields_its_value() {
    // `x = 3` inside the expression both binds x and evaluates to 3,
    // and the binding is visible to the right operand.
    let printed = run("print (x = 3) + x;", &[]).unwrap();
    assert_eq!(printed, vec![6]);
}

#[test]
fn chained_assignment_threads_one_value() {
    let printed = run("a = b = c = 9; print a; print b; print c;", &[]).unwrap();
    assert_eq!(printed, vec![9, 9, 9]);
}

#[test]
fn logical_operators_do_not_short_circuit() {
    // The right operand of `&&` runs even when the left is false.
    let printed = run("x = 0; y = 0 && (x = 5); print x; print y;", &[]).unwrap();
    assert_eq!(printed, vec![5, 0]);
    let printed = run("x = 0; y = 1 || (x = 5); print x; print y;", &[]).unwrap();
    assert_eq!(printed, vec![5, 1]);
}

#[test]
fn operands_evaluate_left_to_right() {
    let printed = run("x = 1; print (x = 10) + (x = 2); print x;", &[]).unwrap();
    assert_eq!(printed, vec![12, 2]);
}

#[test]
fn division_by_zero_aborts_before_printing() {
    let err = run("print 1; x = 10 / 0; print 2;", &[]).unwrap_err();
    assert!(matches!(err, RuntimeError::DivisionByZero { .. }));
}

#[test]
fn division_by_zero_reports_the_offending_span() {
    let source = "x = 6 % 0;";
    let err = run(source, &[]).unwrap_err();
    let span = err.span();
    assert_eq!(&source[span.range()], "6 % 0");
}

#[test]
fn runtime_error_stops_midway() {
    // The first print runs; the loop body's failure kills the rest.
    let mut interner = StringInterner::new();
    let program = parse_clean("print 1; i = 3; while (i) { i = i - 1; x = 1 / i; }", &mut interner);
    let mut input = QueuedInput::new([]);
    let mut output = CapturedOutput::new();
    let err = crate::evaluate(&program, &interner, &mut input, &mut output).unwrap_err();
    assert!(matches!(err, RuntimeError::DivisionByZero { .. }));
    assert_eq!(output.values(), &[1]);
}

#[test]
fn blocks_share_the_flat_environment() {
    // Inner blocks write through to the single environment.
    let printed = run("x = 1; { x = 2; { x = x + 1; } } print x;", &[]).unwrap();
    assert_eq!(printed, vec![3]);
}

#[test]
fn final_environment_is_observable() {
    let mut interner = StringInterner::new();
    let program = parse_clean("x = 2; y = x * x;", &mut interner);
    let x = interner.intern("x");
    let y = interner.intern("y");
    let mut input = QueuedInput::new([]);
    let mut output = CapturedOutput::new();
    let mut evaluator = Evaluator::new(&interner, &mut input, &mut output);
    program.accept(&mut evaluator).unwrap();
    assert_eq!(evaluator.env().get(x), Some(2));
    assert_eq!(evaluator.env().get(y), Some(4));
    assert_eq!(evaluator.env().len(), 2);
}

#[test]
fn overflow_wraps_through_the_full_pipeline() {
    let printed = run(&format!("print {} + 1;", i64::MAX), &[]).unwrap();
    assert_eq!(printed, vec![i64::MIN]);
}

#[test]
fn unary_and_precedence_mix() {
    let printed = run("print -2 * 3 + 1; print !0 + !5;", &[]).unwrap();
    assert_eq!(printed, vec![-5, 1]);
}

#[test]
fn undefined_variable_is_a_runtime_error() {
    // Parsing is name-agnostic for reads; the failure is at runtime.
    let err = run("print ghost;", &[]).unwrap_err();
    match err {
        RuntimeError::UndefinedVariable { name, .. } => assert_eq!(name, "ghost"),
        other => panic!("expected undefined variable, got {other:?}"),
    }
}
