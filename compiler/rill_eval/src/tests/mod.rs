mod eval_tests;

use rill_ast::{Program, StringInterner};
use rill_parse::parse_source;

use crate::io::{CapturedOutput, QueuedInput};
use crate::{evaluate, RuntimeError};

/// Parse and run `source`, returning the printed values or the runtime
/// error. Panics if the source does not parse cleanly; these tests are
/// about runtime behavior, not recovery.
fn run(source: &str, inputs: &[i64]) -> Result<Vec<i64>, RuntimeError> {
    let mut interner = StringInterner::new();
    let outcome = parse_source(source, &mut interner);
    assert!(
        outcome.is_clean(),
        "test program failed to parse: {:?}",
        outcome.diagnostics
    );
    let mut input = QueuedInput::new(inputs.iter().copied());
    let mut output = CapturedOutput::new();
    evaluate(&outcome.program, &interner, &mut input, &mut output)?;
    Ok(output.values().to_vec())
}

fn parse_clean(source: &str, interner: &mut StringInterner) -> Program {
    let outcome = parse_source(source, interner);
    assert!(outcome.is_clean());
    outcome.program
}
