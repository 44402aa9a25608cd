//! Input and output handles for evaluation.
//!
//! The evaluator talks to abstract handles so output can go to stdout in
//! the driver and to a capture buffer in tests, and so `?` reads can be
//! fed from stdin or from a queue. Malformed interactive input is handled
//! here, at the I/O boundary: the stdin handle re-prompts on lines that
//! do not parse and only reports genuine I/O failures (such as end of
//! input) upward.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Source for the `?` operator: one blocking integer read per call.
pub trait InputSource {
    fn read_int(&mut self) -> io::Result<i64>;
}

/// Sink for `print`: one integer per line.
pub trait OutputSink {
    fn write_int(&mut self, value: i64);
}

/// Reads integers from stdin, one per line, re-prompting on garbage.
#[derive(Default)]
pub struct StdinInput;

impl InputSource for StdinInput {
    fn read_int(&mut self) -> io::Result<i64> {
        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "end of input while reading `?`",
                ));
            }
            match line.trim().parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    // Not an integer; ask again rather than failing the run.
                    eprint!("expected an integer, try again: ");
                    io::stderr().flush()?;
                }
            }
        }
    }
}

/// Feeds pre-queued integers; empty queue reports end of input.
#[derive(Default)]
pub struct QueuedInput {
    values: VecDeque<i64>,
}

impl QueuedInput {
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        QueuedInput {
            values: values.into_iter().collect(),
        }
    }
}

impl InputSource for QueuedInput {
    fn read_int(&mut self) -> io::Result<i64> {
        self.values.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "input queue exhausted")
        })
    }
}

/// Writes each printed value to stdout on its own line.
#[derive(Default)]
pub struct StdoutOutput;

impl OutputSink for StdoutOutput {
    fn write_int(&mut self, value: i64) {
        println!("{value}");
    }
}

/// Captures printed values for assertions.
#[derive(Default, Debug)]
pub struct CapturedOutput {
    values: Vec<i64>,
}

impl CapturedOutput {
    pub fn new() -> Self {
        CapturedOutput::default()
    }

    /// Everything printed so far, in order.
    pub fn values(&self) -> &[i64] {
        &self.values
    }
}

impl OutputSink for CapturedOutput {
    fn write_int(&mut self, value: i64) {
        self.values.push(value);
    }
}
