//! Tree-walking evaluator for Rill.
//!
//! Execution is a depth-first traversal through the visitor protocol:
//! the [`Evaluator`] implements one handler per node kind and threads the
//! current expression value through a result slot, exactly one flat
//! [`Environment`] mapping names to integers. Any runtime error aborts
//! the whole evaluation immediately and surfaces as a typed
//! [`RuntimeError`]; nothing is ever swallowed or partially continued.
//!
//! The tree is read-only here: the single mutable thing during a run is
//! the environment (plus the I/O handles).

mod environment;
mod errors;
mod interpreter;
pub mod io;
mod operators;

#[cfg(test)]
mod tests;

pub use environment::Environment;
pub use errors::RuntimeError;
pub use interpreter::{evaluate, Evaluator};
pub use io::{CapturedOutput, InputSource, OutputSink, QueuedInput, StdinInput, StdoutOutput};
pub use operators::{apply_binary, apply_unary};
