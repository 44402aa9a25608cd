//! Diagnostics for the Rill front end.
//!
//! Parse-time errors are accumulated with their source position rather
//! than failing on the first occurrence, so one run reports every problem
//! it can find; any accumulated error suppresses evaluation. Runtime
//! errors are converted into the same [`Diagnostic`] shape at the
//! presentation boundary, so the driver renders everything one way.
//!
//! Rendering goes through `ariadne` for source-annotated terminal output.

mod collector;
mod diagnostic;
mod emitter;
mod error_code;

pub use collector::ErrorCollector;
pub use diagnostic::{Diagnostic, Label, Severity};
pub use emitter::{emit, emit_all};
pub use error_code::ErrorCode;
