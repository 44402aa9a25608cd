//! Stable, searchable error codes.

use std::fmt;

/// Error codes for every diagnostic the front end can produce.
///
/// `E0xxx` are parse-time, `E1xxx` are runtime.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// A token that no grammar production expects at this point.
    UnexpectedToken,
    /// A character the lexer cannot classify.
    UnknownCharacter,
    /// Input ended in the middle of a production.
    UnexpectedEof,
    /// Integer literal outside the representable range.
    IntegerOverflow,
    /// Read of a variable with no binding.
    UndefinedVariable,
    /// `/` or `%` with a zero right operand.
    DivisionByZero,
    /// The `?` read failed at the I/O boundary.
    InputFailed,
}

impl ErrorCode {
    /// The code as it appears in reports.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::UnexpectedToken => "E0001",
            ErrorCode::UnknownCharacter => "E0002",
            ErrorCode::UnexpectedEof => "E0003",
            ErrorCode::IntegerOverflow => "E0004",
            ErrorCode::UndefinedVariable => "E1001",
            ErrorCode::DivisionByZero => "E1002",
            ErrorCode::InputFailed => "E1003",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
