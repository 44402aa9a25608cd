//! Operator application over integer values.
//!
//! Comparisons and logical operators yield 0/1 integers (the language
//! has no boolean type). Arithmetic is wrapping two's-complement, so
//! every defined program has a defined result and `i64::MIN / -1`
//! cannot trap. Division and remainder check the divisor first.

use rill_ast::{BinOp, Span, UnOp};

use crate::RuntimeError;

/// Apply a binary operator to fully evaluated operands.
pub fn apply_binary(op: BinOp, left: i64, right: i64, span: Span) -> Result<i64, RuntimeError> {
    let value = match op {
        BinOp::Add => left.wrapping_add(right),
        BinOp::Sub => left.wrapping_sub(right),
        BinOp::Mul => left.wrapping_mul(right),
        BinOp::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { span });
            }
            left.wrapping_div(right)
        }
        BinOp::Rem => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { span });
            }
            left.wrapping_rem(right)
        }
        BinOp::BitAnd => left & right,
        BinOp::BitXor => left ^ right,
        BinOp::BitOr => left | right,
        // Both operands were already evaluated; only the combination is
        // logical here.
        BinOp::And => i64::from(left != 0 && right != 0),
        BinOp::Or => i64::from(left != 0 || right != 0),
        BinOp::Eq => i64::from(left == right),
        BinOp::NotEq => i64::from(left != right),
        BinOp::Lt => i64::from(left < right),
        BinOp::LtEq => i64::from(left <= right),
        BinOp::Gt => i64::from(left > right),
        BinOp::GtEq => i64::from(left >= right),
    };
    Ok(value)
}

/// Apply a unary operator to a fully evaluated operand.
pub fn apply_unary(op: UnOp, value: i64) -> i64 {
    match op {
        UnOp::Neg => value.wrapping_neg(),
        UnOp::Plus => value,
        UnOp::Not => i64::from(value == 0),
    }
}
