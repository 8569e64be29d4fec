//! ALU logical operations.
//!
//! Implements bitwise OR, XOR, AND and bit clear. None of them define carry
//! or overflow; both are always reported clear.

use super::AluOutput;
use crate::isa::opcodes::AluOp;

/// Executes a logical operation.
///
/// Returns a zero result for non-logic opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> AluOutput {
    let value = match op {
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::And => a & b,
        AluOp::Bic => a & !b,
        _ => 0,
    };
    AluOutput::plain(value)
}
