//! ALU arithmetic operations.
//!
//! Implements 32-bit addition and subtraction with carry and overflow.
//! Subtraction is computed as `a + !b + 1`, so its carry is set when no
//! borrow occurs.

use super::AluOutput;
use crate::isa::opcodes::AluOp;

/// Returns the sign bit of a 32-bit value.
#[inline]
const fn sign(val: u32) -> u32 {
    val >> 31
}

/// Adds `a`, `b` and `carry_in` and derives carry and overflow.
///
/// Overflow is set when both addends share a sign bit and the result's sign
/// bit differs from it.
const fn add_with_carry(a: u32, b: u32, carry_in: u32) -> AluOutput {
    let wide = a as u64 + b as u64 + carry_in as u64;
    let value = wide as u32;
    AluOutput {
        value,
        carry: wide >> 32 != 0,
        overflow: sign(a) == sign(b) && sign(a) != sign(value),
    }
}

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be `Add` or `Sub`).
/// * `a`  - Operand A.
/// * `b`  - Operand B; subtracted from `a` for `Sub`.
///
/// Returns a zero result for non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> AluOutput {
    match op {
        AluOp::Add => add_with_carry(a, b, 0),
        AluOp::Sub => add_with_carry(a, !b, 1),
        _ => AluOutput::plain(0),
    }
}
