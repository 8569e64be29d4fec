//! ALU rotate operations.
//!
//! `ROL` rotates operand B left by the low five bits of operand A. Carry is
//! the low bit of the result (the last bit rotated around) and overflow is
//! set when the rotation changed the sign bit.

use super::AluOutput;
use crate::isa::opcodes::AluOp;

/// Bit mask for the rotate amount (5 bits: 0-31).
const ROTATE_MASK: u32 = 0x1F;

/// Executes a rotate operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be `Rol`).
/// * `a`  - Rotate amount; only the low five bits are used.
/// * `b`  - The value to rotate.
///
/// Returns a zero result for non-rotate opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> AluOutput {
    match op {
        AluOp::Rol => {
            let value = b.rotate_left(a & ROTATE_MASK);
            AluOutput {
                value,
                carry: value & 1 != 0,
                overflow: (b ^ value) >> 31 != 0,
            }
        }
        _ => AluOutput::plain(0),
    }
}
