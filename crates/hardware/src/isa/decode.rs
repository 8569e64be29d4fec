//! Instruction Decoder.
//!
//! Turns a raw 32-bit word into an [`Instruction`]. Decoding is total: every
//! word maps to some instruction, with unrecognised class selectors falling
//! through to `HALT`.
//!
//! Dispatch is checked top to bottom:
//! 1. Bit 31 clear: arithmetic.
//! 2. Bit 30 clear: `LOADHI`.
//! 3. Class `0000`: `READ`.
//! 4. Class `1000`: `WRITE`, or `PUSH` when the destination slot names the stack pointer.
//! 5. Class `0001`: `PUSH`.
//! 6. Class `0100`: `POP`.
//! 7. Anything else: `HALT`.

use crate::common::constants::STACK_POINTER;
use crate::isa::instruction::{Instruction, InstructionBits};
use crate::isa::opcodes::{self, AluOp};

/// Width in bits of the arithmetic immediate and memory offset fields.
pub const IMM_BITS: u32 = 10;

/// Total width of an instruction word in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// Decodes a 32-bit word into an instruction.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode
///
/// # Returns
///
/// The decoded [`Instruction`]; never fails.
pub fn decode(inst: u32) -> Instruction {
    let cond = inst.condition();

    if inst.is_arithmetic() {
        return Instruction::Arithmetic {
            op: AluOp::from_bits(inst.alu_opcode()),
            set_flags: inst.sets_flags(),
            register_operand: inst.register_operand(),
            immediate: sign_extend(inst.imm10(), IMM_BITS),
            ra: inst.reg_hi(),
            rb: inst.reg_mid(),
            rd: inst.reg_lo(),
            cond,
        };
    }

    if inst.is_load_high() {
        return Instruction::LoadHigh {
            constant: inst.constant(),
            rd: inst.reg_lo(),
            cond,
        };
    }

    match inst.class() {
        opcodes::CLASS_READ => Instruction::MemoryRead {
            offset: sign_extend(inst.imm10(), IMM_BITS),
            ra: inst.reg_mid(),
            rd: inst.reg_lo(),
            cond,
        },
        opcodes::CLASS_WRITE => disambiguate_write(inst),
        opcodes::CLASS_PUSH => Instruction::Push {
            ra: inst.reg_hi(),
            cond,
        },
        opcodes::CLASS_POP => Instruction::Pop {
            rd: inst.reg_lo(),
            cond,
        },
        _ => Instruction::Halt { cond },
    }
}

/// Resolves a `WRITE`-class word.
///
/// A write whose destination slot holds the stack pointer is the short form
/// of `PUSH`, pushing the register in the stored-value slot.
fn disambiguate_write(inst: u32) -> Instruction {
    let cond = inst.condition();
    let rb = inst.reg_hi();

    if inst.reg_lo() == STACK_POINTER {
        Instruction::Push { ra: rb, cond }
    } else {
        Instruction::MemoryWrite {
            offset: sign_extend(inst.imm10(), IMM_BITS),
            ra: inst.reg_mid(),
            rb,
            cond,
        }
    }
}

impl From<u32> for Instruction {
    fn from(inst: u32) -> Self {
        decode(inst)
    }
}

/// Sign extends the low `bits` bits of `val` to a 32-bit signed integer.
///
/// Bits above `bits` are ignored.
///
/// # Arguments
///
/// * `val` - The raw field value.
/// * `bits` - The field width, in `1..=32`.
pub const fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = INSTRUCTION_WIDTH - bits;
    ((val << shift) as i32) >> shift
}
