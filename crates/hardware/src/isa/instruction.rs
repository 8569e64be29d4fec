//! Instruction encoding and decoding utilities.
//!
//! Provides the bit-field extractor for raw 32-bit words and the
//! [`Instruction`] model produced by [`decode`](crate::isa::decode::decode).
//!
//! # Layout
//!
//! ```text
//!  31 30 29..28 27 26 25 ........ 16 15..12 11..8 7..4 3..0
//! | 0 | opcode  | F| R|  imm[9:0]    |  ra   |  rb  | rd | cond |  arithmetic
//! | 1 0|       constant[21:0]                       | rd | cond |  LOADHI
//! | 1 1| class[3:0]  | offset[9:0]   |  rb   |  ra  | rd | cond |  memory / stack / halt
//! ```
//!
//! Memory forms place the base register in bits 11:8 and the stored register
//! in bits 15:12, the reverse of the arithmetic source slots.

use crate::isa::condition::Condition;
use crate::isa::opcodes::AluOp;

/// Bit mask for a 4-bit register field.
pub const REG_MASK: u32 = 0xF;
/// Bit mask for the 3-bit arithmetic opcode field.
pub const ALU_OPCODE_MASK: u32 = 0x7;
/// Bit mask for the 10-bit immediate / offset field.
pub const IMM10_MASK: u32 = 0x3FF;
/// Bit mask for the 22-bit `LOADHI` constant.
pub const CONSTANT_MASK: u32 = 0x3F_FFFF;
/// Bit mask for the 4-bit class selector.
pub const CLASS_MASK: u32 = 0xF;

/// Trait for extracting instruction fields from encoded words.
///
/// Every method is a pure shift-and-mask; which fields are meaningful
/// depends on the instruction class.
pub trait InstructionBits {
    /// Bit 31: clear for arithmetic instructions.
    fn is_arithmetic(&self) -> bool;
    /// Bit 30: clear (with bit 31 set) for `LOADHI`.
    fn is_load_high(&self) -> bool;
    /// Extracts the arithmetic opcode (bits 28-30).
    fn alu_opcode(&self) -> u32;
    /// Extracts the set-flags bit (bit 27).
    fn sets_flags(&self) -> bool;
    /// Extracts the register-operand bit (bit 26).
    fn register_operand(&self) -> bool;
    /// Extracts the memory class selector (bits 26-29).
    fn class(&self) -> u32;
    /// Extracts the raw 10-bit immediate or offset (bits 16-25), not sign-extended.
    fn imm10(&self) -> u32;
    /// Extracts the 22-bit `LOADHI` constant (bits 8-29).
    fn constant(&self) -> u32;
    /// Extracts the register field in bits 12-15.
    fn reg_hi(&self) -> usize;
    /// Extracts the register field in bits 8-11.
    fn reg_mid(&self) -> usize;
    /// Extracts the destination register field (bits 4-7).
    fn reg_lo(&self) -> usize;
    /// Extracts the condition code (bits 0-3).
    fn condition(&self) -> Condition;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn is_arithmetic(&self) -> bool {
        self >> 31 == 0
    }

    #[inline(always)]
    fn is_load_high(&self) -> bool {
        !self.is_arithmetic() && (self >> 30) & 1 == 0
    }

    #[inline(always)]
    fn alu_opcode(&self) -> u32 {
        (self >> 28) & ALU_OPCODE_MASK
    }

    #[inline(always)]
    fn sets_flags(&self) -> bool {
        (self >> 27) & 1 != 0
    }

    #[inline(always)]
    fn register_operand(&self) -> bool {
        (self >> 26) & 1 != 0
    }

    #[inline(always)]
    fn class(&self) -> u32 {
        (self >> 26) & CLASS_MASK
    }

    #[inline(always)]
    fn imm10(&self) -> u32 {
        (self >> 16) & IMM10_MASK
    }

    #[inline(always)]
    fn constant(&self) -> u32 {
        (self >> 8) & CONSTANT_MASK
    }

    #[inline(always)]
    fn reg_hi(&self) -> usize {
        ((self >> 12) & REG_MASK) as usize
    }

    #[inline(always)]
    fn reg_mid(&self) -> usize {
        ((self >> 8) & REG_MASK) as usize
    }

    #[inline(always)]
    fn reg_lo(&self) -> usize {
        ((self >> 4) & REG_MASK) as usize
    }

    #[inline(always)]
    fn condition(&self) -> Condition {
        Condition::from_bits(*self)
    }
}

/// A decoded instruction.
///
/// Each variant carries only the fields its class uses. Immediates and
/// offsets are already sign-extended; the `LOADHI` constant is zero-extended
/// and not yet shifted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Register/immediate ALU operation: `rd = op(a, R[rb])`.
    Arithmetic {
        /// Operation selected by the opcode field.
        op: AluOp,
        /// Commit N/Z/C/V after the operation.
        set_flags: bool,
        /// Operand A is `R[ra]` when set, otherwise `immediate`.
        register_operand: bool,
        /// Sign-extended 10-bit immediate.
        immediate: i32,
        /// Operand A register.
        ra: usize,
        /// Operand B register.
        rb: usize,
        /// Destination register.
        rd: usize,
        /// Condition code.
        cond: Condition,
    },
    /// Load `constant << 10` into `rd`.
    LoadHigh {
        /// Zero-extended 22-bit constant.
        constant: u32,
        /// Destination register.
        rd: usize,
        /// Condition code.
        cond: Condition,
    },
    /// Load the word at `R[ra] + offset` into `rd`.
    MemoryRead {
        /// Sign-extended 10-bit offset.
        offset: i32,
        /// Base register.
        ra: usize,
        /// Destination register.
        rd: usize,
        /// Condition code.
        cond: Condition,
    },
    /// Store `R[rb]` to `R[ra] + offset`.
    MemoryWrite {
        /// Sign-extended 10-bit offset.
        offset: i32,
        /// Base register.
        ra: usize,
        /// Source register.
        rb: usize,
        /// Condition code.
        cond: Condition,
    },
    /// Push `R[ra]` onto the stack.
    Push {
        /// Source register.
        ra: usize,
        /// Condition code.
        cond: Condition,
    },
    /// Pop the top of the stack into `rd`.
    Pop {
        /// Destination register.
        rd: usize,
        /// Condition code.
        cond: Condition,
    },
    /// Stop the machine.
    Halt {
        /// Condition code.
        cond: Condition,
    },
    /// Does nothing. Never produced by the decoder.
    NoOp {
        /// Condition code.
        cond: Condition,
    },
}

impl Instruction {
    /// Returns the condition code attached to the instruction.
    pub const fn condition(&self) -> Condition {
        match *self {
            Self::Arithmetic { cond, .. }
            | Self::LoadHigh { cond, .. }
            | Self::MemoryRead { cond, .. }
            | Self::MemoryWrite { cond, .. }
            | Self::Push { cond, .. }
            | Self::Pop { cond, .. }
            | Self::Halt { cond }
            | Self::NoOp { cond } => cond,
        }
    }

    /// Returns the base mnemonic, without flag or condition suffix.
    pub const fn mnemonic(&self) -> &'static str {
        match self {
            Self::Arithmetic { op, .. } => op.mnemonic(),
            Self::LoadHigh { .. } => "LOADHI",
            Self::MemoryRead { .. } => "READ",
            Self::MemoryWrite { .. } => "WRITE",
            Self::Push { .. } => "PUSH",
            Self::Pop { .. } => "POP",
            Self::Halt { .. } => "HALT",
            Self::NoOp { .. } => "NOP",
        }
    }
}

impl Default for Instruction {
    fn default() -> Self {
        Self::NoOp {
            cond: Condition::ALWAYS,
        }
    }
}
