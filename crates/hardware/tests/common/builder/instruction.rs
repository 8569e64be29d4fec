//! Fluent encoder for raw instruction words.
//!
//! Fields are masked to their layout widths, so out-of-range values wrap the
//! same way the hardware would see them.

use runcpu_core::isa::opcodes::{AluOp, CLASS_POP, CLASS_PUSH, CLASS_READ, CLASS_WRITE};

/// Builds raw 32-bit instruction words field by field.
#[derive(Clone, Copy, Debug)]
pub struct InstructionBuilder {
    imm: u32,
    reg_hi: u32,
    reg_mid: u32,
    reg_lo: u32,
    cond: u32,
}

impl Default for InstructionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionBuilder {
    /// Starts a word with zeroed fields and the always-true condition.
    pub const fn new() -> Self {
        Self {
            imm: 0,
            reg_hi: 0,
            reg_mid: 0,
            reg_lo: 0,
            cond: 0xF,
        }
    }

    /// Sets the 10-bit immediate / offset field (bits 25:16).
    pub const fn imm(mut self, imm: i32) -> Self {
        self.imm = imm as u32 & 0x3FF;
        self
    }

    /// Sets the register field in bits 15:12.
    pub const fn reg_hi(mut self, r: u32) -> Self {
        self.reg_hi = r & 0xF;
        self
    }

    /// Sets the register field in bits 11:8.
    pub const fn reg_mid(mut self, r: u32) -> Self {
        self.reg_mid = r & 0xF;
        self
    }

    /// Sets the register field in bits 7:4.
    pub const fn reg_lo(mut self, r: u32) -> Self {
        self.reg_lo = r & 0xF;
        self
    }

    /// Sets the condition code (bits 3:0).
    pub const fn cond(mut self, cond: u32) -> Self {
        self.cond = cond & 0xF;
        self
    }

    /// Packs the low 26 bits shared by arithmetic and memory words.
    const fn low_fields(self) -> u32 {
        self.imm << 16 | self.reg_hi << 12 | self.reg_mid << 8 | self.reg_lo << 4 | self.cond
    }

    /// Encodes an arithmetic word.
    pub const fn arithmetic(self, op: AluOp, set_flags: bool, register_operand: bool) -> u32 {
        op.bits() << 28 | (set_flags as u32) << 27 | (register_operand as u32) << 26 | self.low_fields()
    }

    /// Encodes a word in one of the memory classes (bits 31:30 set).
    pub const fn class(self, class: u32) -> u32 {
        0b11 << 30 | (class & 0xF) << 26 | self.low_fields()
    }

    /// Encodes a `LOADHI` word; the immediate and register-high fields are ignored.
    pub const fn load_high(self, constant: u32) -> u32 {
        0b10 << 30 | (constant & 0x3F_FFFF) << 8 | self.reg_lo << 4 | self.cond
    }

    /// Encodes `READ [R<mid> + imm], R<lo>`.
    pub const fn read(self) -> u32 {
        self.class(CLASS_READ)
    }

    /// Encodes `WRITE R<hi>, [R<mid> + imm]` (a `PUSH` if `reg_lo` is 14).
    pub const fn write(self) -> u32 {
        self.class(CLASS_WRITE)
    }

    /// Encodes the dedicated `PUSH R<hi>` form.
    pub const fn push(self) -> u32 {
        self.class(CLASS_PUSH)
    }

    /// Encodes `POP R<lo>`.
    pub const fn pop(self) -> u32 {
        self.class(CLASS_POP)
    }
}

/// Shorthand for a register-operand arithmetic word: `op ra, rb, rd`.
pub const fn alu_rrr(op: AluOp, set_flags: bool, ra: u32, rb: u32, rd: u32) -> u32 {
    InstructionBuilder::new()
        .reg_hi(ra)
        .reg_mid(rb)
        .reg_lo(rd)
        .arithmetic(op, set_flags, true)
}

/// Shorthand for an immediate arithmetic word: `op imm, rb, rd`.
pub const fn alu_irr(op: AluOp, set_flags: bool, imm: i32, rb: u32, rd: u32) -> u32 {
    InstructionBuilder::new()
        .imm(imm)
        .reg_mid(rb)
        .reg_lo(rd)
        .arithmetic(op, set_flags, false)
}
