//! Opcode and class-selector definitions.
//!
//! Words with bit 31 clear are arithmetic; bit 31 set with bit 30 clear is
//! `LOADHI`. The remaining words are told apart by the 4-bit class selector
//! in bits 29:26.

/// Class selector for `READ` (memory load).
pub const CLASS_READ: u32 = 0b0000;

/// Class selector for the dedicated `PUSH` encoding.
pub const CLASS_PUSH: u32 = 0b0001;

/// Class selector for `POP`.
pub const CLASS_POP: u32 = 0b0100;

/// Class selector for `WRITE` (memory store, or `PUSH` when rd is the stack pointer).
pub const CLASS_WRITE: u32 = 0b1000;

/// Arithmetic operation selected by bits 30:28 of an arithmetic word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Bitwise OR (opcode 0).
    Or,
    /// Bitwise XOR (opcode 1).
    Xor,
    /// Bitwise AND (opcode 2).
    And,
    /// Bit clear, `a & !b` (opcode 3).
    Bic,
    /// Opcode 4 has no operation assigned.
    Unassigned,
    /// Rotate left (opcode 5).
    Rol,
    /// Addition (opcode 6).
    Add,
    /// Subtraction (opcode 7).
    Sub,
}

impl AluOp {
    /// Maps a 3-bit opcode field to its operation. Upper bits are ignored.
    pub const fn from_bits(bits: u32) -> Self {
        match bits & 0b111 {
            0 => Self::Or,
            1 => Self::Xor,
            2 => Self::And,
            3 => Self::Bic,
            4 => Self::Unassigned,
            5 => Self::Rol,
            6 => Self::Add,
            _ => Self::Sub,
        }
    }

    /// Returns the 3-bit opcode field for this operation.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Or => 0,
            Self::Xor => 1,
            Self::And => 2,
            Self::Bic => 3,
            Self::Unassigned => 4,
            Self::Rol => 5,
            Self::Add => 6,
            Self::Sub => 7,
        }
    }

    /// Assembly mnemonic; the unassigned opcode renders as `???`.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::And => "AND",
            Self::Bic => "BIC",
            Self::Unassigned => "???",
            Self::Rol => "ROL",
            Self::Add => "ADD",
            Self::Sub => "SUB",
        }
    }
}
