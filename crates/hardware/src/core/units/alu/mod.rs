//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 32-bit integer ALU used by arithmetic
//! instructions. Besides the result it reports carry and overflow, from
//! which the executor derives the full flag set.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      Or, Xor, And, Bic
//! - [`shifts`]:     Rol

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical operations (or, xor, and, bit clear).
pub mod logic;

/// Rotate operations (rol).
pub mod shifts;

use crate::core::arch::flags::Flags;
use crate::isa::opcodes::AluOp;

/// Result of an ALU operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluOutput {
    /// The 32-bit result.
    pub value: u32,
    /// Carry out.
    pub carry: bool,
    /// Signed overflow.
    pub overflow: bool,
}

impl AluOutput {
    /// Output of an operation that defines neither carry nor overflow.
    pub const fn plain(value: u32) -> Self {
        Self {
            value,
            carry: false,
            overflow: false,
        }
    }

    /// Returns the N/Z/C/V flags for this output.
    pub const fn flags(&self) -> Flags {
        Flags::from_result(self.value, self.carry, self.overflow)
    }
}

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - Operand A (register value or sign-extended immediate)
    /// * `b`  - Operand B (always a register value)
    ///
    /// # Returns
    ///
    /// The result with carry and overflow, or `None` for
    /// [`AluOp::Unassigned`].
    ///
    /// # Examples
    ///
    /// ```
    /// use runcpu_core::core::units::alu::Alu;
    /// use runcpu_core::isa::AluOp;
    ///
    /// let out = Alu::execute(AluOp::Add, 0x7FFF_FFFF, 1).unwrap();
    /// assert_eq!(out.value, 0x8000_0000);
    /// assert!(out.overflow);
    /// assert!(!out.carry);
    ///
    /// assert!(Alu::execute(AluOp::Unassigned, 1, 2).is_none());
    /// ```
    pub const fn execute(op: AluOp, a: u32, b: u32) -> Option<AluOutput> {
        match op {
            AluOp::Or | AluOp::Xor | AluOp::And | AluOp::Bic => Some(logic::execute(op, a, b)),
            AluOp::Rol => Some(shifts::execute(op, a, b)),
            AluOp::Add | AluOp::Sub => Some(arithmetic::execute(op, a, b)),
            AluOp::Unassigned => None,
        }
    }
}
