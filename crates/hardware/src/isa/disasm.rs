//! Instruction Disassembler.
//!
//! Renders an [`Instruction`] in its canonical assembly form: the mnemonic,
//! an `f` when an arithmetic instruction sets flags, a `.COND` suffix unless
//! the condition is always-true, then the operands in a column starting at
//! [`MNEMONIC_WIDTH`].
//!
//! # Usage
//!
//! ```
//! use runcpu_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x0400_000F), "OR        R0, R0, R0");
//! assert_eq!(disassemble(0xFC00_000F), "HALT");
//! ```

use std::fmt;

use crate::common::constants::MNEMONIC_WIDTH;
use crate::isa::condition::Condition;
use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;

/// Disassembles a raw 32-bit word.
pub fn disassemble(inst: u32) -> String {
    render(&decode(inst))
}

/// Renders a decoded instruction as assembly text.
pub fn render(instr: &Instruction) -> String {
    instr.to_string()
}

/// Builds the mnemonic with optional flag and condition suffixes.
fn mnemonic(base: &str, set_flags: bool, cond: Condition) -> String {
    let mut text = String::from(base);
    if set_flags {
        text.push('f');
    }
    if !cond.is_always() {
        text.push('.');
        text.push_str(cond.name());
    }
    text
}

/// Formats a memory operand from base register and offset.
///
/// The register is omitted when it is `R0` and an offset is present; the
/// offset is omitted when it is zero.
fn memory_operand(ra: usize, offset: i32) -> String {
    match (offset, ra) {
        (0, _) => format!("[R{ra}]"),
        (_, 0) => format!("[{:#x}]", offset as u32),
        _ => format!("[R{ra} + {:#x}]", offset as u32),
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = MNEMONIC_WIDTH;
        let cond = self.condition();

        match *self {
            Self::Arithmetic {
                op,
                set_flags,
                register_operand,
                immediate,
                ra,
                rb,
                rd,
                ..
            } => {
                let mn = mnemonic(op.mnemonic(), set_flags, cond);
                if register_operand {
                    write!(f, "{mn:<w$}R{ra}, R{rb}, R{rd}")
                } else {
                    write!(f, "{mn:<w$}{:#x}, R{rb}, R{rd}", immediate as u32)
                }
            }
            Self::LoadHigh { constant, rd, .. } => {
                let mn = mnemonic(self.mnemonic(), false, cond);
                write!(f, "{mn:<w$}{constant:#x}, R{rd}")
            }
            Self::MemoryRead { offset, ra, rd, .. } => {
                let mn = mnemonic(self.mnemonic(), false, cond);
                write!(f, "{mn:<w$}{}, R{rd}", memory_operand(ra, offset))
            }
            Self::MemoryWrite { offset, ra, rb, .. } => {
                let mn = mnemonic(self.mnemonic(), false, cond);
                write!(f, "{mn:<w$}R{rb}, {}", memory_operand(ra, offset))
            }
            Self::Push { ra: r, .. } | Self::Pop { rd: r, .. } => {
                let mn = mnemonic(self.mnemonic(), false, cond);
                write!(f, "{mn:<w$}R{r}")
            }
            Self::Halt { .. } | Self::NoOp { .. } => {
                f.write_str(&mnemonic(self.mnemonic(), false, cond))
            }
        }
    }
}
