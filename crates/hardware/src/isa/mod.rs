//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the field layout, instruction model, decoder and disassembler for
//! the 32-bit register machine.
//!
//! Data flows one way: raw word -> [`decode`](decode::decode) ->
//! [`Instruction`](instruction::Instruction), which is then either rendered by
//! [`disasm`] or applied to a machine by
//! [`execute`](crate::core::execution::execute).

/// Condition codes and their evaluation against flags.
pub mod condition;

/// Instruction decoding and sign extension.
pub mod decode;

/// Instruction disassembler.
pub mod disasm;

/// Bit-field extraction and the decoded instruction model.
pub mod instruction;

/// Arithmetic opcodes and class selectors.
pub mod opcodes;

pub use condition::Condition;
pub use decode::decode;
pub use disasm::{disassemble, render};
pub use instruction::{Instruction, InstructionBits};
pub use opcodes::AluOp;
