//! Global Machine Constants.
//!
//! This module defines machine-wide constants. It includes:
//! 1. **Register Constants:** Register count and the stack pointer convention.
//! 2. **Memory Constants:** Word size and the memory-mapped I/O port.
//! 3. **Rendering Constants:** Column widths used by the disassembler.

/// Number of general-purpose registers (4-bit register index).
pub const REGISTER_COUNT: usize = 16;

/// Register used as the stack pointer by `PUSH` and `POP`.
///
/// This is a software convention; nothing prevents other instructions from
/// writing it.
pub const STACK_POINTER: usize = 14;

/// Size of a machine word in bytes.
pub const WORD_BYTES: u32 = 4;

/// Memory-mapped I/O port (-512 as a 32-bit two's-complement pattern).
///
/// Reads consume one byte of input; writes emit the low byte of the source
/// register. No other address performs I/O.
pub const IO_PORT: u32 = 0xFFFF_FE00;

/// Minimum width of the mnemonic column in rendered assembly.
pub const MNEMONIC_WIDTH: usize = 10;
