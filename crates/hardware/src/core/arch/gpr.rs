//! General-Purpose Register File.
//!
//! This module implements the register file of the machine. It performs the following:
//! 1. **Storage:** Maintains 16 32-bit registers (`R0`-`R15`).
//! 2. **Convention:** `R14` is the stack pointer; it is otherwise an ordinary register.
//! 3. **Debugging:** Provides a formatted dump of the complete register state.

use std::fmt;

use crate::common::constants::REGISTER_COUNT;

/// General-Purpose Register file.
///
/// `R0` is an ordinary register and may be written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; REGISTER_COUNT],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; REGISTER_COUNT],
        }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-15); higher bits are ignored.
    pub const fn read(&self, idx: usize) -> u32 {
        self.regs[idx % REGISTER_COUNT]
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-15); higher bits are ignored.
    /// * `val` - The 32-bit value to write.
    pub const fn write(&mut self, idx: usize, val: u32) {
        self.regs[idx % REGISTER_COUNT] = val;
    }
}

impl fmt::Display for Gpr {
    /// Displays registers in pairs with hexadecimal formatting.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..REGISTER_COUNT).step_by(2) {
            writeln!(
                f,
                "R{:<2}={:#010x} R{:<2}={:#010x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1]
            )?;
        }
        Ok(())
    }
}
