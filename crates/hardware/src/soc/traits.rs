//! Machine-state contract.
//!
//! This module defines the `MachineState` trait the executor runs against. It provides:
//! 1. **Registers:** Read and write of the 16 general-purpose registers.
//! 2. **Memory:** Word reads and writes at byte addresses.
//! 3. **Flags and control:** Committing N/Z/C/V and halting.
//! 4. **I/O port:** A byte source and sink, reached only through [`IO_PORT`](crate::common::IO_PORT).
//!
//! Implementations decide what a failing access means; the executor forwards
//! every [`Fault`] unchanged.

use crate::common::error::Fault;
use crate::core::arch::flags::Flags;

/// Capabilities the executor needs from a machine.
pub trait MachineState {
    /// Returns the value of register `idx` (0-15).
    fn get_reg(&self, idx: usize) -> u32;
    /// Sets register `idx` (0-15) to `val`.
    fn set_reg(&mut self, idx: usize, val: u32);
    /// Reads one word at `addr`.
    fn read_memory(&mut self, addr: u32) -> Result<u32, Fault>;
    /// Writes one word at `addr`.
    fn write_memory(&mut self, addr: u32, val: u32) -> Result<(), Fault>;
    /// Commits the condition flags.
    fn set_flags(&mut self, flags: Flags);
    /// Stops the machine. The driver is responsible for ending its fetch loop.
    fn halt(&mut self);
    /// Consumes one byte from the input stream.
    fn read_input(&mut self) -> Result<u8, Fault>;
    /// Emits one byte to the output stream.
    fn write_output(&mut self, byte: u8) -> Result<(), Fault>;
}
