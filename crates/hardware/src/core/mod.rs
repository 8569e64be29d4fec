//! CPU core.
//!
//! This module contains the execution side of the machine:
//! 1. **Arch:** Register file and condition flags.
//! 2. **Units:** The integer ALU with carry and overflow reporting.
//! 3. **Execution:** Per-instruction semantics against a [`MachineState`](crate::soc::MachineState).

/// Architectural state (registers, flags).
pub mod arch;

/// Instruction execution.
pub mod execution;

/// Functional units (ALU).
pub mod units;

pub use execution::execute;
