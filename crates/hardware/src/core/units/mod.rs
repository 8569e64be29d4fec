//! Functional units.
//!
//! Only the integer ALU is modelled; memory and I/O are reached through the
//! [`MachineState`](crate::soc::MachineState) contract.

/// Arithmetic Logic Unit.
pub mod alu;
