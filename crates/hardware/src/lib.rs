//! Decoder, disassembler and executor for the runcpu 32-bit register machine.
//!
//! This crate implements the instruction set of a small conditional-execution
//! CPU with the following:
//! 1. **ISA:** Bit-field extraction, the decoded instruction model, and the disassembler.
//! 2. **Core:** The flag-computing ALU and per-instruction execution semantics.
//! 3. **SoC:** The machine-state contract and a reference machine with a memory-mapped I/O port.
//! 4. **Simulation:** Instruction listings and JSON disassembly reports.
//!
//! A raw word is decoded once into an [`Instruction`]; the value is then
//! either rendered with [`render`] or applied to a machine with [`execute`].

/// Common types and constants (register conventions, I/O port, errors).
pub mod common;
/// Configuration for the reference machine and the disassembler.
pub mod config;
/// CPU core (register file, flags, ALU, execution).
pub mod core;
/// Instruction set (layout, decode, instruction model, disassembly).
pub mod isa;
/// Instruction listings and disassembly reports.
pub mod sim;
/// Machine state (contract, memory, console, reference machine).
pub mod soc;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Executes one instruction against a machine.
pub use crate::core::execute;
/// Decodes a raw 32-bit word.
pub use crate::isa::decode;
/// Decoded instruction.
pub use crate::isa::Instruction;
/// Renders an instruction as assembly text.
pub use crate::isa::render;
/// Capability interface required by the executor.
pub use crate::soc::MachineState;
