//! Machine state.
//!
//! This module contains the contract between the executor and the machine,
//! plus a reference implementation:
//! 1. **Traits:** [`MachineState`], the capability interface the executor uses.
//! 2. **Memory:** Flat byte-addressed RAM.
//! 3. **Console:** The byte streams behind the I/O port.
//! 4. **Machine:** Registers, memory, flags and console combined.

/// I/O port console.
pub mod console;

/// Reference machine.
pub mod machine;

/// Main memory.
pub mod memory;

/// Machine-state contract.
pub mod traits;

pub use console::Console;
pub use machine::Machine;
pub use memory::Memory;
pub use traits::MachineState;
