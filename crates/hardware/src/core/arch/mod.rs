//! Architectural state.
//!
//! Defines the programmer-visible state touched by instructions:
//! 1. **Registers:** The 16-entry general-purpose register file.
//! 2. **Flags:** The N/Z/C/V condition flags.

/// Condition flags.
pub mod flags;

/// General-purpose register file.
pub mod gpr;

pub use flags::Flags;
pub use gpr::Gpr;
