//! Common utilities and types shared by the decoder, executor and tooling.
//!
//! This module provides:
//! 1. **Constants:** Register conventions, the I/O port address, and layout widths.
//! 2. **Error Handling:** Execution faults and listing parse errors.

/// Common constants used throughout the crate.
pub mod constants;

/// Error types for execution and listing parsing.
pub mod error;

pub use constants::{IO_PORT, STACK_POINTER};
pub use error::{Fault, ListingError};
