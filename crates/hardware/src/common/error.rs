//! Fault and Listing Error definitions.
//!
//! Decoding and rendering are total and never fail. Errors only arise from:
//! 1. **Execution:** Faults raised while applying an instruction to a machine.
//! 2. **Listings:** Malformed `address:word` lines fed to the disassembler.

use std::io;
use std::num::ParseIntError;

use thiserror::Error;

/// Faults raised while executing an instruction.
///
/// The executor itself only raises [`Fault::UnassignedOpcode`]; every other
/// variant originates in a [`MachineState`](crate::soc::MachineState)
/// implementation and is propagated unchanged.
#[derive(Debug, Error)]
pub enum Fault {
    /// Arithmetic opcode without an assigned operation (opcode 4).
    #[error("arithmetic opcode {opcode} is unassigned")]
    UnassignedOpcode {
        /// The raw 3-bit opcode field.
        opcode: u32,
    },

    /// Word access outside the machine's memory.
    ///
    /// The associated value is the faulting byte address.
    #[error("memory access fault at {0:#010x}")]
    AccessFault(u32),

    /// A read from the I/O port found no more input.
    #[error("read from I/O port with no input available")]
    InputExhausted,

    /// The host input or output stream failed.
    #[error("I/O port stream error")]
    Io(#[from] io::Error),
}

/// Errors raised while parsing an instruction listing.
///
/// Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum ListingError {
    /// The line has no `:` between address and instruction word.
    #[error("line {line}: expected `address:word`")]
    MissingSeparator {
        /// Line number in the listing.
        line: usize,
    },

    /// The address is not a hexadecimal number.
    #[error("line {line}: invalid address `{text}`")]
    InvalidAddress {
        /// Line number in the listing.
        line: usize,
        /// The offending text.
        text: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },

    /// The instruction word is not a 32-bit hexadecimal number.
    #[error("line {line}: invalid instruction word `{text}`")]
    InvalidWord {
        /// Line number in the listing.
        line: usize,
        /// The offending text.
        text: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },
}
