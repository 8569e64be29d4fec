//! I/O Port Console.
//!
//! Backs the memory-mapped I/O port with a host byte stream pair. Reads pull
//! one byte from the input; writes push one byte to the output. In verbose
//! mode each written byte is reported as an annotated line instead, which is
//! easier to spot among trace output.

use std::io::{self, Read, Write};

use tracing::debug;

use crate::common::error::Fault;

/// Byte source and sink behind the I/O port.
#[derive(Debug)]
pub struct Console<I, O> {
    input: I,
    output: O,
    verbose: bool,
}

impl<I: Read, O: Write> Console<I, O> {
    /// Creates a console over the given streams.
    pub const fn new(input: I, output: O, verbose: bool) -> Self {
        Self {
            input,
            output,
            verbose,
        }
    }

    /// Reads one byte of input.
    ///
    /// # Errors
    ///
    /// [`Fault::InputExhausted`] at end of input, [`Fault::Io`] if the stream fails.
    pub fn read_byte(&mut self) -> Result<u8, Fault> {
        let mut byte = [0u8; 1];
        match self.input.read_exact(&mut byte) {
            Ok(()) => {
                debug!(byte = byte[0], "I/O port read");
                Ok(byte[0])
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(Fault::InputExhausted),
            Err(e) => Err(Fault::Io(e)),
        }
    }

    /// Writes one byte of output and flushes the stream.
    ///
    /// # Errors
    ///
    /// [`Fault::Io`] if the stream fails.
    pub fn write_byte(&mut self, byte: u8) -> Result<(), Fault> {
        debug!(byte, "I/O port write");
        if self.verbose {
            write!(self.output, "\n[!] Output: {}\n\n", char::from(byte))?;
        } else {
            self.output.write_all(&[byte])?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// Returns the output stream.
    pub const fn output(&self) -> &O {
        &self.output
    }

    /// Consumes the console, returning the input and output streams.
    pub fn into_inner(self) -> (I, O) {
        (self.input, self.output)
    }
}
