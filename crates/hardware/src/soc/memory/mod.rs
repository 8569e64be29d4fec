//! Main Memory.
//!
//! Byte-addressed RAM starting at address 0. Words are stored little-endian
//! and need not be aligned. Accesses that do not fit entirely inside the
//! buffer raise [`Fault::AccessFault`].

use crate::common::constants::WORD_BYTES;
use crate::common::error::Fault;

/// Byte-addressed main memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    data: Vec<u8>,
}

impl Memory {
    /// Creates a zero-filled memory of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size],
        }
    }

    /// Returns the size of memory in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the memory has no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the byte range of the word at `addr`, if it is in bounds.
    fn word_range(&self, addr: u32) -> Option<std::ops::Range<usize>> {
        let start = addr as usize;
        let end = start.checked_add(WORD_BYTES as usize)?;
        (end <= self.data.len()).then_some(start..end)
    }

    /// Reads the little-endian word at `addr`.
    pub fn read_u32(&self, addr: u32) -> Result<u32, Fault> {
        let range = self.word_range(addr).ok_or(Fault::AccessFault(addr))?;
        let mut bytes = [0u8; WORD_BYTES as usize];
        bytes.copy_from_slice(&self.data[range]);
        Ok(u32::from_le_bytes(bytes))
    }

    /// Writes `val` as a little-endian word at `addr`.
    pub fn write_u32(&mut self, addr: u32, val: u32) -> Result<(), Fault> {
        let range = self.word_range(addr).ok_or(Fault::AccessFault(addr))?;
        self.data[range].copy_from_slice(&val.to_le_bytes());
        Ok(())
    }

    /// Copies a sequence of words into memory starting at `base`.
    pub fn load_words(&mut self, base: u32, words: &[u32]) -> Result<(), Fault> {
        let mut addr = base;
        for &word in words {
            self.write_u32(addr, word)?;
            addr = addr.wrapping_add(WORD_BYTES);
        }
        Ok(())
    }
}
