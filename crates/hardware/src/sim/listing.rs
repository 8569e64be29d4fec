//! Instruction Listings and Disassembly Reports.
//!
//! A listing is text with one `address:word` pair per line, both in
//! hexadecimal:
//!
//! ```text
//! 0000:0400000f
//! 0004:fc00000f
//! ```
//!
//! Each entry is disassembled into a [`DisasmLine`]; the report is the JSON
//! array of those lines. With addresses enabled every line also carries its
//! address and the word's hex digits split into byte pairs, in the order they
//! were written.

use serde::Serialize;
use tracing::debug;

use crate::common::error::ListingError;
use crate::isa::disasm::disassemble;

/// One parsed listing line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingEntry {
    /// Address of the instruction.
    pub address: u64,
    /// Raw instruction word.
    pub word: u32,
    /// Hex digits of the word as written, two per group.
    pub opcodes: Vec<String>,
}

/// One entry of the disassembly report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisasmLine {
    /// Byte groups of the raw word (addresses enabled only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opcodes: Option<Vec<String>>,
    /// Instruction address (addresses enabled only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<u64>,
    /// Rendered instruction.
    pub text: String,
}

/// Strips an optional `0x`/`0X` prefix.
fn strip_hex_prefix(text: &str) -> &str {
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text)
}

/// Splits hex digits into two-character groups; a trailing odd digit forms its own group.
fn byte_groups(digits: &str) -> Vec<String> {
    digits
        .as_bytes()
        .chunks(2)
        .map(|pair| String::from_utf8_lossy(pair).into_owned())
        .collect()
}

/// Parses one listing line.
///
/// Returns `Ok(None)` for blank lines.
///
/// # Arguments
///
/// * `line` - The text of the line.
/// * `line_no` - 1-based line number, used in errors.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<ListingEntry>, ListingError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (address, word) = line
        .split_once(':')
        .ok_or(ListingError::MissingSeparator { line: line_no })?;

    let address_text = strip_hex_prefix(address.trim());
    let address =
        u64::from_str_radix(address_text, 16).map_err(|source| ListingError::InvalidAddress {
            line: line_no,
            text: address.trim().to_string(),
            source,
        })?;

    let word_text = strip_hex_prefix(word.trim());
    let word = u32::from_str_radix(word_text, 16).map_err(|source| ListingError::InvalidWord {
        line: line_no,
        text: word.trim().to_string(),
        source,
    })?;

    Ok(Some(ListingEntry {
        address,
        word,
        opcodes: byte_groups(word_text),
    }))
}

/// Parses a whole listing, skipping blank lines.
///
/// # Errors
///
/// Stops at the first malformed line.
pub fn parse_listing(text: &str) -> Result<Vec<ListingEntry>, ListingError> {
    let entries = text
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| parse_line(line, idx + 1).transpose())
        .collect::<Result<Vec<_>, _>>()?;
    debug!(entries = entries.len(), "parsed listing");
    Ok(entries)
}

/// Disassembles every entry into a report line.
///
/// # Arguments
///
/// * `entries` - Parsed listing entries.
/// * `with_addresses` - Include `address` and `opcodes` in each line.
pub fn report(entries: &[ListingEntry], with_addresses: bool) -> Vec<DisasmLine> {
    entries
        .iter()
        .map(|entry| DisasmLine {
            opcodes: with_addresses.then(|| entry.opcodes.clone()),
            address: with_addresses.then_some(entry.address),
            text: disassemble(entry.word),
        })
        .collect()
}

/// Serializes report lines as a JSON array.
pub fn to_json(lines: &[DisasmLine]) -> serde_json::Result<String> {
    serde_json::to_string(lines)
}
