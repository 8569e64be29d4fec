//! Simulation tooling.
//!
//! Front-end helpers that sit outside the decode/execute core:
//! 1. **Listings:** Parsing `address:word` instruction listings.
//! 2. **Reports:** Building the JSON disassembly report.

/// Instruction listings and disassembly reports.
pub mod listing;

pub use listing::{DisasmLine, ListingEntry, parse_listing, report, to_json};
