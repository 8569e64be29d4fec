//! # ISA Unit Tests
//!
//! Covers field extraction, decode dispatch, condition codes and the
//! disassembler.
