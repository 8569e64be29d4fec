//! Configuration system.
//!
//! This module defines the configuration structures used to parameterize the
//! reference machine and the disassembler front end. It provides:
//! 1. **Defaults:** Baseline constants for memory size and I/O presentation.
//! 2. **Structures:** `MachineConfig` and `DisasmConfig` under a root `Config`.
//!
//! Configuration is supplied as JSON; every field may be omitted.

use serde::Deserialize;

/// Default configuration constants.
mod defaults {
    /// Size of the reference machine's RAM (64 KiB).
    pub const MEMORY_SIZE: usize = 64 * 1024;
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use runcpu_core::config::Config;
///
/// let json = r#"{
///     "machine": { "memory_size": 4096, "verbose_io": true },
///     "disasm": { "addresses": true }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.machine.memory_size, 4096);
/// assert!(config.machine.verbose_io);
/// assert_eq!(config.machine.initial_sp, None);
/// assert!(config.disasm.addresses);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reference machine settings
    pub machine: MachineConfig,
    /// Disassembly report settings
    pub disasm: DisasmConfig,
}

/// Reference machine settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// RAM size in bytes
    pub memory_size: usize,

    /// Initial stack pointer. Defaults to the top of memory.
    pub initial_sp: Option<u32>,

    /// Print an annotated line for each byte written to the I/O port instead
    /// of the raw character.
    pub verbose_io: bool,
}

impl MachineConfig {
    /// Returns the stack pointer the machine starts with.
    pub fn stack_top(&self) -> u32 {
        self.initial_sp
            .unwrap_or_else(|| u32::try_from(self.memory_size).unwrap_or(u32::MAX))
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            memory_size: defaults::MEMORY_SIZE,
            initial_sp: None,
            verbose_io: false,
        }
    }
}

/// Disassembly report settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisasmConfig {
    /// Include `address` and `opcodes` in every report entry
    pub addresses: bool,
}
