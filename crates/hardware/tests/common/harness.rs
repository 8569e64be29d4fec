//! Test harness around the reference machine.

use std::io::Cursor;

use runcpu_core::common::Fault;
use runcpu_core::config::MachineConfig;
use runcpu_core::soc::{Machine, MachineState};
use runcpu_core::{decode, execute};

/// Memory size used by test machines (4 KiB).
pub const TEST_MEMORY: usize = 4096;

/// A reference machine with in-memory input and captured output.
pub struct TestContext {
    /// The machine under test.
    pub machine: Machine<Cursor<Vec<u8>>, Vec<u8>>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Creates a context with no input and a 4 KiB memory.
    pub fn new() -> Self {
        Self::with_config(MachineConfig {
            memory_size: TEST_MEMORY,
            ..MachineConfig::default()
        })
    }

    /// Creates a context from an explicit machine configuration.
    pub fn with_config(config: MachineConfig) -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        Self {
            machine: Machine::with_io(&config, Cursor::new(Vec::new()), Vec::new()),
        }
    }

    /// Creates a context whose I/O port reads `input`.
    pub fn with_input(input: &[u8]) -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let config = MachineConfig {
            memory_size: TEST_MEMORY,
            ..MachineConfig::default()
        };
        Self {
            machine: Machine::with_io(&config, Cursor::new(input.to_vec()), Vec::new()),
        }
    }

    /// Sets register `idx`.
    pub fn set_reg(&mut self, idx: usize, val: u32) {
        self.machine.set_reg(idx, val);
    }

    /// Reads register `idx`.
    pub fn get_reg(&self, idx: usize) -> u32 {
        self.machine.get_reg(idx)
    }

    /// Decodes and executes one raw word.
    pub fn run(&mut self, word: u32) -> Result<(), Fault> {
        execute(decode(word), &mut self.machine)
    }

    /// Returns everything written to the I/O port so far.
    pub fn output(&self) -> &[u8] {
        self.machine.console().output()
    }
}
