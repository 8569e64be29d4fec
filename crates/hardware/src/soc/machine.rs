//! Reference Machine.
//!
//! A straightforward [`MachineState`] implementation: a register file, flat
//! memory, flags, a halt latch and a console for the I/O port. It has no
//! program counter; callers drive it one instruction at a time.

use std::io::{self, Read, Write};

use crate::common::constants::STACK_POINTER;
use crate::common::error::Fault;
use crate::config::MachineConfig;
use crate::core::arch::flags::Flags;
use crate::core::arch::gpr::Gpr;
use crate::soc::console::Console;
use crate::soc::memory::Memory;
use crate::soc::traits::MachineState;

/// Reference machine state.
///
/// Generic over the I/O port streams; [`Machine::new`] uses stdin/stdout.
#[derive(Debug)]
pub struct Machine<I = io::Stdin, O = io::Stdout> {
    gpr: Gpr,
    memory: Memory,
    flags: Flags,
    halted: bool,
    console: Console<I, O>,
}

impl Machine {
    /// Creates a machine whose I/O port is connected to stdin and stdout.
    pub fn new(config: &MachineConfig) -> Self {
        Self::with_io(config, io::stdin(), io::stdout())
    }
}

impl<I: Read, O: Write> Machine<I, O> {
    /// Creates a machine whose I/O port reads `input` and writes `output`.
    ///
    /// Registers and flags start cleared except the stack pointer, which is
    /// set to [`MachineConfig::stack_top`].
    pub fn with_io(config: &MachineConfig, input: I, output: O) -> Self {
        let mut gpr = Gpr::new();
        gpr.write(STACK_POINTER, config.stack_top());
        Self {
            gpr,
            memory: Memory::new(config.memory_size),
            flags: Flags::default(),
            halted: false,
            console: Console::new(input, output, config.verbose_io),
        }
    }

    /// Returns the register file.
    pub const fn registers(&self) -> &Gpr {
        &self.gpr
    }

    /// Returns the current flags.
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    /// Returns `true` once a `HALT` has executed.
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// Returns main memory.
    pub const fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Returns main memory for loading programs or data.
    pub const fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Returns the I/O port console.
    pub const fn console(&self) -> &Console<I, O> {
        &self.console
    }
}

impl<I: Read, O: Write> MachineState for Machine<I, O> {
    fn get_reg(&self, idx: usize) -> u32 {
        self.gpr.read(idx)
    }

    fn set_reg(&mut self, idx: usize, val: u32) {
        self.gpr.write(idx, val);
    }

    fn read_memory(&mut self, addr: u32) -> Result<u32, Fault> {
        self.memory.read_u32(addr)
    }

    fn write_memory(&mut self, addr: u32, val: u32) -> Result<(), Fault> {
        self.memory.write_u32(addr, val)
    }

    fn set_flags(&mut self, flags: Flags) {
        self.flags = flags;
    }

    fn halt(&mut self) {
        self.halted = true;
    }

    fn read_input(&mut self) -> Result<u8, Fault> {
        self.console.read_byte()
    }

    fn write_output(&mut self, byte: u8) -> Result<(), Fault> {
        self.console.write_byte(byte)
    }
}
