//! Reference Machine Tests.

use std::io::Cursor;

use pretty_assertions::assert_eq;

use runcpu_core::common::STACK_POINTER;
use runcpu_core::config::MachineConfig;
use runcpu_core::core::arch::Flags;
use runcpu_core::soc::{Machine, MachineState};
use runcpu_core::{decode, execute};

fn machine(config: &MachineConfig) -> Machine<Cursor<Vec<u8>>, Vec<u8>> {
    Machine::with_io(config, Cursor::new(Vec::new()), Vec::new())
}

#[test]
fn starts_cleared_with_stack_at_top() {
    let config = MachineConfig {
        memory_size: 256,
        ..MachineConfig::default()
    };
    let m = machine(&config);

    assert_eq!(m.get_reg(STACK_POINTER), 256);
    for idx in (0..16).filter(|&i| i != STACK_POINTER) {
        assert_eq!(m.get_reg(idx), 0);
    }
    assert_eq!(m.flags(), Flags::default());
    assert!(!m.is_halted());
    assert_eq!(m.memory().len(), 256);
}

#[test]
fn explicit_initial_sp() {
    let config = MachineConfig {
        memory_size: 256,
        initial_sp: Some(0x40),
        ..MachineConfig::default()
    };
    assert_eq!(machine(&config).registers().read(STACK_POINTER), 0x40);
}

#[test]
fn runs_a_loaded_program_word_by_word() {
    let config = MachineConfig {
        memory_size: 256,
        ..MachineConfig::default()
    };
    let mut m = machine(&config);
    // ADD 5, R0, R1 ; PUSH R1 ; POP R2 ; HALT
    let program = [0x6005_001F, 0xC400_100F, 0xD000_002F, 0xFC00_000F];
    m.memory_mut().load_words(0, &program).unwrap();

    let mut pc = 0;
    while !m.is_halted() {
        let word = m.read_memory(pc).unwrap();
        execute(decode(word), &mut m).unwrap();
        pc += 4;
    }

    assert_eq!(pc, 16);
    assert_eq!(m.get_reg(1), 5);
    assert_eq!(m.get_reg(2), 5);
    assert_eq!(m.get_reg(STACK_POINTER), 256);
}

#[test]
fn verbose_io_reaches_console() {
    let config = MachineConfig {
        memory_size: 64,
        verbose_io: true,
        ..MachineConfig::default()
    };
    let mut m = machine(&config);
    m.write_output(b'x').unwrap();
    assert_eq!(m.console().output().as_slice(), b"\n[!] Output: x\n\n");
}
