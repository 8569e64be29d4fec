//! Instruction Execution.
//!
//! Applies a decoded [`Instruction`] to a [`MachineState`]. All side effects
//! go through the trait; the executor keeps no state of its own.
//!
//! The condition code is not evaluated here. A driver that honours
//! conditions checks [`Condition::holds`](crate::isa::Condition::holds)
//! against the machine's flags before calling [`execute`].

use tracing::{debug, trace};

use crate::common::constants::{IO_PORT, STACK_POINTER, WORD_BYTES};
use crate::common::error::Fault;
use crate::core::units::alu::Alu;
use crate::isa::instruction::Instruction;
use crate::soc::traits::MachineState;

/// Executes one instruction against `machine`.
///
/// # Errors
///
/// Returns [`Fault::UnassignedOpcode`] for arithmetic opcode 4, leaving the
/// machine untouched, and propagates any fault raised by the machine.
///
/// # Examples
///
/// ```
/// use runcpu_core::config::MachineConfig;
/// use runcpu_core::soc::{Machine, MachineState};
/// use runcpu_core::{decode, execute};
///
/// let mut machine = Machine::with_io(&MachineConfig::default(), &b""[..], Vec::new());
/// machine.set_reg(1, 0x7FFF_FFFF);
/// machine.set_reg(2, 1);
///
/// // ADDf R1, R2, R3
/// execute(decode(0x6C00_123F), &mut machine).unwrap();
/// assert_eq!(machine.get_reg(3), 0x8000_0000);
/// assert!(machine.flags().overflow);
/// assert!(machine.flags().negative);
/// ```
pub fn execute<M: MachineState + ?Sized>(instr: Instruction, machine: &mut M) -> Result<(), Fault> {
    trace!(%instr, "execute");

    match instr {
        Instruction::Arithmetic {
            op,
            set_flags,
            register_operand,
            immediate,
            ra,
            rb,
            rd,
            ..
        } => {
            let a = if register_operand {
                machine.get_reg(ra)
            } else {
                immediate as u32
            };
            let b = machine.get_reg(rb);

            let Some(out) = Alu::execute(op, a, b) else {
                debug!(opcode = op.bits(), "unassigned arithmetic opcode");
                return Err(Fault::UnassignedOpcode { opcode: op.bits() });
            };

            if set_flags {
                machine.set_flags(out.flags());
            }
            machine.set_reg(rd, out.value);
        }
        Instruction::LoadHigh { constant, rd, .. } => {
            machine.set_reg(rd, constant << 10);
        }
        Instruction::MemoryRead { offset, ra, rd, .. } => {
            let addr = effective_address(machine, ra, offset);
            let data = if addr == IO_PORT {
                u32::from(machine.read_input()?)
            } else {
                machine.read_memory(addr)?
            };
            machine.set_reg(rd, data);
        }
        Instruction::MemoryWrite { offset, ra, rb, .. } => {
            let addr = effective_address(machine, ra, offset);
            let data = machine.get_reg(rb);
            if addr == IO_PORT {
                machine.write_output(data as u8)?;
            } else {
                machine.write_memory(addr, data)?;
            }
        }
        Instruction::Push { ra, .. } => {
            let data = machine.get_reg(ra);
            let sp = machine.get_reg(STACK_POINTER).wrapping_sub(WORD_BYTES);
            machine.write_memory(sp, data)?;
            machine.set_reg(STACK_POINTER, sp);
        }
        Instruction::Pop { rd, .. } => {
            let sp = machine.get_reg(STACK_POINTER);
            let data = machine.read_memory(sp)?;
            machine.set_reg(rd, data);
            machine.set_reg(STACK_POINTER, sp.wrapping_add(WORD_BYTES));
        }
        Instruction::Halt { .. } => machine.halt(),
        Instruction::NoOp { .. } => {}
    }

    Ok(())
}

/// Computes `R[ra] + offset` with 32-bit wraparound.
#[inline]
fn effective_address<M: MachineState + ?Sized>(machine: &M, ra: usize, offset: i32) -> u32 {
    machine.get_reg(ra).wrapping_add(offset as u32)
}
