//! ALU Rotate Operation Tests.
//!
//! `ROL` rotates operand B by the low five bits of operand A.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use runcpu_core::core::units::alu::{Alu, AluOutput};
use runcpu_core::isa::AluOp;

fn rol(a: u32, b: u32) -> AluOutput {
    Alu::execute(AluOp::Rol, a, b).unwrap_or_default()
}

#[test]
fn rol_by_zero_is_identity() {
    let out = rol(0, 0x8000_0001);
    assert_eq!(out.value, 0x8000_0001);
    assert!(out.carry);
    assert!(!out.overflow);
}

#[test]
fn rol_moves_top_bit_into_carry() {
    let out = rol(1, 0x8000_0000);
    assert_eq!(out.value, 1);
    assert!(out.carry);
    assert!(out.overflow);
}

#[test]
fn rol_uses_low_five_bits_of_amount() {
    assert_eq!(rol(33, 0x0000_0001).value, 2);
    assert_eq!(rol(32, 0x1234_5678).value, 0x1234_5678);
}

#[test]
fn rol_by_four() {
    let out = rol(4, 0x1234_5678);
    assert_eq!(out.value, 0x2345_6781);
    assert!(out.carry);
    assert!(!out.overflow);
}

#[test]
fn rol_overflow_on_sign_change() {
    let out = rol(1, 0x4000_0000);
    assert_eq!(out.value, 0x8000_0000);
    assert!(!out.carry);
    assert!(out.overflow);
}

proptest! {
    #[test]
    fn rol_matches_rotate_left(a: u32, b: u32) {
        let out = rol(a, b);
        prop_assert_eq!(out.value, b.rotate_left(a % 32));
        prop_assert_eq!(out.carry, out.value & 1 == 1);
        prop_assert_eq!(out.overflow, (out.value >> 31) != (b >> 31));
    }
}
