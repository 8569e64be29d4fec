//! ALU Logical Operation Tests.

use pretty_assertions::assert_eq;
use rstest::rstest;

use runcpu_core::core::units::alu::{Alu, AluOutput};
use runcpu_core::isa::AluOp;

#[rstest]
#[case(AluOp::Or, 0xF0F0_0000, 0x0000_0F0F, 0xF0F0_0F0F)]
#[case(AluOp::Xor, 0xFFFF_0000, 0x0F0F_0F0F, 0xF0F0_0F0F)]
#[case(AluOp::And, 0xFFFF_0000, 0x0F0F_0F0F, 0x0F0F_0000)]
#[case(AluOp::Bic, 0xFFFF_FFFF, 0x0000_00FF, 0xFFFF_FF00)]
#[case(AluOp::Bic, 0x0000_00FF, 0xFFFF_FFFF, 0)]
fn logic_results(#[case] op: AluOp, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(op, a, b), Some(AluOutput::plain(expected)));
}

#[test]
fn logic_never_sets_carry_or_overflow() {
    for op in [AluOp::Or, AluOp::Xor, AluOp::And, AluOp::Bic] {
        let out = Alu::execute(op, u32::MAX, 0x8000_0000).unwrap_or_default();
        assert!(!out.carry, "{op:?}");
        assert!(!out.overflow, "{op:?}");
    }
}

#[test]
fn logic_zero_and_negative_flags() {
    let out = Alu::execute(AluOp::And, 0xF0, 0x0F).unwrap_or_default();
    assert!(out.flags().zero);
    let out = Alu::execute(AluOp::Or, 0x8000_0000, 0).unwrap_or_default();
    assert!(out.flags().negative);
    assert!(!out.flags().zero);
}
