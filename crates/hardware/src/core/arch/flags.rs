//! Condition Flags.
//!
//! The four flags written by flag-setting arithmetic instructions and read by
//! [`Condition::holds`](crate::isa::Condition::holds).

/// Negative, zero, carry and overflow flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Flags {
    /// Result sign bit (N).
    pub negative: bool,
    /// Result was zero (Z).
    pub zero: bool,
    /// Carry out of bit 31 (C).
    pub carry: bool,
    /// Signed overflow (V).
    pub overflow: bool,
}

impl Flags {
    /// Derives N and Z from `result` and takes C and V as given.
    pub const fn from_result(result: u32, carry: bool, overflow: bool) -> Self {
        Self {
            negative: result >> 31 != 0,
            zero: result == 0,
            carry,
            overflow,
        }
    }
}
