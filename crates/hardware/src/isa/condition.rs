//! Condition codes.
//!
//! Every instruction carries a 4-bit condition in bits 3:0. Code 15 (`T`)
//! means "always" and is rendered without a suffix.
//!
//! | Code | Name | Holds when      |
//! |------|------|-----------------|
//! | 0    | E    | Z               |
//! | 1    | NE   | !Z              |
//! | 2    | GEU  | C               |
//! | 3    | LU   | !C              |
//! | 4    | N    | N               |
//! | 5    | NN   | !N              |
//! | 6    | O    | V               |
//! | 7    | NO   | !V              |
//! | 8    | GU   | C && !Z         |
//! | 9    | LEU  | !C \|\| Z       |
//! | 10   | GE   | N == V          |
//! | 11   | L    | N != V          |
//! | 12   | G    | !Z && N == V    |
//! | 13   | LE   | Z \|\| N != V   |
//! | 14   | F    | never           |
//! | 15   | T    | always          |

use std::fmt;

use crate::core::arch::flags::Flags;

/// Condition names indexed by code.
const NAMES: [&str; 16] = [
    "E", "NE", "GEU", "LU", "N", "NN", "O", "NO", "GU", "LEU", "GE", "L", "G", "LE", "F", "T",
];

/// A 4-bit condition code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Condition(u8);

impl Condition {
    /// The always-true condition (code 15).
    pub const ALWAYS: Self = Self(15);

    /// Builds a condition from the low four bits of `bits`.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self((bits & 0xF) as u8)
    }

    /// Builds a condition from a code, rejecting values outside 0..=15.
    pub const fn new(code: u8) -> Option<Self> {
        if code < 16 { Some(Self(code)) } else { None }
    }

    /// Returns the raw 4-bit code.
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Returns `true` for the always-true condition.
    pub const fn is_always(self) -> bool {
        self.0 == Self::ALWAYS.0
    }

    /// Returns the assembly name of the condition (`E`, `NE`, ..., `T`).
    pub const fn name(self) -> &'static str {
        NAMES[self.0 as usize]
    }

    /// Evaluates the condition against a set of flags.
    pub const fn holds(self, flags: Flags) -> bool {
        let Flags {
            negative: n,
            zero: z,
            carry: c,
            overflow: v,
        } = flags;
        match self.0 {
            0 => z,
            1 => !z,
            2 => c,
            3 => !c,
            4 => n,
            5 => !n,
            6 => v,
            7 => !v,
            8 => c && !z,
            9 => !c || z,
            10 => n == v,
            11 => n != v,
            12 => !z && n == v,
            13 => z || n != v,
            14 => false,
            _ => true,
        }
    }
}

impl Default for Condition {
    fn default() -> Self {
        Self::ALWAYS
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
