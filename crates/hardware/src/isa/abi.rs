//! RISC-V Application Binary Interface (ABI) register names.
//!
//! Defines the [`Reg`] index type used by instruction descriptors, together
//! with the ABI names the assembly formatter prints and the parser accepts.

use std::fmt;
use std::str::FromStr;

use crate::isa::disasm::AsmError;

/// ABI register names for x0–x31.
pub const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// An integer register index in `0..32`.
///
/// The invariant is upheld by construction, so encoding a descriptor never
/// needs to mask or reject a register field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Reg(u8);

impl Reg {
    /// Register x0 (zero register, always zero).
    pub const ZERO: Self = Self(0);
    /// Register x10 (first argument/return value, a0).
    pub const A0: Self = Self(10);
    /// Register x11 (second argument, a1).
    pub const A1: Self = Self(11);
    /// Register x12 (third argument, a2).
    pub const A2: Self = Self(12);
    /// Register x13 (fourth argument, a3).
    pub const A3: Self = Self(13);

    /// Returns the register with index `idx`, or `None` if `idx >= 32`.
    pub const fn new(idx: u8) -> Option<Self> {
        if idx < 32 { Some(Self(idx)) } else { None }
    }

    /// Builds a register from a 5-bit instruction field, ignoring higher bits.
    #[inline(always)]
    pub const fn from_field(bits: u32) -> Self {
        Self((bits & 0x1F) as u8)
    }

    /// Register index as used by the register file.
    #[inline(always)]
    pub const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Register index as an instruction field value.
    #[inline(always)]
    pub const fn field(self) -> u32 {
        self.0 as u32
    }

    /// ABI name of the register (`a0`, `sp`, ...).
    pub const fn abi_name(self) -> &'static str {
        REG_NAMES[self.0 as usize]
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abi_name())
    }
}

impl FromStr for Reg {
    type Err = AsmError;

    /// Accepts ABI names, the `fp` alias of `s0`, and numeric `x0`..`x31`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "fp" {
            return Ok(Self(8));
        }
        if let Some(pos) = REG_NAMES.iter().position(|name| *name == s) {
            return Ok(Self(pos as u8));
        }
        s.strip_prefix('x')
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .filter(|digits| digits.len() == 1 || !digits.starts_with('0'))
            .and_then(|digits| digits.parse::<u8>().ok())
            .and_then(Self::new)
            .ok_or_else(|| AsmError::UnknownRegister(s.to_string()))
    }
}
