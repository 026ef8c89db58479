//! Integer Register File.
//!
//! This module provides the `RegisterFile` used by the execute paths. It provides:
//! 1. **Storage:** 32 integer registers (`x0`-`x31`).
//! 2. **Invariant Enforcement:** `x0` is hardwired to zero and every write is truncated to XLEN.
//! 3. **Debugging:** A register dump for test diagnostics.

use std::fmt;

use serde::Deserialize;

/// Number of integer registers.
pub const NUM_REGS: usize = 32;

/// Native register width of the hart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(try_from = "u32")]
pub enum Xlen {
    /// 32-bit registers (RV32).
    Rv32,
    /// 64-bit registers (RV64).
    #[default]
    Rv64,
}

impl Xlen {
    /// Register width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Rv32 => 32,
            Self::Rv64 => 64,
        }
    }

    /// Mask selecting the architecturally visible bits of a register.
    pub const fn mask(self) -> u64 {
        match self {
            Self::Rv32 => 0xFFFF_FFFF,
            Self::Rv64 => u64::MAX,
        }
    }
}

impl TryFrom<u32> for Xlen {
    type Error = String;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            32 => Ok(Self::Rv32),
            64 => Ok(Self::Rv64),
            other => Err(format!("unsupported XLEN {other} (expected 32 or 64)")),
        }
    }
}

impl fmt::Display for Xlen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RV{}", self.bits())
    }
}

/// Integer register file.
///
/// Values are held in `u64` cells; on RV32 only the low 32 bits are kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u64; NUM_REGS],
    xlen: Xlen,
}

impl RegisterFile {
    /// Creates a register file with all registers zero.
    pub const fn new(xlen: Xlen) -> Self {
        Self {
            regs: [0; NUM_REGS],
            xlen,
        }
    }

    /// Register width this file was built for.
    pub const fn xlen(&self) -> Xlen {
        self.xlen
    }

    /// Reads an integer register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `x0` always returns 0.
    pub fn read(&self, idx: usize) -> u64 {
        if idx == 0 { 0 } else { self.regs[idx & 0x1F] }
    }

    /// Writes an integer register, truncating the value to XLEN.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `x0` are ignored.
    /// * `val` - The 64-bit value to write.
    pub fn write(&mut self, idx: usize, val: u64) {
        if idx != 0 {
            self.regs[idx & 0x1F] = val & self.xlen.mask();
        }
    }

    /// Formats all registers in pairs, one pair per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for i in (0..NUM_REGS).step_by(2) {
            out.push_str(&format!(
                "x{:<2}={:#018x} x{:<2}={:#018x}\n",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1]
            ));
        }
        out
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new(Xlen::default())
    }
}
