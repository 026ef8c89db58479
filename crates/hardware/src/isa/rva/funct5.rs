//! RISC-V Atomic Extension (A) Function Codes (funct5).
//!
//! The `funct5` field (bits 31-27) selects LR, SC or one of the nine AMO
//! operations. Codes and enumerants are in one-to-one correspondence.

use std::fmt;

/// Atomic Load-Reserved.
pub const LR: u32 = 0b00010;

/// Atomic Store-Conditional.
pub const SC: u32 = 0b00011;

/// Read-modify-write operation performed by an AMO.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AmoOp {
    /// Atomic Swap.
    Swap = 0b00001,
    /// Atomic Add.
    Add = 0b00000,
    /// Atomic XOR.
    Xor = 0b00100,
    /// Atomic AND.
    And = 0b01100,
    /// Atomic OR.
    Or = 0b01000,
    /// Atomic Minimum (Signed).
    Min = 0b10000,
    /// Atomic Maximum (Signed).
    Max = 0b10100,
    /// Atomic Minimum (Unsigned).
    Minu = 0b11000,
    /// Atomic Maximum (Unsigned).
    Maxu = 0b11100,
}

impl AmoOp {
    /// All nine operations.
    pub const ALL: [Self; 9] = [
        Self::Swap,
        Self::Add,
        Self::Xor,
        Self::And,
        Self::Or,
        Self::Min,
        Self::Max,
        Self::Minu,
        Self::Maxu,
    ];

    /// The operation's funct5 code.
    #[inline]
    pub const fn funct5(self) -> u32 {
        self as u32
    }

    /// Operation for a funct5 code; `None` for LR, SC and unused codes.
    pub const fn from_funct5(code: u32) -> Option<Self> {
        match code {
            0b00001 => Some(Self::Swap),
            0b00000 => Some(Self::Add),
            0b00100 => Some(Self::Xor),
            0b01100 => Some(Self::And),
            0b01000 => Some(Self::Or),
            0b10000 => Some(Self::Min),
            0b10100 => Some(Self::Max),
            0b11000 => Some(Self::Minu),
            0b11100 => Some(Self::Maxu),
            _ => None,
        }
    }

    /// Mnemonic stem following `amo` (`swap`, `add`, ...).
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Swap => "swap",
            Self::Add => "add",
            Self::Xor => "xor",
            Self::And => "and",
            Self::Or => "or",
            Self::Min => "min",
            Self::Max => "max",
            Self::Minu => "minu",
            Self::Maxu => "maxu",
        }
    }

    /// Operation for a mnemonic stem.
    pub fn from_mnemonic(stem: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.mnemonic() == stem)
    }
}

impl fmt::Display for AmoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "amo{}", self.mnemonic())
    }
}
