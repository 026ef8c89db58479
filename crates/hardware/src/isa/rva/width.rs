//! Data widths and the width validator.
//!
//! The two-bit size field names four widths, but only `Word` and `Double`
//! exist as atomics, and `Double` only on RV64.

use std::fmt;

use crate::common::reg::Xlen;

/// Size-field encoding of an 8-bit access.
pub const SIZE_BYTE: u32 = 0b00;
/// Size-field encoding of a 16-bit access.
pub const SIZE_HALF: u32 = 0b01;
/// Size-field encoding of a 32-bit access.
pub const SIZE_WORD: u32 = 0b10;
/// Size-field encoding of a 64-bit access.
pub const SIZE_DOUBLE: u32 = 0b11;

/// Access width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Width {
    /// 8 bits.
    Byte,
    /// 16 bits.
    Half,
    /// 32 bits.
    Word,
    /// 64 bits.
    Double,
}

impl Width {
    /// Every width, in size-field order.
    pub const ALL: [Self; 4] = [Self::Byte, Self::Half, Self::Word, Self::Double];

    /// Access size in bytes.
    pub const fn bytes(self) -> u64 {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
            Self::Double => 8,
        }
    }

    /// Access size in bits.
    pub const fn bits(self) -> u32 {
        (self.bytes() * 8) as u32
    }

    /// Two-character mnemonic suffix (`.w`, `.d`, ...).
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Byte => ".b",
            Self::Half => ".h",
            Self::Word => ".w",
            Self::Double => ".d",
        }
    }

    /// Two-bit size-field encoding.
    pub const fn size_bits(self) -> u32 {
        match self {
            Self::Byte => SIZE_BYTE,
            Self::Half => SIZE_HALF,
            Self::Word => SIZE_WORD,
            Self::Double => SIZE_DOUBLE,
        }
    }

    /// Width named by a size field; only the low two bits are looked at.
    pub const fn from_size_bits(bits: u32) -> Self {
        match bits & 0b11 {
            SIZE_BYTE => Self::Byte,
            SIZE_HALF => Self::Half,
            SIZE_WORD => Self::Word,
            _ => Self::Double,
        }
    }

    /// Mask of the low `bits()` bits.
    pub const fn mask(self) -> u64 {
        match self {
            Self::Double => u64::MAX,
            _ => (1u64 << self.bits()) - 1,
        }
    }

    /// Sign-extends the low `bits()` bits of `val` to 64 bits.
    pub const fn sign_extend(self, val: u64) -> u64 {
        match self {
            Self::Byte => val as u8 as i8 as i64 as u64,
            Self::Half => val as u16 as i16 as i64 as u64,
            Self::Word => val as u32 as i32 as i64 as u64,
            Self::Double => val,
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.suffix()[1..])
    }
}

/// Returns true if `width` is a legal atomic width on a hart with `xlen`.
///
/// Pure and total: `Word` always, `Double` only for XLEN >= 64, never
/// `Byte` or `Half`.
pub const fn is_valid_width(width: Width, xlen: Xlen) -> bool {
    match width {
        Width::Word => true,
        Width::Double => xlen.bits() >= 64,
        Width::Byte | Width::Half => false,
    }
}
