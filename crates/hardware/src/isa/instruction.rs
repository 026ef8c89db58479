//! Instruction field extraction.
//!
//! Provides bit-level accessors for the fields of the AMO instruction format:
//!
//! ```text
//!  31    27  26  25  24  20 19  15  14  13 12 11   7 6      0
//! | funct5 | aq | rl | rs2 | rs1 | 0 | size | rd | opcode |
//! ```

use crate::isa::abi::Reg;

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for the funct5 field (bits 27-31) after shifting.
pub const FUNCT5_MASK: u32 = 0x1F;
/// Bit mask for the two-bit size field (bits 12-13) after shifting.
pub const SIZE_MASK: u32 = 0x3;

/// Bit position of the destination register field.
pub const RD_SHIFT: u32 = 7;
/// Bit position of the size field.
pub const SIZE_SHIFT: u32 = 12;
/// Bit 14: the reserved width-select bit, zero for every atomic.
pub const WIDTH_SELECT_BIT: u32 = 1 << 14;
/// Bit position of the first source register field.
pub const RS1_SHIFT: u32 = 15;
/// Bit position of the second source register field.
pub const RS2_SHIFT: u32 = 20;
/// Release ordering bit.
pub const RL_BIT: u32 = 1 << 25;
/// Acquire ordering bit.
pub const AQ_BIT: u32 = 1 << 26;
/// Bit position of the funct5 field.
pub const FUNCT5_SHIFT: u32 = 27;

/// Field accessors for AMO-format instruction words.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> Reg;

    /// Extracts the two-bit size encoding (bits 12-13).
    fn size(&self) -> u32;

    /// Extracts the reserved width-select bit (bit 14).
    fn width_select(&self) -> bool;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> Reg;

    /// Extracts the second source register field (bits 20-24).
    ///
    /// Zero for LR.
    fn rs2(&self) -> Reg;

    /// Extracts the release bit (bit 25).
    fn rl(&self) -> bool;

    /// Extracts the acquire bit (bit 26).
    fn aq(&self) -> bool;

    /// Extracts the funct5 field (bits 27-31).
    ///
    /// Selects LR, SC, or the AMO operation.
    fn funct5(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> Reg {
        Reg::from_field(self >> RD_SHIFT)
    }

    #[inline(always)]
    fn size(&self) -> u32 {
        (self >> SIZE_SHIFT) & SIZE_MASK
    }

    #[inline(always)]
    fn width_select(&self) -> bool {
        self & WIDTH_SELECT_BIT != 0
    }

    #[inline(always)]
    fn rs1(&self) -> Reg {
        Reg::from_field(self >> RS1_SHIFT)
    }

    #[inline(always)]
    fn rs2(&self) -> Reg {
        Reg::from_field(self >> RS2_SHIFT)
    }

    #[inline(always)]
    fn rl(&self) -> bool {
        self & RL_BIT != 0
    }

    #[inline(always)]
    fn aq(&self) -> bool {
        self & AQ_BIT != 0
    }

    #[inline(always)]
    fn funct5(&self) -> u32 {
        (self >> FUNCT5_SHIFT) & FUNCT5_MASK
    }
}
