//! RISC-V Atomic Extension (A).
//!
//! Defines the decoded form of the three atomic instruction families and the
//! building blocks used to encode and decode them:
//! - [`width`]: access widths and the width validator.
//! - [`funct5`]: LR/SC function codes and the nine AMO operations.
//! - [`encoding`]: the bit-exact encoder and the guarded decoder.

/// Function code 5 definitions (LR, SC, AMO operations).
pub mod funct5;

/// Bit-level encoder and decoder.
pub mod encoding;

/// Access widths and the width validator.
pub mod width;

pub use encoding::{OP_AMO, decode, encode};
pub use funct5::AmoOp;
pub use width::{Width, is_valid_width};

use crate::config::IsaConfig;
use crate::core::units::lsu::ordering::AmoOrdering;
use crate::isa::abi::Reg;

/// A decoded atomic instruction.
///
/// Built once per decoded instruction and consumed by the execution engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AtomicInsn {
    /// `lr.{w,d}`: load and register a reservation.
    LoadReserved {
        /// Acquire annotation.
        aq: bool,
        /// Release annotation.
        rl: bool,
        /// Base address register.
        rs1: Reg,
        /// Access width.
        width: Width,
        /// Destination register.
        rd: Reg,
    },
    /// `sc.{w,d}`: store if the reservation still holds.
    StoreConditional {
        /// Acquire annotation.
        aq: bool,
        /// Release annotation.
        rl: bool,
        /// Source (data) register.
        rs2: Reg,
        /// Base address register.
        rs1: Reg,
        /// Access width.
        width: Width,
        /// Destination register (receives 0 on success, 1 on failure).
        rd: Reg,
    },
    /// `amo<op>.{w,d}`: atomic read-modify-write.
    AtomicMemOp {
        /// Operation.
        op: AmoOp,
        /// Acquire annotation.
        aq: bool,
        /// Release annotation.
        rl: bool,
        /// Source (operand) register.
        rs2: Reg,
        /// Base address register.
        rs1: Reg,
        /// Access width.
        width: Width,
        /// Destination register (receives the loaded value).
        rd: Reg,
    },
}

impl AtomicInsn {
    /// Access width.
    pub const fn width(&self) -> Width {
        match *self {
            Self::LoadReserved { width, .. }
            | Self::StoreConditional { width, .. }
            | Self::AtomicMemOp { width, .. } => width,
        }
    }

    /// Destination register.
    pub const fn rd(&self) -> Reg {
        match *self {
            Self::LoadReserved { rd, .. }
            | Self::StoreConditional { rd, .. }
            | Self::AtomicMemOp { rd, .. } => rd,
        }
    }

    /// Base address register.
    pub const fn rs1(&self) -> Reg {
        match *self {
            Self::LoadReserved { rs1, .. }
            | Self::StoreConditional { rs1, .. }
            | Self::AtomicMemOp { rs1, .. } => rs1,
        }
    }

    /// Second source register; `x0` for LR, whose encoding fixes the field to zero.
    pub const fn rs2(&self) -> Reg {
        match *self {
            Self::LoadReserved { .. } => Reg::ZERO,
            Self::StoreConditional { rs2, .. } | Self::AtomicMemOp { rs2, .. } => rs2,
        }
    }

    /// The aq/rl annotation pair.
    pub const fn ordering(&self) -> AmoOrdering {
        match *self {
            Self::LoadReserved { aq, rl, .. }
            | Self::StoreConditional { aq, rl, .. }
            | Self::AtomicMemOp { aq, rl, .. } => AmoOrdering::new(aq, rl),
        }
    }

    /// Returns true if a hart with `isa` would decode this instruction.
    ///
    /// Equivalent to `decode(encode(self), isa).is_some()`.
    pub const fn is_supported(&self, isa: &IsaConfig) -> bool {
        let enabled = match self {
            Self::LoadReserved { .. } | Self::StoreConditional { .. } => isa.lrsc_enabled(),
            Self::AtomicMemOp { .. } => isa.amo_enabled(),
        };
        enabled && isa.is_valid_width(self.width())
    }
}
