//! Hart Definition and Initialization.
//!
//! This module defines the `Hart`, the container for the architectural state an
//! atomic instruction reads and writes. It coordinates the following:
//! 1. **State Management:** Owns the integer registers and the reservation set.
//! 2. **Dispatch:** Decodes raw words and routes descriptors to the LR, SC and AMO paths.
//! 3. **Bookkeeping:** Keeps per-hart statistics and the instruction trace.
//!
//! Everything outside the hart (memory, translation, extension checks, traps and the
//! store-conditional oracle) is reached through a [`Platform`] passed to each call.

/// LR, SC and AMO execute paths.
pub mod execution;

/// Effective-address resolution.
pub mod memory;

/// Exception and extension-error reporting.
pub mod trap;

use tracing::info;

use crate::common::RegisterFile;
use crate::config::Config;
use crate::core::units::lsu::ReservationSet;
use crate::isa::rva::{self, AtomicInsn};
use crate::soc::traits::Platform;
use crate::stats::AtomicStats;

/// Outcome of executing one instruction.
///
/// `Fail` means the instruction raised an exception (already handed to the
/// trap handler or the extension hook) and did not complete. A
/// store-conditional that writes 1 to `rd` still retires with `Success`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub enum Retire {
    /// The instruction completed.
    Success,
    /// The instruction raised an exception.
    Fail,
}

impl Retire {
    /// Returns true for [`Retire::Success`].
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// A single hardware thread's atomic-instruction state.
#[derive(Clone, Debug)]
pub struct Hart {
    /// Integer registers.
    pub regs: RegisterFile,
    /// LR/SC reservation.
    pub reservation: ReservationSet,
    /// Execution counters.
    pub stats: AtomicStats,
    config: Config,
}

impl Hart {
    /// Creates a hart with zeroed registers and no reservation.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(config.isa.xlen),
            reservation: ReservationSet::new(),
            stats: AtomicStats::default(),
            config: config.clone(),
        }
    }

    /// Configuration this hart was built with.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Decodes a raw word against this hart's ISA configuration.
    pub fn decode(&self, raw: u32) -> Option<AtomicInsn> {
        rva::decode(raw, &self.config.isa)
    }

    /// Decodes and executes one raw instruction word.
    ///
    /// Returns `None` without side effects if `raw` is not an atomic this
    /// hart implements.
    pub fn step(&mut self, raw: u32, platform: &mut Platform<'_>) -> Option<Retire> {
        let insn = self.decode(raw)?;
        Some(self.execute(&insn, platform))
    }

    /// Executes one decoded atomic instruction.
    ///
    /// `insn` must be one this hart decodes (see [`AtomicInsn::is_supported`]).
    /// Width and extension checks happen in [`Hart::decode`], not here.
    ///
    /// # Panics
    ///
    /// Panics if the memory port declines an AMO's data write after accepting
    /// its effective address. Debug builds also panic on a descriptor the
    /// hart's ISA configuration does not support.
    pub fn execute(&mut self, insn: &AtomicInsn, platform: &mut Platform<'_>) -> Retire {
        debug_assert!(
            insn.is_supported(&self.config.isa),
            "`{insn}` is not supported by this hart"
        );
        let ord = insn.ordering();
        let retire = match *insn {
            AtomicInsn::LoadReserved { rs1, width, rd, .. } => {
                self.execute_lr(platform, ord, rs1, width, rd)
            }
            AtomicInsn::StoreConditional {
                rs2, rs1, width, rd, ..
            } => self.execute_sc(platform, ord, rs2, rs1, width, rd),
            AtomicInsn::AtomicMemOp {
                op,
                rs2,
                rs1,
                width,
                rd,
                ..
            } => self.execute_amo(platform, op, ord, rs2, rs1, width, rd),
        };
        if self.config.general.trace_instructions {
            info!(
                "{:<28} {:?} {}={:#x}",
                insn.to_string(),
                retire,
                insn.rd(),
                self.regs.read(insn.rd().idx())
            );
        }
        retire
    }
}
