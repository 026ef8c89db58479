//! Atomic Execute Paths.
//!
//! Each family runs as a straight pipeline with early exit; nothing loops or retries.
//! 1. **LR:** resolve, align, translate, read, then reserve and write `rd`.
//! 2. **SC:** consult the oracle, resolve, align, match the reservation, translate,
//!    probe, write, then report 0/1 in `rd`. The reservation is gone afterwards
//!    whichever way the instruction ends.
//! 3. **AMO:** resolve, align, translate, probe, read, compute, write, then write the
//!    pre-image to `rd`. The reservation is untouched.
//!
//! A faulting instruction leaves `rd` unchanged.

use tracing::{debug, trace};

use super::{Hart, Retire};
use crate::common::{AccessType, ExceptionKind};
use crate::core::units::lsu::{AmoOrdering, atomic_alu};
use crate::isa::abi::Reg;
use crate::isa::rva::{AmoOp, Width};
use crate::soc::traits::Platform;
use crate::stats::ScFailure;

/// Value written to `rd` by a store-conditional that stored.
pub const SC_SUCCESS: u64 = 0;

/// Value written to `rd` by a store-conditional that did not store.
pub const SC_FAILURE: u64 = 1;

impl Hart {
    /// Executes `lr.{w,d}`.
    pub(crate) fn execute_lr(
        &mut self,
        platform: &mut Platform<'_>,
        ord: AmoOrdering,
        rs1: Reg,
        width: Width,
        rd: Reg,
    ) -> Retire {
        let bytes = width.bytes();
        let vaddr = match self.resolve(&mut *platform.extensions, rs1, AccessType::Read, bytes) {
            Ok(vaddr) => vaddr,
            Err(err) => return self.reject(platform, err),
        };
        if !vaddr.is_aligned(bytes) {
            return self.raise(platform, vaddr, ExceptionKind::LoadAddressMisaligned);
        }
        let paddr = match platform.translator.translate(vaddr, AccessType::Read) {
            Ok(paddr) => paddr,
            Err(kind) => return self.raise(platform, vaddr, kind),
        };
        let data = match platform
            .memory
            .read(AccessType::Read, paddr, bytes, ord.read(), true)
        {
            Ok(data) => data,
            Err(kind) => return self.raise(platform, vaddr, kind),
        };

        self.reservation.load_reservation(vaddr);
        let val = width.sign_extend(data);
        self.regs.write(rd.idx(), val);
        self.stats.lr += 1;
        trace!(%vaddr, %paddr, %width, val, "lr");
        Retire::Success
    }

    /// Executes `sc.{w,d}`.
    ///
    /// The reservation is cleared on every exit, including faults.
    pub(crate) fn execute_sc(
        &mut self,
        platform: &mut Platform<'_>,
        ord: AmoOrdering,
        rs2: Reg,
        rs1: Reg,
        width: Width,
        rd: Reg,
    ) -> Retire {
        let retire = self.store_conditional(platform, ord, rs2, rs1, width, rd);
        self.reservation.cancel_reservation();
        retire
    }

    fn store_conditional(
        &mut self,
        platform: &mut Platform<'_>,
        ord: AmoOrdering,
        rs2: Reg,
        rs1: Reg,
        width: Width,
        rd: Reg,
    ) -> Retire {
        if !platform.oracle.speculate_conditional() {
            return self.sc_fail(rd, ScFailure::Speculative);
        }

        let bytes = width.bytes();
        let vaddr = match self.resolve(&mut *platform.extensions, rs1, AccessType::Write, bytes) {
            Ok(vaddr) => vaddr,
            Err(err) => return self.reject(platform, err),
        };
        if !vaddr.is_aligned(bytes) {
            return self.raise(platform, vaddr, ExceptionKind::StoreAmoAddressMisaligned);
        }
        if !self.reservation.match_reservation(vaddr) {
            debug!(%vaddr, reserved = ?self.reservation.reserved(), "sc without matching reservation");
            return self.sc_fail(rd, ScFailure::Reservation);
        }
        let paddr = match platform.translator.translate(vaddr, AccessType::Write) {
            Ok(paddr) => paddr,
            Err(kind) => return self.raise(platform, vaddr, kind),
        };
        if let Err(kind) = platform
            .memory
            .write_effective_address(paddr, bytes, ord.write(), true)
        {
            return self.raise(platform, vaddr, kind);
        }

        let data = self.regs.read(rs2.idx()) & width.mask();
        match platform
            .memory
            .write_value(paddr, bytes, data, ord.write(), true)
        {
            Ok(true) => {
                self.regs.write(rd.idx(), SC_SUCCESS);
                self.stats.sc_success += 1;
                trace!(%vaddr, %paddr, %width, data, "sc stored");
                Retire::Success
            }
            Ok(false) => self.sc_fail(rd, ScFailure::NotCommitted),
            Err(kind) => self.raise(platform, vaddr, kind),
        }
    }

    fn sc_fail(&mut self, rd: Reg, why: ScFailure) -> Retire {
        debug!(?why, "sc failed");
        self.regs.write(rd.idx(), SC_FAILURE);
        self.stats.record_sc_failure(why);
        Retire::Success
    }

    /// Executes `amo<op>.{w,d}`.
    ///
    /// # Panics
    ///
    /// Panics if the memory port reports the data write as not committed after
    /// it accepted the effective address. An AMO has no failure encoding, so
    /// this indicates a broken memory port rather than a guest-visible event.
    pub(crate) fn execute_amo(
        &mut self,
        platform: &mut Platform<'_>,
        op: AmoOp,
        ord: AmoOrdering,
        rs2: Reg,
        rs1: Reg,
        width: Width,
        rd: Reg,
    ) -> Retire {
        let bytes = width.bytes();
        let vaddr = match self.resolve(&mut *platform.extensions, rs1, AccessType::ReadWrite, bytes) {
            Ok(vaddr) => vaddr,
            Err(err) => return self.reject(platform, err),
        };
        if !vaddr.is_aligned(bytes) {
            return self.raise(platform, vaddr, ExceptionKind::StoreAmoAddressMisaligned);
        }
        let paddr = match platform.translator.translate(vaddr, AccessType::ReadWrite) {
            Ok(paddr) => paddr,
            Err(kind) => return self.raise(platform, vaddr, kind),
        };
        if let Err(kind) = platform
            .memory
            .write_effective_address(paddr, bytes, ord.write(), true)
        {
            return self.raise(platform, vaddr, kind);
        }
        let loaded = match platform
            .memory
            .read(AccessType::ReadWrite, paddr, bytes, ord.read(), true)
        {
            Ok(loaded) => loaded,
            Err(kind) => return self.raise(platform, vaddr, kind),
        };

        let operand = self.regs.read(rs2.idx());
        let result = atomic_alu(op, loaded, operand, width) & width.mask();
        match platform
            .memory
            .write_value(paddr, bytes, result, ord.write(), true)
        {
            Ok(true) => {
                let old = width.sign_extend(loaded);
                self.regs.write(rd.idx(), old);
                self.stats.record_amo(op);
                trace!(%op, %vaddr, %paddr, %width, old, result, "amo");
                Retire::Success
            }
            Ok(false) => panic!(
                "{op}{} at {vaddr}: write not committed after its effective address was accepted",
                width.suffix()
            ),
            Err(kind) => self.raise(platform, vaddr, kind),
        }
    }
}
