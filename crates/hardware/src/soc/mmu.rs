//! Bare-mode address translation.
//!
//! With `satp.MODE = Bare` the physical address equals the virtual address,
//! truncated to XLEN bits. Translation never faults; page and access faults
//! come from translators that model paging.

use crate::common::{AccessType, ExceptionKind, PhysAddr, VirtAddr, Xlen};
use crate::soc::traits::Translator;

/// Identity translator for a hart running without paging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BareTranslator {
    xlen: Xlen,
}

impl BareTranslator {
    /// Creates a translator for the given register width.
    pub const fn new(xlen: Xlen) -> Self {
        Self { xlen }
    }
}

impl Translator for BareTranslator {
    fn translate(
        &mut self,
        vaddr: VirtAddr,
        _intent: AccessType,
    ) -> Result<PhysAddr, ExceptionKind> {
        Ok(PhysAddr::new(vaddr.val() & self.xlen.mask()))
    }
}
