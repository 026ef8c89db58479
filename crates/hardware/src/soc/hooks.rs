//! Default extension hook, trap handler and store-conditional oracle.

use tracing::debug;

use crate::common::{
    AccessType, ExceptionKind, ExtError, MemoryException, RegisterFile, VirtAddr,
};
use crate::isa::abi::Reg;
use crate::soc::traits::{ExtensionHook, ScOracle, TrapHandler};

/// Address computation for a hart with no address-checking extensions.
///
/// Returns `x[base] + offset` wrapped to XLEN and never rejects. Errors
/// handed to `handle_ext_error` are kept for inspection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BaseAddressing {
    errors: Vec<ExtError>,
}

impl BaseAddressing {
    /// Creates the hook with an empty error log.
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Errors reported so far, oldest first.
    pub fn errors(&self) -> &[ExtError] {
        &self.errors
    }
}

impl ExtensionHook for BaseAddressing {
    fn get_checked_address(
        &mut self,
        regs: &RegisterFile,
        base: Reg,
        offset: i64,
        _intent: AccessType,
        _width: u64,
    ) -> Result<VirtAddr, ExtError> {
        let addr = regs.read(base.idx()).wrapping_add(offset as u64);
        Ok(VirtAddr::new(addr & regs.xlen().mask()))
    }

    fn handle_ext_error(&mut self, err: ExtError) {
        debug!(%err, "extension error");
        self.errors.push(err);
    }
}

/// Trap handler that records every exception it receives.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrapLog {
    taken: Vec<MemoryException>,
}

impl TrapLog {
    /// Creates an empty log.
    pub const fn new() -> Self {
        Self { taken: Vec::new() }
    }

    /// Exceptions delivered so far, oldest first.
    pub fn taken(&self) -> &[MemoryException] {
        &self.taken
    }

    /// Most recent exception, if any.
    pub fn last(&self) -> Option<&MemoryException> {
        self.taken.last()
    }

    /// Drains the log.
    pub fn take(&mut self) -> Vec<MemoryException> {
        std::mem::take(&mut self.taken)
    }
}

impl TrapHandler for TrapLog {
    fn handle_memory_exception(&mut self, vaddr: VirtAddr, kind: ExceptionKind) {
        debug!(%vaddr, %kind, cause = kind.cause(), "memory exception");
        self.taken.push(MemoryException::new(kind, vaddr));
    }
}

/// Oracle that always lets a store-conditional proceed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlwaysProceed;

impl ScOracle for AlwaysProceed {
    fn speculate_conditional(&mut self) -> bool {
        true
    }
}
