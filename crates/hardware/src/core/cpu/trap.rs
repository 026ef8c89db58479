//! Exception Reporting.
//!
//! The execute paths never unwind on a fault. They hand the problem to the
//! right collaborator and retire with [`Retire::Fail`]:
//! 1. **Memory Exceptions:** Alignment, translation and memory-port faults go to the trap handler.
//! 2. **Extension Errors:** Address-check rejections go back to the extension hook.

use tracing::debug;

use super::{Hart, Retire};
use crate::common::{ExceptionKind, ExtError, VirtAddr};
use crate::soc::traits::Platform;

impl Hart {
    /// Delivers a memory exception to the trap handler.
    pub(crate) fn raise(
        &mut self,
        platform: &mut Platform<'_>,
        vaddr: VirtAddr,
        kind: ExceptionKind,
    ) -> Retire {
        debug!(%vaddr, %kind, "atomic access faulted");
        self.stats.faults += 1;
        platform.traps.handle_memory_exception(vaddr, kind);
        Retire::Fail
    }

    /// Returns an address-check rejection to the extension hook.
    pub(crate) fn reject(&mut self, platform: &mut Platform<'_>, err: ExtError) -> Retire {
        debug!(%err, "effective address rejected");
        self.stats.ext_errors += 1;
        platform.extensions.handle_ext_error(err);
        Retire::Fail
    }
}
