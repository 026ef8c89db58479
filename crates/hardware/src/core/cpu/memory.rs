//! Effective-Address Resolution.
//!
//! Atomics address memory through `rs1` alone; the immediate offset is always
//! zero. The computation is delegated to the extension hook so that enabled
//! extensions can veto the access before any other side effect.

use super::Hart;
use crate::common::{AccessType, ExtError, VirtAddr};
use crate::isa::abi::Reg;
use crate::soc::traits::ExtensionHook;

impl Hart {
    /// Computes the virtual address held in `base`, checked for a
    /// `width_bytes` access with the given intent.
    ///
    /// # Errors
    ///
    /// Returns the hook's [`ExtError`] unchanged. The caller reports it
    /// through `handle_ext_error`.
    pub fn resolve(
        &self,
        hook: &mut dyn ExtensionHook,
        base: Reg,
        intent: AccessType,
        width_bytes: u64,
    ) -> Result<VirtAddr, ExtError> {
        hook.get_checked_address(&self.regs, base, 0, intent, width_bytes)
    }
}
