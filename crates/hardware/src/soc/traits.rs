//! Collaborator traits for the atomic execute paths.
//!
//! The hart owns its registers and reservation; everything else an atomic
//! instruction touches lives behind one of these seams:
//! 1. **Memory:** `MemoryPort` performs reads, write announcements and committed writes.
//! 2. **Translation:** `Translator` maps virtual to physical addresses.
//! 3. **Extensions:** `ExtensionHook` computes and checks the effective address.
//! 4. **Traps:** `TrapHandler` takes ownership of raised memory exceptions.
//! 5. **Speculation:** `ScOracle` decides whether a store-conditional may proceed.
//!
//! `Platform` bundles one of each for a single `execute` call.

use std::fmt;

use crate::common::{AccessType, ExceptionKind, ExtError, PhysAddr, RegisterFile, VirtAddr};
use crate::core::units::lsu::ordering::{ReadOrdering, WriteOrdering};
use crate::isa::abi::Reg;

/// Physical memory as seen by the atomic execute paths.
///
/// Widths are in bytes (4 or 8). Values are exchanged in the low bits of a
/// `u64`; read results are zero-extended.
pub trait MemoryPort {
    /// Reads `width` bytes at `paddr`.
    ///
    /// # Errors
    ///
    /// Returns the exception kind (typically an access fault) if the read
    /// cannot be performed.
    fn read(
        &mut self,
        intent: AccessType,
        paddr: PhysAddr,
        width: u64,
        ordering: ReadOrdering,
        is_atomic: bool,
    ) -> Result<u64, ExceptionKind>;

    /// Announces an upcoming write so that permission faults surface before data moves.
    ///
    /// # Errors
    ///
    /// Returns the exception kind if the location cannot be written.
    fn write_effective_address(
        &mut self,
        paddr: PhysAddr,
        width: u64,
        ordering: WriteOrdering,
        is_atomic: bool,
    ) -> Result<(), ExceptionKind>;

    /// Writes the low `width` bytes of `bits` at `paddr`.
    ///
    /// Returns `Ok(true)` if the write committed and `Ok(false)` if the
    /// memory system declined it without raising an exception.
    ///
    /// # Errors
    ///
    /// Returns the exception kind if the write faults.
    fn write_value(
        &mut self,
        paddr: PhysAddr,
        width: u64,
        bits: u64,
        ordering: WriteOrdering,
        is_atomic: bool,
    ) -> Result<bool, ExceptionKind>;
}

/// Virtual-to-physical address translation.
pub trait Translator {
    /// Translates `vaddr` for an access with the given intent.
    ///
    /// # Errors
    ///
    /// Returns a page fault or access fault kind matching `intent`.
    fn translate(&mut self, vaddr: VirtAddr, intent: AccessType)
    -> Result<PhysAddr, ExceptionKind>;
}

/// Effective-address computation with extension checks.
pub trait ExtensionHook {
    /// Computes `x[base] + offset` and applies any extension checks.
    ///
    /// # Errors
    ///
    /// Returns an [`ExtError`] if an enabled extension rejects the access.
    fn get_checked_address(
        &mut self,
        regs: &RegisterFile,
        base: Reg,
        offset: i64,
        intent: AccessType,
        width: u64,
    ) -> Result<VirtAddr, ExtError>;

    /// Takes ownership of a rejection produced by `get_checked_address`.
    fn handle_ext_error(&mut self, err: ExtError);
}

/// Receiver of synchronous memory exceptions.
pub trait TrapHandler {
    /// Handles an exception raised at `vaddr`.
    fn handle_memory_exception(&mut self, vaddr: VirtAddr, kind: ExceptionKind);
}

/// Decides whether a store-conditional may attempt its store.
pub trait ScOracle {
    /// Returns `false` to make the store-conditional fail immediately.
    fn speculate_conditional(&mut self) -> bool;
}

/// The collaborators used by one instruction.
///
/// Built per call from whatever owns the collaborators, usually
/// [`System::platform`](crate::soc::System::platform).
pub struct Platform<'a> {
    /// Memory port.
    pub memory: &'a mut dyn MemoryPort,
    /// Address translator.
    pub translator: &'a mut dyn Translator,
    /// Extension address-check hook.
    pub extensions: &'a mut dyn ExtensionHook,
    /// Trap handler.
    pub traps: &'a mut dyn TrapHandler,
    /// Store-conditional oracle.
    pub oracle: &'a mut dyn ScOracle,
}

impl fmt::Debug for Platform<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Platform").finish_non_exhaustive()
    }
}
