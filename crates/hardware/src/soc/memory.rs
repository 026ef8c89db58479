//! Flat RAM backing the default platform.
//!
//! A single little-endian byte array mapped at a physical base address.
//! Accesses that do not fit entirely inside the window raise access faults
//! of the kind matching their intent. Every access with a valid width
//! commits; the port never declines a write.

use tracing::trace;

use crate::common::{AccessType, ExceptionKind, PhysAddr};
use crate::core::units::lsu::ordering::{ReadOrdering, WriteOrdering};
use crate::soc::traits::MemoryPort;

/// Byte-addressed RAM window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ram {
    base: u64,
    data: Vec<u8>,
    writes: u64,
}

impl Ram {
    /// Creates a zero-filled RAM of `size` bytes at physical address `base`.
    pub fn new(base: u64, size: usize) -> Self {
        Self {
            base,
            data: vec![0; size],
            writes: 0,
        }
    }

    /// Physical base address.
    pub const fn base(&self) -> u64 {
        self.base
    }

    /// Size in bytes.
    pub const fn size(&self) -> usize {
        self.data.len()
    }

    /// Number of committed `write_value` calls so far.
    pub const fn writes(&self) -> u64 {
        self.writes
    }

    /// Copies `bytes` into RAM starting at `paddr`.
    ///
    /// Returns `false` and leaves RAM untouched if the range does not fit.
    pub fn load(&mut self, paddr: PhysAddr, bytes: &[u8]) -> bool {
        match self.range(paddr, bytes.len() as u64) {
            Some(range) => {
                self.data[range].copy_from_slice(bytes);
                true
            }
            None => false,
        }
    }

    /// Reads `width` bytes (1 to 8) without going through the port.
    pub fn peek(&self, paddr: PhysAddr, width: u64) -> Option<u64> {
        if !(1..=8).contains(&width) {
            return None;
        }
        let range = self.range(paddr, width)?;
        let mut buf = [0u8; 8];
        buf[..range.len()].copy_from_slice(&self.data[range]);
        Some(u64::from_le_bytes(buf))
    }

    /// Writes the low `width` bytes (1 to 8) of `val` without going through
    /// the port. Returns `false` if the range does not fit.
    pub fn poke(&mut self, paddr: PhysAddr, width: u64, val: u64) -> bool {
        if !(1..=8).contains(&width) {
            return false;
        }
        match self.range(paddr, width) {
            Some(range) => {
                let len = range.len();
                self.data[range].copy_from_slice(&val.to_le_bytes()[..len]);
                true
            }
            None => false,
        }
    }

    fn range(&self, paddr: PhysAddr, width: u64) -> Option<std::ops::Range<usize>> {
        let offset = paddr.val().checked_sub(self.base)?;
        let end = offset.checked_add(width)?;
        if end > self.data.len() as u64 {
            return None;
        }
        Some(usize::try_from(offset).ok()?..usize::try_from(end).ok()?)
    }
}

impl MemoryPort for Ram {
    fn read(
        &mut self,
        intent: AccessType,
        paddr: PhysAddr,
        width: u64,
        _ordering: ReadOrdering,
        _is_atomic: bool,
    ) -> Result<u64, ExceptionKind> {
        let val = self
            .peek(paddr, width)
            .ok_or(ExceptionKind::access_fault(intent))?;
        trace!(%paddr, width, val, "ram read");
        Ok(val)
    }

    fn write_effective_address(
        &mut self,
        paddr: PhysAddr,
        width: u64,
        _ordering: WriteOrdering,
        _is_atomic: bool,
    ) -> Result<(), ExceptionKind> {
        if (1..=8).contains(&width) && self.range(paddr, width).is_some() {
            Ok(())
        } else {
            Err(ExceptionKind::StoreAmoAccessFault)
        }
    }

    fn write_value(
        &mut self,
        paddr: PhysAddr,
        width: u64,
        bits: u64,
        _ordering: WriteOrdering,
        _is_atomic: bool,
    ) -> Result<bool, ExceptionKind> {
        if !self.poke(paddr, width, bits) {
            return Err(ExceptionKind::StoreAmoAccessFault);
        }
        self.writes += 1;
        trace!(%paddr, width, bits, "ram write");
        Ok(true)
    }
}
