//! Exception and error definitions.
//!
//! This module defines the fault taxonomy of the atomic execute paths. It provides:
//! 1. **Exception Kinds:** The synchronous exceptions an LR/SC/AMO can raise, with their
//!    privileged-spec cause codes.
//! 2. **Memory Exceptions:** A kind paired with the faulting virtual address, handed to the
//!    trap handler.
//! 3. **Extension Errors:** Rejections reported by the extended address-check hook.

use thiserror::Error;

use super::addr::VirtAddr;
use super::data::AccessType;

/// First cause code of the range reserved for custom (extension-defined) exceptions.
pub const CUSTOM_CAUSE_BASE: u64 = 24;

/// Synchronous exception kinds raised by atomic instructions.
///
/// Kinds are produced locally (alignment), by the translator, or by the
/// memory port. Only LR raises load kinds; SC and AMO raise store/AMO kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ExceptionKind {
    /// Load address misaligned (LR only).
    #[error("load address misaligned")]
    LoadAddressMisaligned,

    /// Load access fault.
    #[error("load access fault")]
    LoadAccessFault,

    /// Store/AMO address misaligned (SC and AMO).
    #[error("store/AMO address misaligned")]
    StoreAmoAddressMisaligned,

    /// Store/AMO access fault.
    #[error("store/AMO access fault")]
    StoreAmoAccessFault,

    /// Load page fault.
    #[error("load page fault")]
    LoadPageFault,

    /// Store/AMO page fault.
    #[error("store/AMO page fault")]
    StoreAmoPageFault,

    /// Extension-defined data-check error.
    ///
    /// The payload is an extension-private sub-code.
    #[error("extension data-check error ({0})")]
    ExtensionDataCheck(u8),
}

impl ExceptionKind {
    /// Returns the `mcause` exception code for this kind.
    pub const fn cause(self) -> u64 {
        match self {
            Self::LoadAddressMisaligned => 4,
            Self::LoadAccessFault => 5,
            Self::StoreAmoAddressMisaligned => 6,
            Self::StoreAmoAccessFault => 7,
            Self::LoadPageFault => 13,
            Self::StoreAmoPageFault => 15,
            Self::ExtensionDataCheck(_) => CUSTOM_CAUSE_BASE,
        }
    }

    /// Misaligned-address kind for an access with the given intent.
    pub const fn misaligned(intent: AccessType) -> Self {
        if intent.is_write() {
            Self::StoreAmoAddressMisaligned
        } else {
            Self::LoadAddressMisaligned
        }
    }

    /// Access-fault kind for an access with the given intent.
    pub const fn access_fault(intent: AccessType) -> Self {
        if intent.is_write() {
            Self::StoreAmoAccessFault
        } else {
            Self::LoadAccessFault
        }
    }

    /// Page-fault kind for an access with the given intent.
    pub const fn page_fault(intent: AccessType) -> Self {
        if intent.is_write() {
            Self::StoreAmoPageFault
        } else {
            Self::LoadPageFault
        }
    }
}

/// A memory exception: what went wrong and at which virtual address.
///
/// Ownership passes to the trap handler as soon as it is raised; the
/// instruction that raised it retires with failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{kind} at {vaddr}")]
pub struct MemoryException {
    /// Exception kind.
    pub kind: ExceptionKind,
    /// Faulting virtual address.
    pub vaddr: VirtAddr,
}

impl MemoryException {
    /// Creates a new memory exception.
    pub const fn new(kind: ExceptionKind, vaddr: VirtAddr) -> Self {
        Self { kind, vaddr }
    }
}

/// Rejection reported by the extended address-check hook.
///
/// Raised for reasons private to enabled extensions (capability bounds,
/// memory tagging). Always terminal for the current instruction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExtError {
    /// The extension refused the computed address.
    #[error("address {vaddr} rejected by extension check: {reason}")]
    AddressRejected {
        /// The address that was refused.
        vaddr: VirtAddr,
        /// Extension-supplied explanation.
        reason: String,
    },

    /// The access falls outside the bounds the extension permits.
    #[error("{width}-byte {intent:?} access at {vaddr} is out of bounds")]
    OutOfBounds {
        /// Start of the offending access.
        vaddr: VirtAddr,
        /// Requested intent.
        intent: AccessType,
        /// Access width in bytes.
        width: u64,
    },
}
