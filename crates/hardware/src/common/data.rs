//! Memory Access Intents.
//!
//! The intent travels with every address handed to a collaborator. It is used for:
//! 1. **Permission Validation:** The translator and extension hook check R/W permissions.
//! 2. **Fault Selection:** Choosing between load and store/AMO fault kinds.

/// Intent of a data access.
///
/// LR reads, SC writes and AMOs read and write the same location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// Data read access (LR).
    Read,

    /// Data write access (SC).
    Write,

    /// Combined read-modify-write access (AMO).
    ///
    /// Requires both Read and Write permission; faults are reported as
    /// store/AMO faults.
    ReadWrite,
}

impl AccessType {
    /// Returns true if the access writes memory.
    ///
    /// Faults on writing intents are reported with store/AMO exception kinds.
    #[inline]
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Write | Self::ReadWrite)
    }

    /// Returns true if the access reads memory.
    #[inline]
    pub const fn is_read(self) -> bool {
        matches!(self, Self::Read | Self::ReadWrite)
    }
}
