//! Common utilities and types used throughout the atomic-instruction model.
//!
//! This module provides the building blocks shared by the ISA, core and SoC layers:
//! 1. **Address Types:** Strong types for virtual and physical addresses.
//! 2. **Access Intents:** Read / Write / ReadWrite classification handed to collaborators.
//! 3. **Error Handling:** Exception kinds, memory exceptions and extension-hook errors.
//! 4. **Register Management:** The XLEN-aware integer register file.

/// Address type definitions (physical and virtual addresses).
pub mod addr;

/// Memory access intent definitions.
pub mod data;

/// Exception and error types.
pub mod error;

/// Integer register file.
pub mod reg;

pub use addr::{PhysAddr, VirtAddr};
pub use data::AccessType;
pub use error::{ExceptionKind, ExtError, MemoryException};
pub use reg::{RegisterFile, Xlen};
