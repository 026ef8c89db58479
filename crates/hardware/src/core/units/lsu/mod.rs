//! Load/Store Unit (LSU).
//!
//! This module provides the pieces of the load/store unit the atomic
//! execute paths are built from:
//! - [`atomic`]: Read-modify-write ALU for the RISC-V A extension.
//! - [`ordering`]: aq/rl annotations and the flags they put on memory accesses.
//! - [`reservation`]: The per-hart LR/SC reservation set.

/// Atomic memory operation ALU (RISC-V A extension).
pub mod atomic;

/// aq/rl ordering annotations.
pub mod ordering;

/// LR/SC reservation tracking.
pub mod reservation;

pub use atomic::atomic_alu;
pub use ordering::{AmoOrdering, ReadOrdering, WriteOrdering};
pub use reservation::ReservationSet;
