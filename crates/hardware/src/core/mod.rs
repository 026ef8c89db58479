//! Core hart implementation.
//!
//! This module contains the hart that executes atomic instructions and the
//! load/store-unit pieces it is built from (reservation set, AMO ALU,
//! ordering annotations).

/// Hart state and the atomic execute paths.
pub mod cpu;

/// Execution units (load/store unit).
pub mod units;

pub use self::cpu::{Hart, Retire};
