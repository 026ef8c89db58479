//! Execution units and functional components.
//!
//! Only the load/store unit takes part in atomic execution.

/// Load/Store Unit: reservation set, AMO ALU and ordering annotations.
pub mod lsu;
