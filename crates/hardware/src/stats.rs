//! Atomic instruction statistics.
//!
//! This module counts what the execute paths did. It provides:
//! 1. **Instruction mix:** LR, SC and per-operation AMO retirements.
//! 2. **SC outcomes:** Successes and failures split by cause.
//! 3. **Faults:** Memory exceptions and extension rejections.

use std::fmt::Write;

use crate::isa::rva::AmoOp;

/// Why a store-conditional wrote 1 to its destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScFailure {
    /// No reservation, or one for a different address.
    Reservation,
    /// The oracle declined the store.
    Speculative,
    /// The memory port did not commit the write.
    NotCommitted,
}

/// Counters maintained by a hart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AtomicStats {
    /// Load-reserved instructions that completed.
    pub lr: u64,
    /// Store-conditionals that stored.
    pub sc_success: u64,
    /// Store-conditionals failed for lack of a matching reservation.
    pub sc_fail_reservation: u64,
    /// Store-conditionals failed by the oracle.
    pub sc_fail_speculative: u64,
    /// Store-conditionals whose write was not committed.
    pub sc_fail_not_committed: u64,
    /// Completed AMOs, indexed like [`AmoOp::ALL`].
    pub amo: [u64; 9],
    /// Memory exceptions raised (alignment, translation, memory port).
    pub faults: u64,
    /// Extension hook rejections.
    pub ext_errors: u64,
}

impl AtomicStats {
    /// Records a store-conditional failure.
    pub const fn record_sc_failure(&mut self, why: ScFailure) {
        match why {
            ScFailure::Reservation => self.sc_fail_reservation += 1,
            ScFailure::Speculative => self.sc_fail_speculative += 1,
            ScFailure::NotCommitted => self.sc_fail_not_committed += 1,
        }
    }

    /// Records a completed AMO.
    pub fn record_amo(&mut self, op: AmoOp) {
        if let Some(i) = AmoOp::ALL.iter().position(|o| *o == op) {
            self.amo[i] += 1;
        }
    }

    /// Completed AMOs of one operation.
    pub fn amo_count(&self, op: AmoOp) -> u64 {
        AmoOp::ALL
            .iter()
            .position(|o| *o == op)
            .map_or(0, |i| self.amo[i])
    }

    /// Total store-conditional failures.
    pub const fn sc_failures(&self) -> u64 {
        self.sc_fail_reservation + self.sc_fail_speculative + self.sc_fail_not_committed
    }

    /// Instructions that retired successfully.
    pub fn retired(&self) -> u64 {
        self.lr + self.sc_success + self.sc_failures() + self.amo.iter().sum::<u64>()
    }

    /// Renders the counters as a short report.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "atomics.retired          {}", self.retired());
        let _ = writeln!(out, "  lr                     {}", self.lr);
        let _ = writeln!(out, "  sc.success             {}", self.sc_success);
        let _ = writeln!(out, "  sc.fail.reservation    {}", self.sc_fail_reservation);
        let _ = writeln!(out, "  sc.fail.speculative    {}", self.sc_fail_speculative);
        let _ = writeln!(out, "  sc.fail.not_committed  {}", self.sc_fail_not_committed);
        for (op, count) in AmoOp::ALL.iter().zip(self.amo) {
            if count > 0 {
                let _ = writeln!(out, "  {:<22} {count}", op.to_string());
            }
        }
        let _ = writeln!(out, "faults                   {}", self.faults);
        let _ = writeln!(out, "ext_errors               {}", self.ext_errors);
        out
    }
}
