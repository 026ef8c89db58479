//! Load-reservation tracking for LR/SC.
//!
//! A hart holds at most one reservation. LR registers it on the virtual
//! address it loaded from; SC consults it and always drops it, so an SC can
//! only pair with the most recent LR.
//!
//! Invalidation by other harts' stores is the business of an external
//! coherence layer and is not modelled here.

use tracing::trace;

use crate::common::addr::VirtAddr;

/// The reservation state of one hart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReservationSet {
    addr: Option<VirtAddr>,
}

impl ReservationSet {
    /// Creates an empty reservation set.
    pub const fn new() -> Self {
        Self { addr: None }
    }

    /// Registers a reservation on `addr`, replacing any previous one.
    pub fn load_reservation(&mut self, addr: VirtAddr) {
        if let Some(prev) = self.addr.replace(addr) {
            trace!(%prev, new = %addr, "reservation replaced");
        }
    }

    /// Returns true if a reservation is held on exactly `addr`.
    pub fn match_reservation(&self, addr: VirtAddr) -> bool {
        self.addr == Some(addr)
    }

    /// Drops any reservation. Idempotent.
    pub fn cancel_reservation(&mut self) {
        self.addr = None;
    }

    /// The reserved address, if any.
    pub const fn reserved(&self) -> Option<VirtAddr> {
        self.addr
    }
}
