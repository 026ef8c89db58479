//! Memory ordering annotations for atomic accesses.
//!
//! An atomic carries two bits, `aq` and `rl`. This module turns them into the
//! flags attached to each memory-port call, which is the whole ordering
//! contract this model emits:
//! - an acquire access must not be observed after later accesses of this hart;
//! - a release access must not be observed before earlier accesses of this hart;
//! - `aq && rl` requests the strongest (sequentially consistent) ordering.

/// The `aq`/`rl` pair of an atomic instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct AmoOrdering {
    /// Acquire: later accesses may not be observed before this one.
    pub aq: bool,
    /// Release: earlier accesses may not be observed after this one.
    pub rl: bool,
}

impl AmoOrdering {
    /// No ordering annotation.
    pub const RELAXED: Self = Self::new(false, false);
    /// Both annotations.
    pub const SEQ_CST: Self = Self::new(true, true);

    /// Builds an annotation pair.
    pub const fn new(aq: bool, rl: bool) -> Self {
        Self { aq, rl }
    }

    /// Returns true if both annotations are set.
    pub const fn is_acq_rel(self) -> bool {
        self.aq && self.rl
    }

    /// Mnemonic suffix: `""`, `".aq"`, `".rl"` or `".aqrl"`.
    pub const fn suffix(self) -> &'static str {
        match (self.aq, self.rl) {
            (false, false) => "",
            (true, false) => ".aq",
            (false, true) => ".rl",
            (true, true) => ".aqrl",
        }
    }

    /// Parses a suffix without its leading dot (`""`, `"aq"`, `"rl"`, `"aqrl"`).
    pub fn from_suffix(s: &str) -> Option<Self> {
        match s {
            "" => Some(Self::RELAXED),
            "aq" => Some(Self::new(true, false)),
            "rl" => Some(Self::new(false, true)),
            "aqrl" => Some(Self::SEQ_CST),
            _ => None,
        }
    }

    /// Flags for the read half of the instruction.
    pub const fn read(self) -> ReadOrdering {
        ReadOrdering {
            acquire: self.aq,
            acq_rel: self.is_acq_rel(),
        }
    }

    /// Flags for the effective-address announcement and the data write.
    pub const fn write(self) -> WriteOrdering {
        WriteOrdering {
            acq_rel: self.is_acq_rel(),
            release: self.rl,
        }
    }
}

/// Ordering flags attached to a memory read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ReadOrdering {
    /// The read is an acquire.
    pub acquire: bool,
    /// The read is both acquire and release.
    pub acq_rel: bool,
}

/// Ordering flags attached to a memory write (or its address announcement).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct WriteOrdering {
    /// The write is both acquire and release.
    pub acq_rel: bool,
    /// The write is a release.
    pub release: bool,
}
