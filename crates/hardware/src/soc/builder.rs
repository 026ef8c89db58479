//! Default platform construction and the top-level `System` type.
//!
//! This module builds the collaborators an atomic instruction needs from configuration:
//! 1. **Memory:** A flat RAM window at `memory.ram_base`.
//! 2. **Translation:** Bare-mode identity mapping truncated to XLEN.
//! 3. **Hooks:** Base-register addressing, a recording trap handler and an
//!    always-proceed store-conditional oracle.

use tracing::debug;

use crate::config::Config;
use crate::soc::hooks::{AlwaysProceed, BaseAddressing, TrapLog};
use crate::soc::memory::Ram;
use crate::soc::mmu::BareTranslator;
use crate::soc::traits::Platform;

/// The default platform.
///
/// Owns one of each collaborator and lends them to a hart through
/// [`System::platform`].
#[derive(Clone, Debug)]
pub struct System {
    /// Main memory.
    pub ram: Ram,
    /// Address translator.
    pub translator: BareTranslator,
    /// Extension address-check hook.
    pub extensions: BaseAddressing,
    /// Trap handler.
    pub traps: TrapLog,
    /// Store-conditional oracle.
    pub oracle: AlwaysProceed,
}

impl System {
    /// Builds the platform described by `config`.
    pub fn new(config: &Config) -> Self {
        debug!(
            base = config.memory.ram_base,
            size = config.memory.ram_size,
            xlen = %config.isa.xlen,
            "building system"
        );
        Self {
            ram: Ram::new(config.memory.ram_base, config.memory.ram_size),
            translator: BareTranslator::new(config.isa.xlen),
            extensions: BaseAddressing::new(),
            traps: TrapLog::new(),
            oracle: AlwaysProceed,
        }
    }

    /// Lends every collaborator for one `execute` call.
    pub fn platform(&mut self) -> Platform<'_> {
        Platform {
            memory: &mut self.ram,
            translator: &mut self.translator,
            extensions: &mut self.extensions,
            traps: &mut self.traps,
            oracle: &mut self.oracle,
        }
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
