//! Configuration for the atomic-instruction model.
//!
//! This module defines the configuration structures used to parameterize a hart. It provides:
//! 1. **Defaults:** Baseline constants (RAM window, XLEN, enabled extensions).
//! 2. **Structures:** Hierarchical config for general, ISA and memory settings.
//! 3. **Guards:** The extension-enabled and width-validity predicates consulted by the decoder.
//!
//! Configuration is supplied as JSON (CLI `--config`, test fixtures) or via `Config::default()`.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::common::reg::Xlen;
use crate::isa::rva::width::{self, Width};

/// Default configuration constants.
mod defaults {
    /// Base address of the default RAM window (2 GiB).
    pub const RAM_BASE: u64 = 0x8000_0000;

    /// Size of the default RAM window (64 KiB).
    ///
    /// Atomics tests touch a handful of words; a small window keeps
    /// out-of-range faults easy to provoke.
    pub const RAM_SIZE: usize = 64 * 1024;

    /// The full A extension is enabled by default.
    pub const EXT_A: bool = true;
}

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The JSON did not match the configuration schema.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The values parsed but describe an impossible hart.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use rvamo_core::config::Config;
/// use rvamo_core::common::Xlen;
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "isa": { "xlen": 32, "a": false, "zalrsc": true },
///     "memory": { "ram_base": 4096, "ram_size": 8192 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.isa.xlen, Xlen::Rv32);
/// assert!(config.isa.lrsc_enabled());
/// assert!(!config.isa.amo_enabled());
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// ISA settings (XLEN and extensions)
    #[serde(default)]
    pub isa: IsaConfig,
    /// Default platform RAM window
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses and validates a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input and
    /// [`ConfigError::Invalid`] when the values fail validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise
    /// the errors of [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the RAM window is empty or
    /// wraps the address space.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.memory.ram_size == 0 {
            return Err(ConfigError::Invalid("ram_size must be non-zero".into()));
        }
        if self
            .memory
            .ram_base
            .checked_add(self.memory.ram_size as u64)
            .is_none()
        {
            return Err(ConfigError::Invalid(format!(
                "RAM window {:#x}+{:#x} wraps the address space",
                self.memory.ram_base, self.memory.ram_size
            )));
        }
        Ok(())
    }
}

/// General settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Emit one `info` event per retired atomic instruction.
    #[serde(default)]
    pub trace_instructions: bool,
}

/// ISA settings: register width and which atomic extensions are enabled.
///
/// `a` enables the whole A extension; `zalrsc` and `zaamo` enable its two
/// halves independently.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct IsaConfig {
    /// Register width (32 or 64).
    #[serde(default)]
    pub xlen: Xlen,
    /// Full A extension (LR/SC and AMOs).
    #[serde(default = "IsaConfig::default_a")]
    pub a: bool,
    /// Zalrsc: LR/SC only.
    #[serde(default)]
    pub zalrsc: bool,
    /// Zaamo: AMOs only.
    #[serde(default)]
    pub zaamo: bool,
}

impl IsaConfig {
    fn default_a() -> bool {
        defaults::EXT_A
    }

    /// Returns true if LR and SC decode on this hart.
    pub const fn lrsc_enabled(&self) -> bool {
        self.a || self.zalrsc
    }

    /// Returns true if the AMO read-modify-write instructions decode on this hart.
    pub const fn amo_enabled(&self) -> bool {
        self.a || self.zaamo
    }

    /// Width validator bound to this hart's XLEN.
    pub const fn is_valid_width(&self, w: Width) -> bool {
        width::is_valid_width(w, self.xlen)
    }
}

impl Default for IsaConfig {
    fn default() -> Self {
        Self {
            xlen: Xlen::default(),
            a: defaults::EXT_A,
            zalrsc: false,
            zaamo: false,
        }
    }
}

/// RAM window of the default platform.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MemoryConfig {
    /// Physical base address of RAM.
    #[serde(default = "MemoryConfig::default_ram_base")]
    pub ram_base: u64,
    /// RAM size in bytes.
    #[serde(default = "MemoryConfig::default_ram_size")]
    pub ram_size: usize,
}

impl MemoryConfig {
    fn default_ram_base() -> u64 {
        defaults::RAM_BASE
    }

    fn default_ram_size() -> usize {
        defaults::RAM_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            ram_base: defaults::RAM_BASE,
            ram_size: defaults::RAM_SIZE,
        }
    }
}
