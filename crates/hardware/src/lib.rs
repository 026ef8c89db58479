//! RISC-V A-extension golden model.
//!
//! This crate models the execution semantics of the RISC-V atomic instructions for one hart:
//! 1. **ISA:** Width validation, bit-exact encode/decode and assembly text for LR, SC and AMO.
//! 2. **Core:** The hart context, the load-reservation tracker and the LR/SC/AMO execute paths.
//! 3. **SoC:** Collaborator interfaces (memory, translation, extension hook, trap delivery,
//!    speculation oracle) plus default implementations that make the core runnable.
//! 4. **Support:** Configuration, error types and retirement statistics.

/// Common types (addresses, access intents, exceptions, register file).
pub mod common;
/// Hart configuration (XLEN, enabled extensions, RAM window).
pub mod config;
/// Hart context and execution engine.
pub mod core;
/// Instruction set (atomic descriptors, encoding, assembly text, ABI names).
pub mod isa;
/// Collaborator interfaces and the default platform.
pub mod soc;
/// Retirement statistics for atomic instructions.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// The hart context that executes atomic instructions.
pub use crate::core::Hart;
/// Binary success/fail signal returned by every execute path.
pub use crate::core::Retire;
/// Decoded atomic instruction descriptor.
pub use crate::isa::rva::AtomicInsn;
/// Default platform owning RAM and the stock collaborators.
pub use crate::soc::System;
