//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the descriptors, field layout, encoding and assembly-text logic for
//! the RISC-V atomic instructions.
//!
//! # Extensions
//!
//! * `rva`: Standard Extension for Atomic Instructions (A, and its halves Zalrsc / Zaamo).

/// Application Binary Interface (ABI) register names and the `Reg` index type.
pub mod abi;

/// Assembly text: formatting and parsing of atomic mnemonics.
pub mod disasm;

/// Instruction field extraction utilities.
pub mod instruction;

/// Atomic instruction descriptors, widths, operation codes and encoding.
pub mod rva;
