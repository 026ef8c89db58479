//! Assembly text for the atomic instructions.
//!
//! Converts descriptors to mnemonic strings and back:
//!
//! ```text
//! lr.<w><aqrl>        rd, (rs1)
//! sc.<w><aqrl>        rd, rs2, (rs1)
//! amo<op>.<w><aqrl>   rd, rs2, (rs1)
//! ```
//!
//! `<w>` is `.w` or `.d`; `<aqrl>` is empty, `.aq`, `.rl` or `.aqrl`.
//! Registers print with ABI names. Parsing is the textual inverse of
//! formatting and fails on any token it does not recognise.
//!
//! # Usage
//!
//! ```
//! use rvamo_core::config::IsaConfig;
//! use rvamo_core::isa::disasm::{assemble, disassemble};
//! use rvamo_core::isa::rva::encode;
//!
//! let insn = assemble("amoadd.w.aqrl a0, a1, (a2)").unwrap();
//! assert_eq!(disassemble(encode(&insn), &IsaConfig::default()), "amoadd.w.aqrl a0, a1, (a2)");
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::config::IsaConfig;
use crate::core::units::lsu::ordering::AmoOrdering;
use crate::isa::abi::Reg;
use crate::isa::rva::{AmoOp, AtomicInsn, Width, decode};

/// Assembly parse failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AsmError {
    /// Nothing to parse.
    #[error("empty instruction text")]
    Empty,

    /// The mnemonic stem is not `lr`, `sc` or a known `amo<op>`.
    #[error("unknown mnemonic `{0}`")]
    UnknownMnemonic(String),

    /// The width token is missing or is not `w`/`d`.
    #[error("unknown width `{0}`")]
    UnknownWidth(String),

    /// The ordering suffix is not `aq`, `rl` or `aqrl`.
    #[error("unknown ordering suffix `{0}`")]
    UnknownOrdering(String),

    /// A register operand is not an ABI or `xN` name.
    #[error("unknown register `{0}`")]
    UnknownRegister(String),

    /// Wrong number of operands for the mnemonic.
    #[error("`{mnemonic}` takes {expected} operands, found {found}")]
    OperandCount {
        /// Mnemonic being parsed.
        mnemonic: String,
        /// Operands the form requires.
        expected: usize,
        /// Operands present.
        found: usize,
    },

    /// The address operand is not of the form `(reg)`.
    #[error("expected `(reg)` address operand, found `{0}`")]
    BadAddressOperand(String),
}

/// Formats a descriptor as assembly text.
pub fn format_insn(insn: &AtomicInsn) -> String {
    let w = insn.width().suffix();
    let ord = insn.ordering().suffix();
    match *insn {
        AtomicInsn::LoadReserved { rs1, rd, .. } => format!("lr{w}{ord} {rd}, ({rs1})"),
        AtomicInsn::StoreConditional { rs2, rs1, rd, .. } => {
            format!("sc{w}{ord} {rd}, {rs2}, ({rs1})")
        }
        AtomicInsn::AtomicMemOp {
            op, rs2, rs1, rd, ..
        } => format!("{op}{w}{ord} {rd}, {rs2}, ({rs1})"),
    }
}

/// Disassembles a 32-bit word for a hart configured with `isa`.
///
/// Returns `"unknown (0x........)"` for words that do not decode as atomics.
pub fn disassemble(raw: u32, isa: &IsaConfig) -> String {
    decode(raw, isa).map_or_else(|| format!("unknown ({raw:#010x})"), |insn| format_insn(&insn))
}

/// Parses one atomic instruction from assembly text.
///
/// # Errors
///
/// Returns an [`AsmError`] naming the first token that is not recognised.
/// Byte and half widths are rejected as unknown widths.
pub fn assemble(text: &str) -> Result<AtomicInsn, AsmError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AsmError::Empty);
    }
    let (mnemonic, operands) = text
        .split_once(char::is_whitespace)
        .map_or((text, ""), |(m, rest)| (m, rest.trim()));

    let (stem, width, ordering) = split_mnemonic(mnemonic)?;
    let ops: Vec<&str> = if operands.is_empty() {
        Vec::new()
    } else {
        operands.split(',').map(str::trim).collect()
    };
    let AmoOrdering { aq, rl } = ordering;

    match stem {
        "lr" => {
            let [rd, addr] = operands_n::<2>(mnemonic, &ops)?;
            Ok(AtomicInsn::LoadReserved {
                aq,
                rl,
                rs1: parse_address(addr)?,
                width,
                rd: rd.parse()?,
            })
        }
        "sc" => {
            let [rd, rs2, addr] = operands_n::<3>(mnemonic, &ops)?;
            Ok(AtomicInsn::StoreConditional {
                aq,
                rl,
                rs2: rs2.parse()?,
                rs1: parse_address(addr)?,
                width,
                rd: rd.parse()?,
            })
        }
        _ => {
            let op = stem
                .strip_prefix("amo")
                .and_then(AmoOp::from_mnemonic)
                .ok_or_else(|| AsmError::UnknownMnemonic(stem.to_string()))?;
            let [rd, rs2, addr] = operands_n::<3>(mnemonic, &ops)?;
            Ok(AtomicInsn::AtomicMemOp {
                op,
                aq,
                rl,
                rs2: rs2.parse()?,
                rs1: parse_address(addr)?,
                width,
                rd: rd.parse()?,
            })
        }
    }
}

/// Splits `amoadd.w.aqrl` into its stem, width and ordering.
fn split_mnemonic(mnemonic: &str) -> Result<(&str, Width, AmoOrdering), AsmError> {
    let mut parts = mnemonic.splitn(3, '.');
    let stem = parts.next().unwrap_or_default();
    if stem != "lr" && stem != "sc" && !stem.starts_with("amo") {
        return Err(AsmError::UnknownMnemonic(stem.to_string()));
    }
    let width = match parts.next() {
        Some("w") => Width::Word,
        Some("d") => Width::Double,
        Some(other) => return Err(AsmError::UnknownWidth(other.to_string())),
        None => return Err(AsmError::UnknownWidth(String::new())),
    };
    let ordering = match parts.next() {
        None => AmoOrdering::RELAXED,
        Some(suffix) => AmoOrdering::from_suffix(suffix)
            .filter(|ord| *ord != AmoOrdering::RELAXED)
            .ok_or_else(|| AsmError::UnknownOrdering(suffix.to_string()))?,
    };
    Ok((stem, width, ordering))
}

fn operands_n<'a, const N: usize>(
    mnemonic: &str,
    ops: &[&'a str],
) -> Result<[&'a str; N], AsmError> {
    <[&str; N]>::try_from(ops).map_err(|_| AsmError::OperandCount {
        mnemonic: mnemonic.to_string(),
        expected: N,
        found: ops.len(),
    })
}

fn parse_address(operand: &str) -> Result<Reg, AsmError> {
    operand
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| AsmError::BadAddressOperand(operand.to_string()))?
        .trim()
        .parse()
}

impl fmt::Display for AtomicInsn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_insn(self))
    }
}

impl FromStr for AtomicInsn {
    type Err = AsmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        assemble(s)
    }
}
