//! Bit-level encoder and decoder for the atomic instructions.
//!
//! All three forms share the major opcode `0101111` and one field layout;
//! funct5 tells them apart. Decoding is guarded by the extension switches and
//! the width validator: a word that fails either guard is simply not an
//! atomic instruction, so the decoder returns `None` rather than an error.

use tracing::trace;

use crate::config::IsaConfig;
use crate::isa::abi::Reg;
use crate::isa::instruction::{
    AQ_BIT, FUNCT5_SHIFT, InstructionBits, RD_SHIFT, RL_BIT, RS1_SHIFT, RS2_SHIFT, SIZE_SHIFT,
};
use crate::isa::rva::funct5::{self, AmoOp};
use crate::isa::rva::width::Width;
use crate::isa::rva::AtomicInsn;

/// Atomic Memory Operation opcode (0b0101111).
/// Used for all atomic instructions (LR, SC, AMOADD, etc.).
pub const OP_AMO: u32 = 0b0101111;

/// Encodes a descriptor into its 32-bit instruction word.
///
/// Total: every descriptor has exactly one encoding. Byte and half widths
/// are placed in the size field as-is even though no hart decodes them.
pub fn encode(insn: &AtomicInsn) -> u32 {
    let f5 = match *insn {
        AtomicInsn::LoadReserved { .. } => funct5::LR,
        AtomicInsn::StoreConditional { .. } => funct5::SC,
        AtomicInsn::AtomicMemOp { op, .. } => op.funct5(),
    };
    let ord = insn.ordering();
    let aq = if ord.aq { AQ_BIT } else { 0 };
    let rl = if ord.rl { RL_BIT } else { 0 };

    (f5 << FUNCT5_SHIFT)
        | aq
        | rl
        | (insn.rs2().field() << RS2_SHIFT)
        | (insn.rs1().field() << RS1_SHIFT)
        | (insn.width().size_bits() << SIZE_SHIFT)
        | (insn.rd().field() << RD_SHIFT)
        | OP_AMO
}

/// Decodes a 32-bit word as an atomic instruction.
///
/// Returns `None` when the word is not an atomic on a hart configured with
/// `isa`: wrong opcode, reserved bit 14 set, unknown funct5, non-zero rs2
/// field on LR, the relevant extension disabled, or a width the validator
/// rejects.
pub fn decode(raw: u32, isa: &IsaConfig) -> Option<AtomicInsn> {
    if raw.opcode() != OP_AMO || raw.width_select() {
        return None;
    }

    let width = Width::from_size_bits(raw.size());
    if !isa.is_valid_width(width) {
        trace!(raw, %width, "atomic width rejected");
        return None;
    }

    let (aq, rl) = (raw.aq(), raw.rl());
    let (rd, rs1, rs2) = (raw.rd(), raw.rs1(), raw.rs2());

    match raw.funct5() {
        funct5::LR => (isa.lrsc_enabled() && rs2 == Reg::ZERO).then_some(
            AtomicInsn::LoadReserved {
                aq,
                rl,
                rs1,
                width,
                rd,
            },
        ),
        funct5::SC => isa.lrsc_enabled().then_some(AtomicInsn::StoreConditional {
            aq,
            rl,
            rs2,
            rs1,
            width,
            rd,
        }),
        code => {
            let op = AmoOp::from_funct5(code)?;
            isa.amo_enabled().then_some(AtomicInsn::AtomicMemOp {
                op,
                aq,
                rl,
                rs2,
                rs1,
                width,
                rd,
            })
        }
    }
}
