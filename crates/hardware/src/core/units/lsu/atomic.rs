//! Atomic memory operation ALU.
//!
//! Implements the read-modify-write arithmetic for RISC-V A-extension
//! atomic memory operations (AMO). Given the current memory value and
//! the register source value, computes the new value to be written back.
//!
//! Every operation is evaluated at the access width: signed comparisons see
//! both operands sign-extended from the width's top bit, unsigned comparisons
//! see them zero-extended, and the result is sign-extended back to 64 bits.

use crate::isa::rva::{AmoOp, Width};

/// Performs an atomic ALU operation for AMO instructions.
///
/// # Arguments
///
/// * `op`      - The atomic operation type
/// * `mem_val` - The current value read from memory
/// * `reg_val` - The value from the source register
/// * `width`   - The width of the operation; higher operand bits are ignored
///
/// # Returns
///
/// The value to store, sign-extended from `width` to 64 bits.
pub fn atomic_alu(op: AmoOp, mem_val: u64, reg_val: u64, width: Width) -> u64 {
    let signed_a = width.sign_extend(mem_val) as i64;
    let signed_b = width.sign_extend(reg_val) as i64;
    let unsigned_a = mem_val & width.mask();
    let unsigned_b = reg_val & width.mask();

    let res = match op {
        AmoOp::Swap => reg_val,
        AmoOp::Add => mem_val.wrapping_add(reg_val),
        AmoOp::Xor => mem_val ^ reg_val,
        AmoOp::And => mem_val & reg_val,
        AmoOp::Or => mem_val | reg_val,
        AmoOp::Min => signed_a.min(signed_b) as u64,
        AmoOp::Max => signed_a.max(signed_b) as u64,
        AmoOp::Minu => unsigned_a.min(unsigned_b),
        AmoOp::Maxu => unsigned_a.max(unsigned_b),
    };
    width.sign_extend(res)
}
