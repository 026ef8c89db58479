//! Function code tests.

use rstest::rstest;
use rvamo_core::isa::rva::AmoOp;
use rvamo_core::isa::rva::funct5::{LR, SC};

#[rstest]
#[case(AmoOp::Swap, 0b00001, "amoswap")]
#[case(AmoOp::Add, 0b00000, "amoadd")]
#[case(AmoOp::Xor, 0b00100, "amoxor")]
#[case(AmoOp::And, 0b01100, "amoand")]
#[case(AmoOp::Or, 0b01000, "amoor")]
#[case(AmoOp::Min, 0b10000, "amomin")]
#[case(AmoOp::Max, 0b10100, "amomax")]
#[case(AmoOp::Minu, 0b11000, "amominu")]
#[case(AmoOp::Maxu, 0b11100, "amomaxu")]
fn codes_and_names(#[case] op: AmoOp, #[case] code: u32, #[case] name: &str) {
    assert_eq!(op.funct5(), code);
    assert_eq!(AmoOp::from_funct5(code), Some(op));
    assert_eq!(op.to_string(), name);
    assert_eq!(AmoOp::from_mnemonic(&name[3..]), Some(op));
}

#[test]
fn lr_and_sc_are_not_amos() {
    assert_eq!(AmoOp::from_funct5(LR), None);
    assert_eq!(AmoOp::from_funct5(SC), None);
}

#[test]
fn unused_codes_are_not_amos() {
    let used: Vec<u32> = AmoOp::ALL.iter().map(|op| op.funct5()).collect();
    for code in 0..32 {
        if !used.contains(&code) {
            assert_eq!(AmoOp::from_funct5(code), None, "code {code:#07b}");
        }
    }
}
