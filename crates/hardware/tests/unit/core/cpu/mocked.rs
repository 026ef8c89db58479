//! Collaborator call sequences.
//!
//! Each test wires a hart to `mockall` doubles and states exactly which
//! calls may happen. A call without a matching expectation panics, so the
//! absence of an expectation doubles as an assertion that the call is never
//! made.

use mockall::Sequence;
use mockall::predicate::eq;
use rvamo_core::common::{AccessType, ExceptionKind, ExtError, PhysAddr, VirtAddr};
use rvamo_core::config::Config;
use rvamo_core::core::units::lsu::{ReadOrdering, WriteOrdering};
use rvamo_core::core::{Hart, Retire};
use rvamo_core::isa::abi::Reg;
use rvamo_core::isa::disasm::assemble;

use crate::common::harness::RAM;
use crate::common::mocks::MockSet;

fn hart() -> Hart {
    Hart::new(&Config::default())
}

fn run(hart: &mut Hart, mocks: &mut MockSet, text: &str) -> Retire {
    let insn = assemble(text).unwrap();
    hart.execute(&insn, &mut mocks.platform())
}

// ──────────────────────────────────────────────────────────
// Address resolution
// ──────────────────────────────────────────────────────────

#[test]
fn resolve_passes_base_register_with_zero_offset() {
    let mut hart = hart();
    let mut mocks = MockSet::new();
    mocks
        .extensions
        .expect_get_checked_address()
        .withf(|_, base, offset, intent, width| {
            *base == Reg::A2 && *offset == 0 && *intent == AccessType::ReadWrite && *width == 8
        })
        .times(1)
        .returning(|_, _, _, _, _| Ok(VirtAddr::new(RAM)));
    mocks.identity();
    mocks
        .memory
        .expect_write_effective_address()
        .returning(|_, _, _, _| Ok(()));
    mocks.memory.expect_read().returning(|_, _, _, _, _| Ok(0));
    mocks
        .memory
        .expect_write_value()
        .returning(|_, _, _, _, _| Ok(true));

    assert!(run(&mut hart, &mut mocks, "amoadd.d a0, a1, (a2)").is_success());
}

#[test]
fn extension_rejection_stops_before_translation() {
    let err = ExtError::AddressRejected {
        vaddr: VirtAddr::new(RAM),
        reason: "tag mismatch".into(),
    };
    let mut hart = hart();
    hart.regs.write(Reg::A0.idx(), 0x5A);
    let mut mocks = MockSet::new();
    let rejected = err.clone();
    mocks
        .extensions
        .expect_get_checked_address()
        .times(1)
        .returning(move |_, _, _, _, _| Err(rejected.clone()));
    mocks
        .extensions
        .expect_handle_ext_error()
        .with(eq(err))
        .times(1)
        .return_const(());

    assert_eq!(run(&mut hart, &mut mocks, "lr.w a0, (a1)"), Retire::Fail);
    assert_eq!(hart.regs.read(Reg::A0.idx()), 0x5A);
    assert_eq!(hart.reservation.reserved(), None);
    assert_eq!(hart.stats.ext_errors, 1);
}

// ──────────────────────────────────────────────────────────
// LR
// ──────────────────────────────────────────────────────────

#[test]
fn lr_read_carries_acquire_flags() {
    let mut hart = hart();
    let mut mocks = MockSet::new();
    mocks.resolve_to(RAM + 8).identity();
    mocks
        .memory
        .expect_read()
        .with(
            eq(AccessType::Read),
            eq(PhysAddr::new(RAM + 8)),
            eq(4),
            eq(ReadOrdering {
                acquire: true,
                acq_rel: false,
            }),
            eq(true),
        )
        .times(1)
        .returning(|_, _, _, _, _| Ok(0xFFFF_FFFF));

    assert!(run(&mut hart, &mut mocks, "lr.w.aq a0, (a1)").is_success());
    assert_eq!(hart.regs.read(Reg::A0.idx()), u64::MAX);
    assert!(hart.reservation.match_reservation(VirtAddr::new(RAM + 8)));
}

#[test]
fn lr_aqrl_read_is_acq_rel() {
    let mut hart = hart();
    let mut mocks = MockSet::new();
    mocks.resolve_to(RAM).identity();
    mocks
        .memory
        .expect_read()
        .withf(|_, _, _, ord, _| ord.acquire && ord.acq_rel)
        .times(1)
        .returning(|_, _, _, _, _| Ok(1));

    assert!(run(&mut hart, &mut mocks, "lr.d.aqrl a0, (a1)").is_success());
}

#[test]
fn lr_page_fault_skips_memory() {
    let mut hart = hart();
    let mut mocks = MockSet::new();
    mocks.resolve_to(0x4000);
    mocks
        .translator
        .expect_translate()
        .with(eq(VirtAddr::new(0x4000)), eq(AccessType::Read))
        .times(1)
        .returning(|_, _| Err(ExceptionKind::LoadPageFault));
    mocks
        .traps
        .expect_handle_memory_exception()
        .with(eq(VirtAddr::new(0x4000)), eq(ExceptionKind::LoadPageFault))
        .times(1)
        .return_const(());

    assert_eq!(run(&mut hart, &mut mocks, "lr.w a0, (a1)"), Retire::Fail);
    assert_eq!(hart.reservation.reserved(), None);
}

#[test]
fn lr_read_fault_does_not_reserve() {
    let mut hart = hart();
    let mut mocks = MockSet::new();
    mocks.resolve_to(RAM).identity();
    mocks
        .memory
        .expect_read()
        .returning(|_, _, _, _, _| Err(ExceptionKind::LoadAccessFault));
    mocks
        .traps
        .expect_handle_memory_exception()
        .with(eq(VirtAddr::new(RAM)), eq(ExceptionKind::LoadAccessFault))
        .times(1)
        .return_const(());

    assert_eq!(run(&mut hart, &mut mocks, "lr.w a0, (a1)"), Retire::Fail);
    assert_eq!(hart.reservation.reserved(), None);
}

// ──────────────────────────────────────────────────────────
// SC
// ──────────────────────────────────────────────────────────

#[test]
fn sc_speculative_fail_touches_nothing_else() {
    let mut hart = hart();
    hart.reservation.load_reservation(VirtAddr::new(RAM));
    let mut mocks = MockSet::new();
    mocks.oracle_once(false);

    assert_eq!(run(&mut hart, &mut mocks, "sc.w a0, a2, (a1)"), Retire::Success);
    assert_eq!(hart.regs.read(Reg::A0.idx()), 1);
    assert_eq!(hart.reservation.reserved(), None);
    assert_eq!(hart.stats.sc_fail_speculative, 1);
}

#[test]
fn sc_mismatch_never_writes() {
    let mut hart = hart();
    hart.reservation.load_reservation(VirtAddr::new(RAM + 4));
    let mut mocks = MockSet::new();
    mocks.oracle_once(true).resolve_to(RAM);

    assert_eq!(run(&mut hart, &mut mocks, "sc.w a0, a2, (a1)"), Retire::Success);
    assert_eq!(hart.regs.read(Reg::A0.idx()), 1);
    assert_eq!(hart.reservation.reserved(), None);
}

#[test]
fn sc_probes_then_writes_with_release_flags() {
    let mut hart = hart();
    hart.regs.write(Reg::A2.idx(), 0xFFFF_FFFF_0000_0007);
    hart.reservation.load_reservation(VirtAddr::new(RAM));
    let mut mocks = MockSet::new();
    mocks.oracle_once(true).resolve_to(RAM).identity();

    let flags = WriteOrdering {
        acq_rel: false,
        release: true,
    };
    let mut seq = Sequence::new();
    mocks
        .memory
        .expect_write_effective_address()
        .with(eq(PhysAddr::new(RAM)), eq(4), eq(flags), eq(true))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _, _, _| Ok(()));
    mocks
        .memory
        .expect_write_value()
        .with(eq(PhysAddr::new(RAM)), eq(4), eq(7), eq(flags), eq(true))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _, _, _, _| Ok(true));

    assert!(run(&mut hart, &mut mocks, "sc.w.rl a0, a2, (a1)").is_success());
    assert_eq!(hart.regs.read(Reg::A0.idx()), 0);
    assert_eq!(hart.reservation.reserved(), None);
}

#[test]
fn sc_uncommitted_write_reports_failure() {
    let mut hart = hart();
    hart.reservation.load_reservation(VirtAddr::new(RAM));
    let mut mocks = MockSet::new();
    mocks.oracle_once(true).resolve_to(RAM).identity();
    mocks
        .memory
        .expect_write_effective_address()
        .returning(|_, _, _, _| Ok(()));
    mocks
        .memory
        .expect_write_value()
        .withf(|_, _, _, ord, _| ord.acq_rel && ord.release)
        .times(1)
        .returning(|_, _, _, _, _| Ok(false));

    assert_eq!(run(&mut hart, &mut mocks, "sc.d.aqrl a0, a2, (a1)"), Retire::Success);
    assert_eq!(hart.regs.read(Reg::A0.idx()), 1);
    assert_eq!(hart.stats.sc_fail_not_committed, 1);
    assert_eq!(hart.reservation.reserved(), None);
}

#[test]
fn sc_probe_fault_skips_the_write() {
    let mut hart = hart();
    hart.reservation.load_reservation(VirtAddr::new(RAM));
    let mut mocks = MockSet::new();
    mocks.oracle_once(true).resolve_to(RAM).identity();
    mocks
        .memory
        .expect_write_effective_address()
        .times(1)
        .returning(|_, _, _, _| Err(ExceptionKind::StoreAmoAccessFault));
    mocks
        .traps
        .expect_handle_memory_exception()
        .with(eq(VirtAddr::new(RAM)), eq(ExceptionKind::StoreAmoAccessFault))
        .times(1)
        .return_const(());

    assert_eq!(run(&mut hart, &mut mocks, "sc.w a0, a2, (a1)"), Retire::Fail);
    assert_eq!(hart.reservation.reserved(), None);
}

#[test]
fn sc_write_fault_fails_and_clears() {
    let mut hart = hart();
    hart.reservation.load_reservation(VirtAddr::new(RAM));
    let mut mocks = MockSet::new();
    mocks.oracle_once(true).resolve_to(RAM).identity();
    mocks
        .memory
        .expect_write_effective_address()
        .returning(|_, _, _, _| Ok(()));
    mocks
        .memory
        .expect_write_value()
        .returning(|_, _, _, _, _| Err(ExceptionKind::StoreAmoPageFault));
    mocks
        .traps
        .expect_handle_memory_exception()
        .with(eq(VirtAddr::new(RAM)), eq(ExceptionKind::StoreAmoPageFault))
        .times(1)
        .return_const(());

    assert_eq!(run(&mut hart, &mut mocks, "sc.w a0, a2, (a1)"), Retire::Fail);
    assert_eq!(hart.reservation.reserved(), None);
}

// ──────────────────────────────────────────────────────────
// AMO
// ──────────────────────────────────────────────────────────

#[test]
fn amo_probes_reads_then_writes() {
    let mut hart = hart();
    hart.regs.write(Reg::A1.idx(), 3);
    let mut mocks = MockSet::new();
    mocks.resolve_to(RAM).identity();

    let mut seq = Sequence::new();
    mocks
        .memory
        .expect_write_effective_address()
        .with(
            eq(PhysAddr::new(RAM)),
            eq(4),
            eq(WriteOrdering {
                acq_rel: false,
                release: false,
            }),
            eq(true),
        )
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _, _, _| Ok(()));
    mocks
        .memory
        .expect_read()
        .with(
            eq(AccessType::ReadWrite),
            eq(PhysAddr::new(RAM)),
            eq(4),
            eq(ReadOrdering {
                acquire: true,
                acq_rel: false,
            }),
            eq(true),
        )
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _, _, _, _| Ok(5));
    mocks
        .memory
        .expect_write_value()
        .with(
            eq(PhysAddr::new(RAM)),
            eq(4),
            eq(8),
            eq(WriteOrdering {
                acq_rel: false,
                release: false,
            }),
            eq(true),
        )
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _, _, _, _| Ok(true));

    assert!(run(&mut hart, &mut mocks, "amoadd.w.aq a0, a1, (a2)").is_success());
    assert_eq!(hart.regs.read(Reg::A0.idx()), 5);
}

#[test]
fn amo_translates_with_read_write_intent() {
    let mut hart = hart();
    let mut mocks = MockSet::new();
    mocks.resolve_to(0x9000);
    mocks
        .translator
        .expect_translate()
        .with(eq(VirtAddr::new(0x9000)), eq(AccessType::ReadWrite))
        .times(1)
        .returning(|_, _| Err(ExceptionKind::StoreAmoPageFault));
    mocks
        .traps
        .expect_handle_memory_exception()
        .with(eq(VirtAddr::new(0x9000)), eq(ExceptionKind::StoreAmoPageFault))
        .times(1)
        .return_const(());

    assert_eq!(run(&mut hart, &mut mocks, "amoswap.d a0, a1, (a2)"), Retire::Fail);
}

#[test]
fn amo_probe_fault_skips_read_and_write() {
    let mut hart = hart();
    hart.regs.write(Reg::A0.idx(), 0x33);
    let mut mocks = MockSet::new();
    mocks.resolve_to(RAM).identity();
    mocks
        .memory
        .expect_write_effective_address()
        .returning(|_, _, _, _| Err(ExceptionKind::StoreAmoAccessFault));
    mocks
        .traps
        .expect_handle_memory_exception()
        .times(1)
        .return_const(());

    assert_eq!(run(&mut hart, &mut mocks, "amoor.w a0, a1, (a2)"), Retire::Fail);
    assert_eq!(hart.regs.read(Reg::A0.idx()), 0x33);
    assert_eq!(hart.stats.faults, 1);
}

#[test]
#[should_panic(expected = "not committed")]
fn amo_uncommitted_write_panics() {
    let mut hart = hart();
    let mut mocks = MockSet::new();
    mocks.resolve_to(RAM).identity();
    mocks
        .memory
        .expect_write_effective_address()
        .returning(|_, _, _, _| Ok(()));
    mocks.memory.expect_read().returning(|_, _, _, _, _| Ok(0));
    mocks
        .memory
        .expect_write_value()
        .returning(|_, _, _, _, _| Ok(false));

    let _ = run(&mut hart, &mut mocks, "amoxor.w a0, a1, (a2)");
}
