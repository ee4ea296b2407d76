//! TLB Tests.
//!
//! Verifies sizing, lookup, conflict replacement and flushing of the direct-mapped TLB.

use rstest::rstest;
use sbfp_core::core::units::mmu::Tlb;

#[rstest]
#[case(0, 1)]
#[case(1, 1)]
#[case(5, 8)]
#[case(32, 32)]
#[case(33, 64)]
fn size_rounds_up_to_power_of_two(#[case] requested: usize, #[case] actual: usize) {
    assert_eq!(Tlb::new(requested).capacity(), actual);
}

#[test]
fn empty_tlb_misses() {
    let tlb = Tlb::new(32);
    assert!(tlb.is_empty());
    assert_eq!(tlb.lookup(0), None);
    assert_eq!(tlb.lookup(0x1234), None);
}

#[test]
fn insert_then_lookup() {
    let mut tlb = Tlb::new(32);
    tlb.insert(0x42, 0x9000);
    assert_eq!(tlb.lookup(0x42), Some(0x9000));
    assert_eq!(tlb.len(), 1);
}

/// Pages that share a slot replace each other.
#[test]
fn conflicting_pages_replace() {
    let mut tlb = Tlb::new(16);
    tlb.insert(3, 100);
    tlb.insert(3 + 16, 200);
    assert_eq!(tlb.lookup(3), None);
    assert_eq!(tlb.lookup(19), Some(200));
    assert_eq!(tlb.len(), 1);
}

#[test]
fn flush_invalidates_everything() {
    let mut tlb = Tlb::new(8);
    for vpn in 0..8 {
        tlb.insert(vpn, vpn + 100);
    }
    assert_eq!(tlb.len(), 8);
    tlb.flush();
    assert!(tlb.is_empty());
    assert_eq!(tlb.lookup(4), None);
}
