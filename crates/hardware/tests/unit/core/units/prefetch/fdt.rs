//! Confidence Table Tests.
//!
//! Verifies the saturating counters: single-step increments, halving on decay, and the
//! global decay that fires when any counter reaches the ceiling exactly.

use proptest::prelude::*;
use sbfp_core::core::units::prefetch::{ConfidenceTable, FreeDistance};

fn fd(d: i32) -> FreeDistance {
    FreeDistance::new(d).unwrap()
}

#[test]
fn new_table_is_zeroed() {
    let table = ConfidenceTable::new(1023);
    assert!(table.counters().iter().all(|&c| c == 0));
    assert_eq!(table.max(), 1023);
}

#[test]
fn increment_touches_only_its_class() {
    let mut table = ConfidenceTable::new(1023);
    assert!(!table.increment(fd(2)));
    assert_eq!(table.get(fd(2)), 1);
    assert_eq!(table.counters().iter().map(|&c| u32::from(c)).sum::<u32>(), 1);
}

/// Halving 1023 rounds down to 511.
#[test]
fn decay_halves_rounding_down() {
    // A wider ceiling lets the counter sit at 1023 without triggering the automatic decay.
    let mut table = ConfidenceTable::new(2048);
    for _ in 0..1023 {
        let _ = table.increment(fd(5));
    }
    for _ in 0..7 {
        let _ = table.increment(fd(-5));
    }
    table.decay();
    assert_eq!(table.get(fd(5)), 511);
    assert_eq!(table.get(fd(-5)), 3);
}

/// Reaching the ceiling halves every counter in the same call.
#[test]
fn reaching_ceiling_decays_whole_table() {
    let mut table = ConfidenceTable::new(1023);
    for _ in 0..40 {
        let _ = table.increment(fd(-3));
    }
    for _ in 0..1022 {
        assert!(!table.increment(fd(1)));
    }
    assert_eq!(table.get(fd(1)), 1022);

    assert!(table.increment(fd(1)), "1023rd increment must trigger decay");
    assert_eq!(table.get(fd(1)), 511);
    assert_eq!(table.get(fd(-3)), 20);
}

#[test]
fn small_ceiling_decays_early() {
    let mut table = ConfidenceTable::new(3);
    assert!(!table.increment(fd(7)));
    assert!(!table.increment(fd(7)));
    assert!(table.increment(fd(7)));
    assert_eq!(table.get(fd(7)), 1);
}

proptest! {
    /// No sequence of increments and decays lets a counter exceed the ceiling.
    #[test]
    fn counters_never_exceed_ceiling(
        ops in prop::collection::vec((0usize..15, any::<bool>()), 0..3000),
        max in 1u16..=1023,
    ) {
        let mut table = ConfidenceTable::new(max);
        for (idx, decay) in ops {
            match FreeDistance::from_index(idx) {
                Some(d) if !decay => { let _ = table.increment(d); }
                _ => table.decay(),
            }
            prop_assert!(table.counters().iter().all(|&c| c < max));
        }
    }
}
