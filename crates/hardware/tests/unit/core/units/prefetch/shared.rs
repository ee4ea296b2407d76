//! Shared Predictor Tests.
//!
//! Verifies that clones of the handle observe one predictor and that concurrent callers
//! each get a whole operation under the lock.

use std::thread;

use sbfp_core::SharedPredictor;
use sbfp_core::TranslationPrefetcher;
use sbfp_core::common::PhysicalPage;
use sbfp_core::config::PrefetcherConfig;

#[test]
fn clones_share_one_predictor() {
    let a = SharedPredictor::new(&PrefetcherConfig::default());
    let b = a.clone();

    a.process_page_walk(1000, 2000);
    assert!(b.sampler_lookup(1001));
    assert_eq!(a.lock().confidence(1), Some(1));
}

#[test]
fn handle_forwards_confidence_operations() {
    let h = SharedPredictor::default();
    for _ in 0..101 {
        h.update_fdt_on_hit(-4);
    }
    h.process_page_walk(64, 0);
    assert_eq!(h.pq_lookup(60), Some(PhysicalPage::Unresolved));

    h.decay_counters();
    assert_eq!(h.lock().confidence(-4), Some(51));
}

/// Drives the handle through the trait, as a generic host would.
#[test]
fn handle_implements_translation_prefetcher() {
    fn walk_and_probe<P: TranslationPrefetcher>(p: &mut P) -> bool {
        p.process_page_walk(7, 0);
        p.sampler_lookup(14)
    }

    let mut h = SharedPredictor::default();
    assert!(walk_and_probe(&mut h));
}

#[test]
fn concurrent_walks_keep_invariants() {
    let h = SharedPredictor::default();
    let workers: Vec<_> = (0..4u64)
        .map(|t| {
            let h = h.clone();
            thread::spawn(move || {
                for i in 0..100u64 {
                    let demand = (t << 32) | (i * 100);
                    let mut pf = h.lock();
                    pf.process_page_walk(demand, 0);
                    if pf.pq_lookup(demand + 1).is_none() {
                        assert!(pf.sampler_lookup(demand + 1));
                    }
                }
            })
        })
        .collect();
    for w in workers {
        w.join().unwrap();
    }

    let pf = h.lock();
    assert_eq!(pf.stats().page_walks, 400);
    assert_eq!(pf.confidence(1), Some(400));
    assert!(pf.prefetch_queue().len() <= 64);
    assert!(pf.sampler().len() <= 64);
}

/// A panic while holding the lock does not disable the predictor.
#[test]
fn poisoned_lock_is_recovered() {
    let h = SharedPredictor::default();
    let h2 = h.clone();
    let result = thread::spawn(move || {
        let _guard = h2.lock();
        panic!("holder panicked");
    })
    .join();
    assert!(result.is_err());

    h.process_page_walk(10, 0);
    assert!(h.sampler_lookup(11));
}
