//! Trace replay host.
//!
//! Models the part of the memory system that sits around a translation prefetcher: a TLB
//! in front, a page walker behind it. Per demand translation:
//! 1. **TLB hit:** nothing reaches the prefetcher.
//! 2. **Prefetch queue hit:** the walk is avoided and the TLB is filled from the candidate,
//!    falling back to the event's own physical page while the candidate is unresolved.
//! 3. **Otherwise:** the sampler is consulted for confirmation bookkeeping, the page is walked
//!    and the walk is reported to the prefetcher.

use tracing::debug;

use crate::config::Config;
use crate::core::units::mmu::Tlb;
use crate::core::units::prefetch::{FreeDistancePredictor, TranslationPrefetcher};
use crate::stats::ReplayStats;

use super::TraceEvent;

/// Replay host owning a TLB and a translation prefetcher.
#[derive(Debug)]
pub struct TraceReplay<P> {
    tlb: Tlb,
    prefetcher: P,
    stats: ReplayStats,
}

impl TraceReplay<FreeDistancePredictor> {
    /// Builds a host with a fresh free-distance predictor from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Tlb::new(config.tlb.size), FreeDistancePredictor::new(&config.prefetcher))
    }
}

impl<P: TranslationPrefetcher> TraceReplay<P> {
    /// Creates a host around an existing TLB and prefetcher.
    pub fn new(tlb: Tlb, prefetcher: P) -> Self {
        Self {
            tlb,
            prefetcher,
            stats: ReplayStats::default(),
        }
    }

    /// Replays one demand translation.
    pub fn step(&mut self, event: TraceEvent) {
        let TraceEvent {
            virtual_page,
            physical_page,
        } = event;
        self.stats.events += 1;

        if self.tlb.lookup(virtual_page).is_some() {
            self.stats.tlb_hits += 1;
            return;
        }
        self.stats.tlb_misses += 1;

        if let Some(candidate) = self.prefetcher.pq_lookup(virtual_page) {
            self.stats.pq_hits += 1;
            let ppn = match candidate.resolved() {
                Some(ppn) => {
                    self.stats.pq_resolved_hits += 1;
                    ppn
                }
                None => physical_page,
            };
            self.tlb.insert(virtual_page, ppn);
            return;
        }

        if self.prefetcher.sampler_lookup(virtual_page) {
            self.stats.sampler_hits += 1;
        }

        self.stats.page_walks += 1;
        self.prefetcher.process_page_walk(virtual_page, physical_page);
        self.tlb.insert(virtual_page, physical_page);
    }

    /// Replays every event in order and returns the accumulated statistics.
    pub fn run<I>(&mut self, events: I) -> &ReplayStats
    where
        I: IntoIterator<Item = TraceEvent>,
    {
        for event in events {
            self.step(event);
        }
        debug!(
            events = self.stats.events,
            walks = self.stats.page_walks,
            avoided = self.stats.pq_hits,
            "replay finished"
        );
        &self.stats
    }

    /// Returns the accumulated statistics.
    pub const fn stats(&self) -> &ReplayStats {
        &self.stats
    }

    /// Returns the TLB.
    pub const fn tlb(&self) -> &Tlb {
        &self.tlb
    }

    /// Returns the prefetcher.
    pub const fn prefetcher(&self) -> &P {
        &self.prefetcher
    }

    /// Consumes the host and returns its prefetcher.
    pub fn into_prefetcher(self) -> P {
        self.prefetcher
    }
}
