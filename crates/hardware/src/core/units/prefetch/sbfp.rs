//! Sampling-Based Free-Page Translation Prefetcher (SBFP).
//!
//! On every demand page walk the predictor generates one candidate per free distance
//! (`-7..=-1` and `1..=7`) around the demand page. The confidence of each distance decides
//! where its candidate goes:
//! * **Prefetch queue:** confidence above the threshold. These candidates are worth a real
//!   prefetch and a later hit lets the host skip the walk.
//! * **Sampler:** everything else. Sampled candidates are never prefetched; they only exist
//!   so that a later hit can raise the confidence of their distance.
//!
//! A hit in either structure confirms the candidate's distance. Routing is re-evaluated per
//! page walk, so an entry stays where it was inserted even after its distance crosses the
//! threshold.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `process_page_walk()`: O(N) where N is the number of distances (14)
//!   - `pq_lookup()` / `sampler_lookup()`: O(Q) where Q is the queue capacity (64)
//! - **Space Complexity:** O(N + Q_pq + Q_sampler)

use tracing::{debug, trace};

use crate::common::{NUM_FREE_DISTANCES, PhysicalPage};
use crate::config::PrefetcherConfig;
use crate::stats::PrefetcherStats;

use super::{CandidateEntry, CandidateQueue, ConfidenceTable, FreeDistance, TranslationPrefetcher};

/// Free-distance predictor state.
#[derive(Clone, Debug)]
pub struct FreeDistancePredictor {
    /// Free Distance Table of per-distance confidence counters.
    fdt: ConfidenceTable,
    /// Prefetch Queue (PQ) of high-confidence candidates.
    pq: CandidateQueue,
    /// Sampler of low-confidence candidates.
    sampler: CandidateQueue,
    /// Confidence strictly above which a distance routes to the PQ.
    threshold: u16,
    stats: PrefetcherStats,
}

impl FreeDistancePredictor {
    /// Creates a predictor with zeroed confidence and empty queues.
    ///
    /// The config is assumed validated; out-of-range capacities are raised to one.
    pub fn new(config: &PrefetcherConfig) -> Self {
        Self {
            fdt: ConfidenceTable::new(config.counter_max),
            pq: CandidateQueue::new(config.pq_size),
            sampler: CandidateQueue::new(config.sampler_size),
            threshold: config.threshold,
            stats: PrefetcherStats::default(),
        }
    }

    /// Generates the candidates for a demand page walk.
    ///
    /// Exactly one candidate per free distance is inserted, into the prefetch queue when that
    /// distance's confidence exceeds the threshold and into the sampler otherwise. The physical
    /// page of the demand walk is not used: candidates carry virtual pages only.
    pub fn process_page_walk(&mut self, demand_virtual_page: u64, _demand_physical_page: u64) {
        self.stats.page_walks += 1;

        let mut promoted = 0usize;
        for fd in FreeDistance::all() {
            let entry = CandidateEntry::unresolved(demand_virtual_page, fd);
            if self.fdt.get(fd) > self.threshold {
                promoted += 1;
                self.insert_into_pq(entry);
            } else {
                self.insert_into_sampler(entry);
            }
        }

        trace!(
            vpn = demand_virtual_page,
            promoted,
            sampled = NUM_FREE_DISTANCES - promoted,
            "page walk"
        );
    }

    /// Looks up `virtual_page` in the prefetch queue.
    ///
    /// A hit confirms the matching candidate's free distance.
    ///
    /// # Returns
    ///
    /// The candidate's physical page (which may still be unresolved), or `None` on a miss.
    pub fn pq_lookup(&mut self, virtual_page: u64) -> Option<PhysicalPage> {
        let (physical_page, fd) = self
            .pq
            .find(virtual_page)
            .map(|e| (e.physical_page, e.free_distance))?;

        self.stats.pq_hits += 1;
        trace!(vpn = virtual_page, %fd, "prefetch queue hit");
        self.confirm(fd);
        Some(physical_page)
    }

    /// Looks up `virtual_page` in the sampler.
    ///
    /// A hit confirms the matching candidate's free distance. Sampled candidates carry no
    /// physical page, so only the hit itself is reported.
    pub fn sampler_lookup(&mut self, virtual_page: u64) -> bool {
        let Some(fd) = self.sampler.find(virtual_page).map(|e| e.free_distance) else {
            return false;
        };

        self.stats.sampler_hits += 1;
        trace!(vpn = virtual_page, %fd, "sampler hit");
        self.confirm(fd);
        true
    }

    /// Raises the confidence of `free_distance` by one.
    ///
    /// Zero and out-of-range distances are ignored. If the counter reaches the ceiling the
    /// whole table is halved within this call.
    pub fn update_fdt_on_hit(&mut self, free_distance: i32) {
        if let Some(fd) = FreeDistance::new(free_distance) {
            self.confirm(fd);
        }
    }

    /// Halves every confidence counter.
    pub fn decay_counters(&mut self) {
        self.fdt.decay();
        self.stats.decays += 1;
    }

    /// Returns the confidence counter for a raw distance, `None` if the distance is invalid.
    pub fn confidence(&self, free_distance: i32) -> Option<u16> {
        FreeDistance::new(free_distance).map(|fd| self.fdt.get(fd))
    }

    /// Returns the confidence table.
    pub const fn confidence_table(&self) -> &ConfidenceTable {
        &self.fdt
    }

    /// Returns the prefetch queue.
    pub const fn prefetch_queue(&self) -> &CandidateQueue {
        &self.pq
    }

    /// Returns the sampler.
    pub const fn sampler(&self) -> &CandidateQueue {
        &self.sampler
    }

    /// Returns the routing threshold.
    pub const fn threshold(&self) -> u16 {
        self.threshold
    }

    /// Returns the activity counters.
    pub const fn stats(&self) -> &PrefetcherStats {
        &self.stats
    }

    fn confirm(&mut self, fd: FreeDistance) {
        if self.fdt.increment(fd) {
            self.stats.decays += 1;
            debug!(%fd, max = self.fdt.max(), "confidence saturated, decaying table");
        }
    }

    fn insert_into_pq(&mut self, entry: CandidateEntry) {
        self.stats.pq_insertions += 1;
        if self.pq.insert(entry).is_some() {
            self.stats.pq_evictions += 1;
        }
    }

    fn insert_into_sampler(&mut self, entry: CandidateEntry) {
        self.stats.sampler_insertions += 1;
        if self.sampler.insert(entry).is_some() {
            self.stats.sampler_evictions += 1;
        }
    }
}

impl Default for FreeDistancePredictor {
    fn default() -> Self {
        Self::new(&PrefetcherConfig::default())
    }
}

impl TranslationPrefetcher for FreeDistancePredictor {
    fn process_page_walk(&mut self, demand_virtual_page: u64, demand_physical_page: u64) {
        Self::process_page_walk(self, demand_virtual_page, demand_physical_page);
    }

    fn pq_lookup(&mut self, virtual_page: u64) -> Option<PhysicalPage> {
        Self::pq_lookup(self, virtual_page)
    }

    fn sampler_lookup(&mut self, virtual_page: u64) -> bool {
        Self::sampler_lookup(self, virtual_page)
    }
}
