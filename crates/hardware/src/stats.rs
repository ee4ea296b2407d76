//! Prefetcher and replay statistics collection and reporting.
//!
//! This module tracks activity counters for the predictor and its host. It provides:
//! 1. **Prefetcher:** Page walks observed, candidate routing, evictions, hits and decays.
//! 2. **Replay:** TLB hit/miss counts, page walks performed and walks avoided by the PQ.
//! 3. **Reporting:** Sectioned text output and `serde` serialization for JSON reports.

use serde::Serialize;

/// Counters maintained by a [`FreeDistancePredictor`](crate::FreeDistancePredictor).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PrefetcherStats {
    /// Demand page walks observed.
    pub page_walks: u64,
    /// Candidates routed to the prefetch queue.
    pub pq_insertions: u64,
    /// Candidates routed to the sampler.
    pub sampler_insertions: u64,
    /// Prefetch queue entries evicted unconfirmed.
    pub pq_evictions: u64,
    /// Sampler entries evicted unconfirmed.
    pub sampler_evictions: u64,
    /// Lookups that matched a prefetch queue entry.
    pub pq_hits: u64,
    /// Lookups that matched a sampler entry.
    pub sampler_hits: u64,
    /// Confidence table decays (explicit or saturation-triggered).
    pub decays: u64,
}

impl PrefetcherStats {
    /// Fraction of generated candidates that went to the prefetch queue.
    pub fn promotion_rate(&self) -> f64 {
        ratio(
            self.pq_insertions,
            self.pq_insertions + self.sampler_insertions,
        )
    }

    /// Fraction of prefetch queue insertions later confirmed by a lookup.
    pub fn pq_accuracy(&self) -> f64 {
        ratio(self.pq_hits, self.pq_insertions)
    }
}

/// Counters maintained by a [`TraceReplay`](crate::TraceReplay).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ReplayStats {
    /// Demand translation events replayed.
    pub events: u64,
    /// Events served by the TLB.
    pub tlb_hits: u64,
    /// Events that missed in the TLB.
    pub tlb_misses: u64,
    /// Misses that required a page walk.
    pub page_walks: u64,
    /// Misses covered by a prefetch queue candidate (walk avoided).
    pub pq_hits: u64,
    /// Prefetch queue hits whose candidate already carried a physical page.
    pub pq_resolved_hits: u64,
    /// Misses that matched a sampled candidate.
    pub sampler_hits: u64,
}

impl ReplayStats {
    /// TLB hit rate over all events.
    pub fn tlb_hit_rate(&self) -> f64 {
        ratio(self.tlb_hits, self.events)
    }

    /// Fraction of TLB misses that avoided a page walk.
    pub fn walks_avoided_rate(&self) -> f64 {
        ratio(self.pq_hits, self.tlb_misses)
    }
}

/// Section names for selective stats output.
///
/// Pass an empty slice to [`print_sections`] to print all sections.
pub const STATS_SECTIONS: &[&str] = &["prefetcher", "replay"];

/// Prints only the requested statistics sections to stdout.
///
/// Each element of `sections` should be one of [`STATS_SECTIONS`]. Pass an empty slice to
/// print every section.
pub fn print_sections(prefetcher: &PrefetcherStats, replay: &ReplayStats, sections: &[String]) {
    let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);

    println!("\n==========================================================");
    println!("FREE-DISTANCE PREFETCHER STATISTICS");
    println!("==========================================================");
    if want("prefetcher") {
        println!("PREFETCHER");
        println!("  sbfp.page_walks        {}", prefetcher.page_walks);
        println!(
            "  sbfp.pq_inserts        {} ({:.2}%)",
            prefetcher.pq_insertions,
            prefetcher.promotion_rate() * 100.0
        );
        println!("  sbfp.sampler_inserts   {}", prefetcher.sampler_insertions);
        println!("  sbfp.pq_evictions      {}", prefetcher.pq_evictions);
        println!("  sbfp.sampler_evictions {}", prefetcher.sampler_evictions);
        println!(
            "  sbfp.pq_hits           {} ({:.2}%)",
            prefetcher.pq_hits,
            prefetcher.pq_accuracy() * 100.0
        );
        println!("  sbfp.sampler_hits      {}", prefetcher.sampler_hits);
        println!("  sbfp.decays            {}", prefetcher.decays);
        println!("----------------------------------------------------------");
    }
    if want("replay") {
        println!("REPLAY");
        println!("  replay.events          {}", replay.events);
        println!(
            "  tlb.hits               {} ({:.2}%)",
            replay.tlb_hits,
            replay.tlb_hit_rate() * 100.0
        );
        println!("  tlb.misses             {}", replay.tlb_misses);
        println!("  ptw.walks              {}", replay.page_walks);
        println!(
            "  ptw.avoided            {} ({:.2}%)",
            replay.pq_hits,
            replay.walks_avoided_rate() * 100.0
        );
        println!("  ptw.avoided_resolved   {}", replay.pq_resolved_hits);
        println!("  sampler.hits           {}", replay.sampler_hits);
        println!("----------------------------------------------------------");
    }
}

fn ratio(num: u64, den: u64) -> f64 {
    if den == 0 { 0.0 } else { num as f64 / den as f64 }
}
