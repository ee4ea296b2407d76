//! Translation prefetcher implementations.
//!
//! This module contains the interface a host memory system drives on every page walk and the
//! sampling-based free-distance predictor that implements it.

/// Free-distance classes and their confidence-table indices.
pub mod free_distance;

/// Confidence table of saturating per-distance counters.
pub mod fdt;

/// Bounded FIFO candidate storage (prefetch queue and sampler).
pub mod queue;

/// Sampling-based free-distance predictor.
pub mod sbfp;

/// Mutex-guarded predictor handle for hosts with concurrent demand paths.
pub mod shared;

pub use self::fdt::ConfidenceTable;
pub use self::free_distance::{FreeDistance, free_distance_to_index};
pub use self::queue::{CandidateEntry, CandidateQueue};
pub use self::sbfp::FreeDistancePredictor;
pub use self::shared::SharedPredictor;

use crate::common::PhysicalPage;

/// Trait for translation prefetcher implementations.
///
/// The host calls [`process_page_walk`](Self::process_page_walk) on every demand translation
/// and consults the two lookups on later misses.
pub trait TranslationPrefetcher: Send {
    /// Observes a demand page walk and generates candidate translations around it.
    ///
    /// # Arguments
    ///
    /// * `demand_virtual_page` - The virtual page that was walked
    /// * `demand_physical_page` - The physical page it translated to
    fn process_page_walk(&mut self, demand_virtual_page: u64, demand_physical_page: u64);

    /// Checks whether a high-confidence candidate covers `virtual_page`.
    ///
    /// # Returns
    ///
    /// The candidate's physical page on a hit (possibly
    /// [`Unresolved`](PhysicalPage::Unresolved)), otherwise `None`.
    fn pq_lookup(&mut self, virtual_page: u64) -> Option<PhysicalPage>;

    /// Checks whether a low-confidence candidate was tracked for `virtual_page`.
    fn sampler_lookup(&mut self, virtual_page: u64) -> bool;
}
