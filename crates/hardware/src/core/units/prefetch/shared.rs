//! Shared predictor handle.
//!
//! Counter increments, saturation decay and FIFO eviction are not independently safe under
//! interleaving, so every operation takes one lock over the whole predictor.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::common::PhysicalPage;
use crate::config::PrefetcherConfig;

use super::{FreeDistancePredictor, TranslationPrefetcher};

/// Cloneable, thread-safe handle to a single [`FreeDistancePredictor`].
#[derive(Clone, Debug, Default)]
pub struct SharedPredictor {
    inner: Arc<Mutex<FreeDistancePredictor>>,
}

impl SharedPredictor {
    /// Creates a handle around a fresh predictor.
    pub fn new(config: &PrefetcherConfig) -> Self {
        Self::from_predictor(FreeDistancePredictor::new(config))
    }

    /// Wraps an existing predictor.
    pub fn from_predictor(predictor: FreeDistancePredictor) -> Self {
        Self {
            inner: Arc::new(Mutex::new(predictor)),
        }
    }

    /// Locks the predictor for a sequence of operations.
    ///
    /// A lock poisoned by a panicking holder is recovered: at worst one update was lost.
    pub fn lock(&self) -> MutexGuard<'_, FreeDistancePredictor> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`FreeDistancePredictor::process_page_walk`].
    pub fn process_page_walk(&self, demand_virtual_page: u64, demand_physical_page: u64) {
        self.lock()
            .process_page_walk(demand_virtual_page, demand_physical_page);
    }

    /// See [`FreeDistancePredictor::pq_lookup`].
    pub fn pq_lookup(&self, virtual_page: u64) -> Option<PhysicalPage> {
        self.lock().pq_lookup(virtual_page)
    }

    /// See [`FreeDistancePredictor::sampler_lookup`].
    pub fn sampler_lookup(&self, virtual_page: u64) -> bool {
        self.lock().sampler_lookup(virtual_page)
    }

    /// See [`FreeDistancePredictor::update_fdt_on_hit`].
    pub fn update_fdt_on_hit(&self, free_distance: i32) {
        self.lock().update_fdt_on_hit(free_distance);
    }

    /// See [`FreeDistancePredictor::decay_counters`].
    pub fn decay_counters(&self) {
        self.lock().decay_counters();
    }
}

impl TranslationPrefetcher for SharedPredictor {
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
