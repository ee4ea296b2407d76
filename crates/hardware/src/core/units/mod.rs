//! Translation units.
//!
//! This module contains the memory management unit's translation cache and the
//! translation prefetchers that observe its page walks.

/// Memory Management Unit translation cache.
pub mod mmu;

/// Translation prefetcher implementations (free-distance predictor).
pub mod prefetch;
