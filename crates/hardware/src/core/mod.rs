//! Hardware units modelled by this crate.
//!
//! The predictor lives next to the translation hardware that feeds it, mirroring where a
//! translation prefetcher sits in a real MMU.

/// Translation units (TLB) and translation prefetchers.
pub mod units;
