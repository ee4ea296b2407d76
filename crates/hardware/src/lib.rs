//! Sampling-based free-page translation prefetcher (SBFP).
//!
//! This crate models a translation prefetcher that learns which page offsets around a demand
//! page-table walk are worth prefetching. It provides:
//! 1. **Predictor:** The free-distance confidence table, prefetch queue and sampler.
//! 2. **Host model:** A direct-mapped TLB and a trace-replay driver that feeds the predictor.
//! 3. **Configuration:** JSON-deserializable tunables with validation.
//! 4. **Statistics:** Predictor and replay counters with text and JSON reporting.

/// Common types and constants (page identities, free-distance range, errors).
pub mod common;
/// Predictor and host configuration (defaults, validation, JSON loading).
pub mod config;
/// Hardware units (MMU/TLB and translation prefetchers).
pub mod core;
/// Trace loading and replay through a TLB-fronted predictor.
pub mod sim;
/// Prefetcher and replay statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// The free-distance translation prefetcher.
pub use crate::core::units::prefetch::FreeDistancePredictor;
/// Thread-safe handle around a single predictor.
pub use crate::core::units::prefetch::SharedPredictor;
/// Seam between a host memory system and a translation prefetcher.
pub use crate::core::units::prefetch::TranslationPrefetcher;
/// Trace-replay host.
pub use crate::sim::TraceReplay;
