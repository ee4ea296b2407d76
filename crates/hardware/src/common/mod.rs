//! Common types shared by the predictor and the replay host.
//!
//! 1. **Constants:** The free-distance range and the page geometry.
//! 2. **Pages:** The resolved/unresolved physical page type returned by lookups.
//! 3. **Error Handling:** Configuration and trace errors.

/// Structural constants (free-distance range, page geometry).
pub mod constants;

/// Error types for configuration and trace loading.
pub mod error;

/// Physical page identity as seen by the prefetcher.
pub mod page;

pub use constants::{MAX_FREE_DISTANCE, NUM_FREE_DISTANCES};
pub use error::{ConfigError, TraceError};
pub use page::PhysicalPage;
