//! Structural constants.
//!
//! These values shape the predictor's tables and are not configurable: the index mapping of
//! free distances onto the confidence table depends on them.

/// Largest free distance, in pages, from the demand page (both directions).
pub const MAX_FREE_DISTANCE: i32 = 7;

/// Number of free-distance classes: `[-7, -1]` and `[1, 7]`. Zero is not a class.
pub const NUM_FREE_DISTANCES: usize = 2 * MAX_FREE_DISTANCE as usize;

/// Number of bits to shift to convert a byte address to a page number (4KB pages).
pub const PAGE_SHIFT: u64 = 12;
