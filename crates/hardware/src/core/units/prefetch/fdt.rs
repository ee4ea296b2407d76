//! Free Distance Table (FDT).
//!
//! One saturating confidence counter per free-distance class. Counters start at zero, grow by
//! one per confirmed candidate and are halved together whenever any of them reaches the
//! ceiling, so the table tracks relative recent accuracy instead of pinning at the maximum.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `increment()`: O(1), O(N) on the call that triggers a decay
//!   - `decay()`: O(N) where N is the number of classes (14)
//! - **Space Complexity:** O(N)

use crate::common::NUM_FREE_DISTANCES;

use super::FreeDistance;

/// Per-distance confidence counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfidenceTable {
    /// Saturating counters indexed by [`FreeDistance::index`].
    counters: [u16; NUM_FREE_DISTANCES],
    /// Saturation ceiling.
    max: u16,
}

impl ConfidenceTable {
    /// Creates a zeroed table whose counters saturate at `max`.
    pub const fn new(max: u16) -> Self {
        Self {
            counters: [0; NUM_FREE_DISTANCES],
            max,
        }
    }

    /// Returns the saturation ceiling.
    pub const fn max(&self) -> u16 {
        self.max
    }

    /// Returns the counter for `fd`.
    #[inline]
    pub const fn get(&self, fd: FreeDistance) -> u16 {
        self.counters[fd.index()]
    }

    /// Returns all counters in index order.
    pub const fn counters(&self) -> &[u16; NUM_FREE_DISTANCES] {
        &self.counters
    }

    /// Records a confirmation for `fd`.
    ///
    /// A counter already at the ceiling is left alone. A counter that reaches the ceiling
    /// exactly on this increment halves the whole table before returning.
    ///
    /// # Returns
    ///
    /// `true` if the increment triggered a decay.
    pub fn increment(&mut self, fd: FreeDistance) -> bool {
        let counter = &mut self.counters[fd.index()];
        if *counter >= self.max {
            return false;
        }
        *counter += 1;
        if *counter == self.max {
            self.decay();
            return true;
        }
        false
    }

    /// Halves every counter, rounding down.
    pub fn decay(&mut self) {
        for counter in &mut self.counters {
            *counter >>= 1;
        }
    }
}
