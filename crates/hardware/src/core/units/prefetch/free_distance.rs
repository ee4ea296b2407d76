//! Free-distance classes.
//!
//! A free distance is the signed page offset of a candidate from the demand page. The valid
//! classes are `[-7, -1]` and `[1, 7]`; each maps onto one slot of the confidence table:
//!
//! | distance | index |
//! |----------|-------|
//! | -7 ..= -1 | 0 ..= 6 |
//! | 1 ..= 7  | 7 ..= 13 |

use std::fmt;

use serde::Serialize;

use crate::common::{MAX_FREE_DISTANCE, NUM_FREE_DISTANCES};

/// A validated, nonzero free distance in `[-7, 7]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FreeDistance(i8);

impl FreeDistance {
    /// Validates a raw distance.
    ///
    /// # Returns
    ///
    /// `None` for zero or for distances outside `[-7, 7]`.
    #[inline]
    pub const fn new(distance: i32) -> Option<Self> {
        if distance == 0 || distance < -MAX_FREE_DISTANCE || distance > MAX_FREE_DISTANCE {
            None
        } else {
            Some(Self(distance as i8))
        }
    }

    /// Returns the distance for a confidence-table index, the inverse of [`index`](Self::index).
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= NUM_FREE_DISTANCES {
            return None;
        }
        let raw = index as i32;
        if raw < MAX_FREE_DISTANCE {
            Some(Self((raw - MAX_FREE_DISTANCE) as i8))
        } else {
            Some(Self((raw - MAX_FREE_DISTANCE + 1) as i8))
        }
    }

    /// Returns the signed offset in pages.
    #[inline]
    pub const fn get(self) -> i32 {
        self.0 as i32
    }

    /// Returns the confidence-table slot for this distance.
    #[inline]
    pub const fn index(self) -> usize {
        let d = self.0 as i32;
        if d < 0 {
            (d + MAX_FREE_DISTANCE) as usize
        } else {
            (d + MAX_FREE_DISTANCE - 1) as usize
        }
    }

    /// Applies the offset to a page number, wrapping at the ends of the page space.
    #[inline]
    pub const fn offset(self, page: u64) -> u64 {
        page.wrapping_add_signed(self.0 as i64)
    }

    /// Iterates every valid distance in ascending order (`-7` first, `7` last).
    pub fn all() -> impl Iterator<Item = Self> {
        (-MAX_FREE_DISTANCE..=MAX_FREE_DISTANCE).filter_map(Self::new)
    }
}

impl fmt::Display for FreeDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

/// Maps a raw free distance to its confidence-table index.
///
/// Returns `None` for zero and for `|distance| > 7`.
#[inline]
pub const fn free_distance_to_index(distance: i32) -> Option<usize> {
    match FreeDistance::new(distance) {
        Some(fd) => Some(fd.index()),
        None => None,
    }
}
