//! Bounded candidate queues.
//!
//! Both the prefetch queue and the sampler are strict bounded FIFOs: new candidates enter at
//! the front, the oldest leaves from the back once the queue is full, and nothing is ever
//! deduplicated or moved between queues.

use std::collections::VecDeque;

use serde::Serialize;

use crate::common::PhysicalPage;

use super::FreeDistance;

/// A speculative translation generated from a demand page walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CandidateEntry {
    /// Candidate virtual page (demand page plus `free_distance`).
    pub virtual_page: u64,
    /// Physical page, unresolved until the host supplies it.
    pub physical_page: PhysicalPage,
    /// Offset from the demand page that produced this candidate.
    pub free_distance: FreeDistance,
}

impl CandidateEntry {
    /// Builds the unresolved candidate at `fd` from `demand_virtual_page`.
    pub const fn unresolved(demand_virtual_page: u64, fd: FreeDistance) -> Self {
        Self {
            virtual_page: fd.offset(demand_virtual_page),
            physical_page: PhysicalPage::Unresolved,
            free_distance: fd,
        }
    }
}

/// Fixed-capacity FIFO of candidate entries, newest first.
#[derive(Clone, Debug)]
pub struct CandidateQueue {
    entries: VecDeque<CandidateEntry>,
    capacity: usize,
}

impl CandidateQueue {
    /// Creates an empty queue. A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Inserts `entry` as the newest element.
    ///
    /// # Returns
    ///
    /// The oldest entry if it had to be evicted to make room.
    pub fn insert(&mut self, entry: CandidateEntry) -> Option<CandidateEntry> {
        let evicted = if self.entries.len() >= self.capacity {
            self.entries.pop_back()
        } else {
            None
        };
        self.entries.push_front(entry);
        evicted
    }

    /// Finds the newest entry for `virtual_page`.
    pub fn find(&self, virtual_page: u64) -> Option<&CandidateEntry> {
        self.entries.iter().find(|e| e.virtual_page == virtual_page)
    }

    /// Iterates entries from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &CandidateEntry> {
        self.entries.iter()
    }

    /// Returns the number of entries held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the queue holds nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}
