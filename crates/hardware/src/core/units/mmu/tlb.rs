//! Translation Lookaside Buffer (TLB).
//!
//! A direct-mapped cache of page translations. It stores the mapping between Virtual Page
//! Numbers (VPN) and Physical Page Numbers (PPN) so that only misses reach the page walker
//! and, through it, the translation prefetcher.

/// A single entry in the TLB.
#[derive(Clone, Copy, Debug, Default)]
struct TlbEntry {
    /// Virtual Page Number (Tag).
    vpn: u64,
    /// Physical Page Number (Data).
    ppn: u64,
    /// Entry validity flag.
    valid: bool,
}

/// Translation Lookaside Buffer structure.
#[derive(Debug, Clone)]
pub struct Tlb {
    /// Vector of TLB entries.
    entries: Vec<TlbEntry>,
    /// Mask used for indexing (size - 1).
    mask: usize,
}

impl Tlb {
    /// Creates a new TLB with the specified size.
    ///
    /// # Arguments
    ///
    /// * `size` - Number of entries (rounded up to the next power of 2, minimum 1).
    pub fn new(size: usize) -> Self {
        let safe_size = size.max(1).next_power_of_two();

        Self {
            entries: vec![TlbEntry::default(); safe_size],
            mask: safe_size - 1,
        }
    }

    /// Returns the number of slots in the TLB.
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Returns the number of valid translations currently held.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.valid).count()
    }

    /// Returns true if no translation is held.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| !e.valid)
    }

    /// Looks up a VPN in the TLB.
    ///
    /// # Returns
    ///
    /// `Some(ppn)` if the VPN is cached, otherwise `None`.
    #[inline]
    pub fn lookup(&self, vpn: u64) -> Option<u64> {
        let entry = &self.entries[self.index(vpn)];

        if entry.valid && entry.vpn == vpn {
            return Some(entry.ppn);
        }
        None
    }

    /// Inserts a mapping, replacing whatever occupied its slot.
    pub fn insert(&mut self, vpn: u64, ppn: u64) {
        let idx = self.index(vpn);
        self.entries[idx] = TlbEntry {
            vpn,
            ppn,
            valid: true,
        };
    }

    /// Invalidates every entry.
    pub fn flush(&mut self) {
        for e in &mut self.entries {
            e.valid = false;
        }
    }

    #[inline]
    const fn index(&self, vpn: u64) -> usize {
        (vpn as usize) & self.mask
    }
}
