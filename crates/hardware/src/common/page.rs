//! Physical page identity.

use serde::Serialize;

/// The physical page carried by a prefetch candidate.
///
/// Candidates are generated from virtual pages only; their physical page stays
/// [`Unresolved`](PhysicalPage::Unresolved) until the host memory system learns it. Callers of
/// a prefetch-queue lookup must treat an unresolved result as valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum PhysicalPage {
    /// No translation is known yet.
    #[default]
    Unresolved,
    /// The translated physical page number.
    Resolved(u64),
}

impl PhysicalPage {
    /// Returns the physical page number if it is known.
    #[inline]
    pub const fn resolved(self) -> Option<u64> {
        match self {
            Self::Resolved(ppn) => Some(ppn),
            Self::Unresolved => None,
        }
    }

    /// Returns true if no translation is known yet.
    #[inline]
    pub const fn is_unresolved(self) -> bool {
        matches!(self, Self::Unresolved)
    }
}

impl From<u64> for PhysicalPage {
    fn from(ppn: u64) -> Self {
        Self::Resolved(ppn)
    }
}
