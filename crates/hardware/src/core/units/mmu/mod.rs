//! Memory Management Unit (MMU).
//!
//! Only the translation cache is modelled; page-table contents come from the replayed trace.

/// Translation Lookaside Buffer (TLB) for caching virtual-to-physical page translations.
pub mod tlb;

pub use self::tlb::Tlb;
