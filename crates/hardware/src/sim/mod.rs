//! Trace-driven simulation.
//!
//! Provides the page-walk trace loader and the replay host that drives a translation
//! prefetcher from a TLB, standing in for the memory system around the predictor.

/// Page-walk trace parsing and loading.
pub mod trace;

/// TLB-fronted replay of a trace through a translation prefetcher.
pub mod replay;

pub use self::replay::TraceReplay;
pub use self::trace::{TraceEvent, TraceUnits, load_trace, parse_trace};
