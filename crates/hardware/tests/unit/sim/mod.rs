
/// Trace parsing and loading.
pub mod trace;
