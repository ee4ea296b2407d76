//! Error definitions.
//!
//! The predictor itself cannot fail; these errors come from the layers around it:
//! 1. **Configuration:** JSON parsing and validation of tunables.
//! 2. **Traces:** Reading and parsing page-walk trace files.

use thiserror::Error;

/// Errors produced while loading or validating a [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for the config schema.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// A size or ceiling that must be nonzero was zero.
    #[error("`{field}` must be greater than zero")]
    ZeroCapacity {
        /// Dotted path of the offending field.
        field: &'static str,
    },

    /// The routing threshold is not strictly below the counter ceiling, so no class could
    /// ever be promoted.
    #[error("threshold {threshold} must be below counter_max {counter_max}")]
    ThresholdNotBelowCeiling {
        /// Configured routing threshold.
        threshold: u16,
        /// Configured saturation ceiling.
        counter_max: u16,
    },
}

/// Errors produced while reading a page-walk trace.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The trace file could not be read.
    #[error("failed to read trace: {0}")]
    Io(#[from] std::io::Error),

    /// A line did not contain exactly two fields.
    #[error("line {line}: expected `<virtual> <physical>`, found `{content}`")]
    Malformed {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },

    /// A field was not a decimal or `0x`-prefixed hexadecimal integer.
    #[error("line {line}: invalid number `{token}`")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// The token that failed to parse.
        token: String,
    },
}
