//! Configuration system for the free-distance prefetcher and its replay host.
//!
//! This module defines the configuration structures used to parameterize the predictor. It
//! provides:
//! 1. **Defaults:** Baseline table sizes, routing threshold and counter ceiling.
//! 2. **Structures:** Hierarchical config for the prefetcher and the TLB in front of it.
//! 3. **Validation:** Rejection of sizes and thresholds that would make the predictor inert.
//!
//! Configuration is supplied as JSON (`Config::from_json`, `Config::load`) or built with
//! `Config::default()`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::ConfigError;

/// Default configuration constants.
///
/// These values define the baseline predictor when not explicitly overridden.
mod defaults {
    /// Confidence above which a free distance routes candidates to the prefetch queue.
    ///
    /// Routing uses a strict comparison: a counter equal to the threshold still samples.
    pub const THRESHOLD: u16 = 100;

    /// Saturation ceiling of each confidence counter (10-bit range).
    ///
    /// Reaching this value on a confirmation halves every counter.
    pub const COUNTER_MAX: u16 = 1023;

    /// Prefetch queue capacity in entries.
    pub const PQ_SIZE: usize = 64;

    /// Sampler capacity in entries.
    pub const SAMPLER_SIZE: usize = 64;

    /// Translation Lookaside Buffer entry count.
    ///
    /// Number of virtual-to-physical page translations cached in front of the predictor.
    pub const TLB_SIZE: usize = 32;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use sbfp_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.prefetcher.threshold, 100);
/// assert_eq!(config.prefetcher.counter_max, 1023);
/// ```
///
/// Deserializing from JSON; omitted fields keep their defaults:
///
/// ```
/// use sbfp_core::config::Config;
///
/// let json = r#"{
///     "prefetcher": { "threshold": 50, "pq_size": 32 },
///     "tlb": { "size": 64 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.prefetcher.threshold, 50);
/// assert_eq!(config.prefetcher.pq_size, 32);
/// assert_eq!(config.prefetcher.sampler_size, 64);
/// assert_eq!(config.tlb.size, 64);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Free-distance predictor tunables
    #[serde(default)]
    pub prefetcher: PrefetcherConfig,
    /// TLB used by the replay host
    #[serde(default)]
    pub tlb: TlbConfig,
}

impl Config {
    /// Parses and validates a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields, and a validation
    /// error if any value is out of range.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as [`Config::from_json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Checks every section for values that would leave the predictor unable to operate.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.prefetcher.validate()?;
        self.tlb.validate()
    }
}

/// Free-distance predictor tunables.
///
/// The free-distance range itself is fixed; see
/// [`MAX_FREE_DISTANCE`](crate::common::MAX_FREE_DISTANCE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PrefetcherConfig {
    /// Confidence strictly above which candidates go to the prefetch queue
    #[serde(default = "PrefetcherConfig::default_threshold")]
    pub threshold: u16,

    /// Saturation ceiling of each confidence counter
    #[serde(default = "PrefetcherConfig::default_counter_max")]
    pub counter_max: u16,

    /// Prefetch queue capacity
    #[serde(default = "PrefetcherConfig::default_pq_size")]
    pub pq_size: usize,

    /// Sampler capacity
    #[serde(default = "PrefetcherConfig::default_sampler_size")]
    pub sampler_size: usize,
}

impl PrefetcherConfig {
    fn default_threshold() -> u16 {
        defaults::THRESHOLD
    }

    fn default_counter_max() -> u16 {
        defaults::COUNTER_MAX
    }

    fn default_pq_size() -> usize {
        defaults::PQ_SIZE
    }

    fn default_sampler_size() -> usize {
        defaults::SAMPLER_SIZE
    }

    /// Validates queue capacities and the threshold/ceiling relationship.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroCapacity`] or [`ConfigError::ThresholdNotBelowCeiling`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pq_size == 0 {
            return Err(ConfigError::ZeroCapacity {
                field: "prefetcher.pq_size",
            });
        }
        if self.sampler_size == 0 {
            return Err(ConfigError::ZeroCapacity {
                field: "prefetcher.sampler_size",
            });
        }
        if self.counter_max == 0 {
            return Err(ConfigError::ZeroCapacity {
                field: "prefetcher.counter_max",
            });
        }
        if self.threshold >= self.counter_max {
            return Err(ConfigError::ThresholdNotBelowCeiling {
                threshold: self.threshold,
                counter_max: self.counter_max,
            });
        }
        Ok(())
    }
}

impl Default for PrefetcherConfig {
    fn default() -> Self {
        Self {
            threshold: defaults::THRESHOLD,
            counter_max: defaults::COUNTER_MAX,
            pq_size: defaults::PQ_SIZE,
            sampler_size: defaults::SAMPLER_SIZE,
        }
    }
}

/// TLB configuration for the replay host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TlbConfig {
    /// Number of entries (rounded up to a power of two)
    #[serde(default = "TlbConfig::default_size")]
    pub size: usize,
}

impl TlbConfig {
    fn default_size() -> usize {
        defaults::TLB_SIZE
    }

    /// Validates the TLB size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroCapacity`] for a zero-entry TLB.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroCapacity { field: "tlb.size" });
        }
        Ok(())
    }
}

impl Default for TlbConfig {
    fn default() -> Self {
        Self {
            size: defaults::TLB_SIZE,
        }
    }
}
