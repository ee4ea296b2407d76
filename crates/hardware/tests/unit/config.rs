//! # Configuration Tests
//!
//! Defaults, partial JSON deserialization, file loading and validation.

use std::io::Write;

use pretty_assertions::assert_eq;
use sbfp_core::common::ConfigError;
use sbfp_core::config::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(
        config.prefetcher,
        PrefetcherConfig {
            threshold: 100,
            counter_max: 1023,
            pq_size: 64,
            sampler_size: 64,
        }
    );
    assert_eq!(config.tlb.size, 32);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_json_yields_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let config = Config::from_json(r#"{ "prefetcher": { "sampler_size": 128 } }"#).unwrap();
    assert_eq!(config.prefetcher.sampler_size, 128);
    assert_eq!(config.prefetcher.pq_size, 64);
    assert_eq!(config.prefetcher.threshold, 100);
    assert_eq!(config.tlb, TlbConfig::default());
}

#[test]
fn test_unknown_field_is_rejected() {
    let err = Config::from_json(r#"{ "prefetcher": { "treshold": 5 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_malformed_json_is_rejected() {
    let err = Config::from_json("{ prefetcher: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_zero_pq_size_is_rejected() {
    let err = Config::from_json(r#"{ "prefetcher": { "pq_size": 0 } }"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ZeroCapacity {
            field: "prefetcher.pq_size"
        }
    ));
}

#[test]
fn test_zero_sampler_and_tlb_are_rejected() {
    let sampler = PrefetcherConfig {
        sampler_size: 0,
        ..PrefetcherConfig::default()
    };
    assert!(matches!(
        sampler.validate(),
        Err(ConfigError::ZeroCapacity {
            field: "prefetcher.sampler_size"
        })
    ));
    assert!(matches!(
        TlbConfig { size: 0 }.validate(),
        Err(ConfigError::ZeroCapacity { field: "tlb.size" })
    ));
}

#[test]
fn test_threshold_must_be_below_ceiling() {
    let err = Config::from_json(r#"{ "prefetcher": { "threshold": 1023 } }"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ThresholdNotBelowCeiling {
            threshold: 1023,
            counter_max: 1023
        }
    ));
    assert_eq!(
        err.to_string(),
        "threshold 1023 must be below counter_max 1023"
    );
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "prefetcher": {{ "threshold": 20 }}, "tlb": {{ "size": 8 }} }}"#).unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.prefetcher.threshold, 20);
    assert_eq!(config.tlb.size, 8);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_default_serializes_every_field() {
    let value = serde_json::to_value(Config::default()).unwrap();
    assert_eq!(value["prefetcher"]["threshold"], 100);
    assert_eq!(value["prefetcher"]["counter_max"], 1023);
    assert_eq!(value["tlb"]["size"], 32);
}
