//! Trace Loading Tests.
//!
//! Verifies number formats, separators, comments, byte-address conversion and error lines.

use std::io::Write;

use pretty_assertions::assert_eq;
use sbfp_core::common::TraceError;
use sbfp_core::sim::{TraceEvent, TraceUnits, load_trace, parse_trace};

fn ev(virtual_page: u64, physical_page: u64) -> TraceEvent {
    TraceEvent {
        virtual_page,
        physical_page,
    }
}

#[test]
fn parses_decimal_hex_and_separators() {
    let input = "1000 2000\n0x7f3a2\t0X1C004\n5,6\n  7 ,  8  \n";
    let events = parse_trace(input, TraceUnits::Pages).unwrap();
    assert_eq!(
        events,
        vec![ev(1000, 2000), ev(0x7f3a2, 0x1c004), ev(5, 6), ev(7, 8)]
    );
}

#[test]
fn skips_comments_and_blank_lines() {
    let input = "# virtual physical\n\n   \n10 20 # trailing\n#30 40\n";
    let events = parse_trace(input, TraceUnits::Pages).unwrap();
    assert_eq!(events, vec![ev(10, 20)]);
}

#[test]
fn byte_addresses_are_shifted_to_pages() {
    let events = parse_trace("0x12345678 0x9abcdfff", TraceUnits::Bytes).unwrap();
    assert_eq!(events, vec![ev(0x12345, 0x9abcd)]);
}

#[test]
fn wrong_field_count_reports_line() {
    let err = parse_trace("1 2\n3\n", TraceUnits::Pages).unwrap_err();
    match err {
        TraceError::Malformed { line, content } => {
            assert_eq!(line, 2);
            assert_eq!(content, "3");
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = parse_trace("1 2 3", TraceUnits::Pages).unwrap_err();
    assert!(matches!(err, TraceError::Malformed { line: 1, .. }));
}

#[test]
fn invalid_number_reports_token() {
    let err = parse_trace("# header\n12 0xzz\n", TraceUnits::Pages).unwrap_err();
    match err {
        TraceError::InvalidNumber { line, token } => {
            assert_eq!(line, 2);
            assert_eq!(token, "0xzz");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn negative_numbers_are_invalid() {
    let err = parse_trace("-1 5", TraceUnits::Pages).unwrap_err();
    assert!(matches!(err, TraceError::InvalidNumber { line: 1, .. }));
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# demo").unwrap();
    writeln!(file, "100 200").unwrap();
    writeln!(file, "101 201").unwrap();

    let events = load_trace(file.path(), TraceUnits::Pages).unwrap();
    assert_eq!(events, vec![ev(100, 200), ev(101, 201)]);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_trace(dir.path().join("none.trace"), TraceUnits::Pages).unwrap_err();
    assert!(matches!(err, TraceError::Io(_)));
}
