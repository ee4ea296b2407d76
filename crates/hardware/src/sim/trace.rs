//! Page-walk trace loading.
//!
//! A trace is plain text with one demand translation per line:
//!
//! ```text
//! # virtual  physical
//! 0x7f3a2    0x1c004
//! 1000       2000
//! ```
//!
//! Fields are whitespace or comma separated, decimal or `0x`-prefixed hexadecimal. Blank lines
//! and `#` comments are ignored. With [`TraceUnits::Bytes`] both fields are byte addresses and
//! are shifted down to 4KB page numbers.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::common::TraceError;
use crate::common::constants::PAGE_SHIFT;

/// One demand translation from a trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TraceEvent {
    /// Demand virtual page number.
    pub virtual_page: u64,
    /// Physical page number it translated to.
    pub physical_page: u64,
}

/// Unit of the numbers in a trace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceUnits {
    /// Fields are page numbers.
    #[default]
    Pages,
    /// Fields are byte addresses.
    Bytes,
}

/// Parses trace text into events.
///
/// # Errors
///
/// Returns [`TraceError::Malformed`] for lines without exactly two fields and
/// [`TraceError::InvalidNumber`] for fields that are not integers.
pub fn parse_trace(input: &str, units: TraceUnits) -> Result<Vec<TraceEvent>, TraceError> {
    let mut events = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }

        let fields: Vec<&str> = content
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|f| !f.is_empty())
            .collect();
        let [virt, phys] = fields.as_slice() else {
            return Err(TraceError::Malformed {
                line,
                content: content.to_owned(),
            });
        };

        let (virtual_page, physical_page) = (parse_number(virt, line)?, parse_number(phys, line)?);
        events.push(match units {
            TraceUnits::Pages => TraceEvent {
                virtual_page,
                physical_page,
            },
            TraceUnits::Bytes => TraceEvent {
                virtual_page: virtual_page >> PAGE_SHIFT,
                physical_page: physical_page >> PAGE_SHIFT,
            },
        });
    }

    Ok(events)
}

/// Reads and parses a trace file.
///
/// # Errors
///
/// Returns [`TraceError::Io`] if the file cannot be read, otherwise as [`parse_trace`].
pub fn load_trace(path: impl AsRef<Path>, units: TraceUnits) -> Result<Vec<TraceEvent>, TraceError> {
    let text = fs::read_to_string(path)?;
    parse_trace(&text, units)
}

fn parse_number(token: &str, line: usize) -> Result<u64, TraceError> {
    let parsed = match token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => token.parse(),
    };
    parsed.map_err(|_| TraceError::InvalidNumber {
        line,
        token: token.to_owned(),
    })
}
