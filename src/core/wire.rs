//! Byte-level tokenizer for the quote server's response format.
//!
//! A response is a flat blob of records separated by `;`, each one looking like
//!
//! ```text
//! v_sh600519="1~<name>~600519~1700.00~...~";
//! ```
//!
//! The stages run in this order: [`sanitize`] the body, split it with [`records`],
//! pull the instrument code out of each record with [`instrument_code`], and cut the
//! record into positional [`columns`] for a [`Schema`](crate::core::schema::Schema).
//! Everything works on bytes so the same code serves the raw (market) body and the
//! decoded (quotes) body.

use regex::bytes::Regex;
use std::sync::LazyLock;

/// Record separator.
pub const RECORD_DELIMITER: u8 = b';';
/// Column separator inside a record.
pub const FIELD_DELIMITER: u8 = b'~';

// ASCII-only `\w`: codes are ASCII and the body may still be GBK here.
static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)_\w+").expect("static code pattern"));

/// Trim surrounding ASCII whitespace and drop every `\n`, leaving a single line.
///
/// Idempotent; an empty body yields an empty buffer.
pub fn sanitize(body: &[u8]) -> Vec<u8> {
    body.trim_ascii()
        .iter()
        .copied()
        .filter(|b| *b != b'\n')
        .collect()
}

/// Split a sanitized body into records, in order.
///
/// The first empty segment ends the sequence, so the segment after a trailing `;`
/// never shows up and anything behind an empty `;;` is ignored.
pub fn records(body: &[u8]) -> impl Iterator<Item = &[u8]> {
    body.split(|b| *b == RECORD_DELIMITER)
        .take_while(|record| !record.is_empty())
}

/// Instrument code of a record: the first `_<word chars>` token with the underscore
/// stripped, or an empty string when the record carries none.
pub fn instrument_code(record: &[u8]) -> String {
    CODE_PATTERN
        .find(record)
        .map(|m| String::from_utf8_lossy(&m.as_bytes()[1..]).into_owned())
        .unwrap_or_default()
}

/// Trim a record and split it into its `~`-separated columns.
pub fn columns(record: &[u8]) -> Vec<&[u8]> {
    record.trim_ascii().split(|b| *b == FIELD_DELIMITER).collect()
}
