use crate::core::{
    QtError,
    schema::INDEX_SCHEMA,
    wire::{columns, instrument_code, records, sanitize},
};

use super::model::{IndexBoard, IndexSummary, MarketIndex};

/// Route one raw record to its bucket.
///
/// `Ok(None)` for records whose code is missing or not one of the seven routed indices.
///
/// # Errors
///
/// [`QtError::Parse`] when a routed record is too short for the index schema.
pub fn parse_index_record(record: &[u8]) -> Result<Option<(MarketIndex, IndexSummary)>, QtError> {
    let code = instrument_code(record);
    let Some(index) = MarketIndex::from_code(&code) else {
        return Ok(None);
    };

    let row = INDEX_SCHEMA.project(&code, &columns(record))?;
    Ok(Some((index, IndexSummary::from_fields(row.into_values()))))
}

/// Build a fresh board from a raw (undecoded) response body.
///
/// Buckets not present in the body stay empty. A short record is skipped without
/// affecting the others.
pub fn parse_market(body: &[u8]) -> IndexBoard {
    let body = sanitize(body);
    let mut board = IndexBoard::default();

    for record in records(&body) {
        match parse_index_record(record) {
            Ok(Some((index, summary))) => board.set(index, summary),
            Ok(None) => {}
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_e, "skipping malformed index record");
            }
        }
    }

    board
}
