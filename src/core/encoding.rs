//! GBK → UTF-8 conversion for quote bodies.

use encoding_rs::{DecoderResult, GBK};

use crate::core::QtError;

/// Decode a GBK (Simplified Chinese) byte buffer into a `String`.
///
/// No replacement characters are ever produced: the first malformed or truncated
/// multi-byte sequence fails the whole conversion.
///
/// # Errors
///
/// Returns [`QtError::Decode`] carrying the byte offset of the offending sequence.
pub fn gbk_to_utf8(bytes: &[u8]) -> Result<String, QtError> {
    let mut decoder = GBK.new_decoder_without_bom_handling();
    let capacity = decoder
        .max_utf8_buffer_length_without_replacement(bytes.len())
        .ok_or_else(|| QtError::Decode {
            offset: 0,
            message: format!("input of {} bytes is too large", bytes.len()),
        })?;

    let mut out = String::with_capacity(capacity);
    let (result, read) = decoder.decode_to_string_without_replacement(bytes, &mut out, true);

    match result {
        DecoderResult::InputEmpty => Ok(out),
        DecoderResult::Malformed(bad, consumed_after) => {
            let offset = read.saturating_sub(usize::from(bad) + usize::from(consumed_after));
            Err(QtError::Decode {
                offset,
                message: format!("malformed or truncated sequence of {bad} byte(s)"),
            })
        }
        DecoderResult::OutputFull => Err(QtError::Decode {
            offset: read,
            message: "output buffer exhausted".into(),
        }),
    }
}
