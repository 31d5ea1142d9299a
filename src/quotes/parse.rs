use crate::core::{
    NOT_AVAILABLE, QtError,
    encoding::gbk_to_utf8,
    schema::{STOCK_SCHEMA, field},
    wire::{columns, instrument_code, records, sanitize},
};

use super::model::StockQuote;

/// Replace an unavailable real-time value with its delayed counterpart, when that one is known.
pub fn resolve_fallback(realtime: &mut String, delayed: &str) {
    if realtime == NOT_AVAILABLE && delayed != NOT_AVAILABLE {
        *realtime = delayed.to_string();
    }
}

/// A change is advancing unless its sign is `-`.
pub fn is_advancing(change: &str) -> bool {
    !change.starts_with('-')
}

/// Map one decoded record onto a [`StockQuote`].
///
/// `Ok(None)` when the record carries no instrument code.
///
/// # Errors
///
/// [`QtError::Parse`] when the record is too short for the stock schema.
pub fn parse_stock_record(record: &[u8]) -> Result<Option<StockQuote>, QtError> {
    let ticker = instrument_code(record);
    if ticker.is_empty() {
        return Ok(None);
    }

    let mut row = STOCK_SCHEMA.project(&ticker, &columns(record))?;
    let na = || NOT_AVAILABLE.to_string();

    let mut quote = StockQuote {
        name: row.take(field::NAME),
        ticker,
        last_trade: row.take(field::LAST_TRADE),
        change: row.take(field::CHANGE),
        change_pct: row.take(field::CHANGE_PCT),
        open: row.take(field::OPEN),
        low: row.take(field::LOW),
        high: row.take(field::HIGH),
        low_52: na(),
        high_52: na(),
        volume: row.take(field::VOLUME),
        avg_volume: na(),
        turnover: row.take(field::TURNOVER),
        pe_ratio: row.take(field::PE_RATIO),
        pe_ratio_x: na(),
        dividend: na(),
        yield_pct: na(),
        market_cap: row.take(field::MARKET_CAP),
        market_cap_x: na(),
        advancing: false,
    };

    resolve_fallback(&mut quote.pe_ratio, &quote.pe_ratio_x);
    resolve_fallback(&mut quote.market_cap, &quote.market_cap_x);
    quote.advancing = is_advancing(&quote.change);

    Ok(Some(quote))
}

/// Decode a raw GBK quote body and parse every record, in response order.
///
/// Records without a code and records that are too short are skipped.
///
/// # Errors
///
/// [`QtError::Decode`] if the body is not valid GBK; nothing is parsed in that case.
pub fn parse_quotes(body: &[u8]) -> Result<Vec<StockQuote>, QtError> {
    let text = gbk_to_utf8(&sanitize(body))?;

    let mut stocks = Vec::new();
    for record in records(text.as_bytes()) {
        match parse_stock_record(record) {
            Ok(Some(quote)) => stocks.push(quote),
            Ok(None) => {}
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_e, "skipping malformed quote record");
            }
        }
    }

    Ok(stocks)
}
