//! Reverse of [`compact`](crate::compact): `"1.2K"` → `1200`

use crate::error::{CompactNumberError, CompactResult};
use crate::store::LocaleStore;
use once_cell::sync::Lazy;
use regex::Regex;

/// Signed decimal literal: optional sign, optional integer part and point, digits
static NUMBER_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[+-]?([0-9]*[.])?[0-9]+").expect("number literal regex is valid"));

/// Parse a compact string back into a number using the symbols of `locale`.
///
/// The first numeric literal in `text` is the mantissa; whatever remains,
/// trimmed and lower-cased, must be a tier symbol of the locale (or nothing).
/// A locale the store cannot resolve falls back to `en`.
///
/// # Errors
///
/// - [`CompactNumberError::EmptyInput`] for blank text
/// - [`CompactNumberError::InvalidNumberFormat`] when no numeric literal is present
/// - [`CompactNumberError::UnknownSymbol`] when the suffix is not a tier symbol
pub fn uncompact(store: &LocaleStore, text: &str, locale: &str) -> CompactResult<f64> {
    if text.trim().is_empty() {
        return Err(CompactNumberError::EmptyInput);
    }

    let literal = NUMBER_LITERAL
        .find(text)
        .ok_or(CompactNumberError::InvalidNumberFormat)?;
    let number: f64 = literal
        .as_str()
        .parse()
        .map_err(|_| CompactNumberError::InvalidNumberFormat)?;

    let mut rest = String::with_capacity(text.len() - literal.len());
    rest.push_str(&text[..literal.start()]);
    rest.push_str(&text[literal.end()..]);
    let symbol = rest.trim().to_lowercase();

    if symbol.is_empty() {
        return Ok(number);
    }

    let symbols = store.symbol_map(locale)?;
    let divisor = symbols
        .divisor(&symbol)
        .ok_or(CompactNumberError::UnknownSymbol(symbol))?;

    #[allow(clippy::cast_precision_loss)]
    Ok(number * divisor as f64)
}
