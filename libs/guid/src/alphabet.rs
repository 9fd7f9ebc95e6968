//! The URL-safe 64-symbol alphabet used by compact identifiers.
//!
//! `+` and `/` of the standard alphabet are replaced by `-` and `_`, so `-`
//! is a legitimate symbol and must never be stripped blindly.

use crate::error::GuidError;

/// Symbols in value order.
pub const SYMBOLS: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Number of symbols in a compact identifier (22 * 6 = 132 bits).
pub const COMPACT_LEN: usize = 22;

/// Low bits of the last symbol that carry no information.
pub const PADDING_MASK: u8 = 0b1111;

/// Connector a document editor may leave at a wrap point.
///
/// It is also an alphabet symbol, so removal depends on length.
pub const WRAP_CONNECTOR: char = '-';

/// Returns the 6-bit value of `symbol`, or `None` if it is not in the alphabet.
pub fn value_of(symbol: char) -> Option<u8> {
    match symbol {
        'A'..='Z' => Some(symbol as u8 - b'A'),
        'a'..='z' => Some(symbol as u8 - b'a' + 26),
        '0'..='9' => Some(symbol as u8 - b'0' + 52),
        '-' => Some(62),
        '_' => Some(63),
        _ => None,
    }
}

/// Returns true if `symbol` belongs to the compact alphabet.
pub fn contains(symbol: char) -> bool {
    value_of(symbol).is_some()
}

/// Invisible marks inserted by editors: soft hyphens, zero-width marks, BOM.
///
/// Never alphabet symbols and never typed on purpose, so they are dropped
/// wherever they appear.
pub fn is_invisible_artifact(c: char) -> bool {
    matches!(c, '\u{00AD}' | '\u{200B}'..='\u{200D}' | '\u{FEFF}')
}

/// Typographic hyphens and dashes. Dropped only at a wrap point; anywhere
/// else they are typos.
pub fn is_typographic_dash(c: char) -> bool {
    matches!(c, '\u{2010}'..='\u{2015}' | '\u{2212}')
}

/// Checks length first, then membership of every symbol.
pub(crate) fn validate(candidate: &str) -> Result<(), GuidError> {
    let length = candidate.chars().count();
    if length != COMPACT_LEN {
        return Err(GuidError::UnrepairableLength { length });
    }

    if let Some((position, symbol)) = candidate.chars().enumerate().find(|(_, c)| !contains(*c)) {
        return Err(GuidError::InvalidSymbol { symbol, position });
    }

    Ok(())
}
