//! Roman numeral validation, decoding and encoding.
//!
//! Decoding is permissive: any string over `{I, V, X, L, C, D, M}` is
//! accepted, case-insensitively. A symbol immediately followed by a larger
//! one is subtracted, every other symbol is added. Non-canonical forms such
//! as `IIII` (4) or `IC` (99) decode without complaint.

use crate::error::NumeralError;

/// Canonical encoding table, largest value first.
const ENCODE_TABLE: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Largest value with a canonical Roman form.
pub const MAX_ENCODABLE: i64 = 3999;

/// Returns the value of a single Roman symbol, ignoring case.
#[must_use]
pub const fn symbol_value(symbol: char) -> Option<i64> {
    match symbol.to_ascii_uppercase() {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Returns `true` if every character of `token` is a Roman symbol.
///
/// The empty token is vacuously valid and decodes to 0.
#[must_use]
pub fn is_valid_numeral(token: &str) -> bool {
    validate_numeral(token).is_ok()
}

/// Checks that every character of `token` is a Roman symbol.
///
/// # Errors
///
/// Returns [`NumeralError::InvalidSymbol`] for the first offending character.
pub fn validate_numeral(token: &str) -> Result<(), NumeralError> {
    match token
        .chars()
        .enumerate()
        .find(|&(_, symbol)| symbol_value(symbol).is_none())
    {
        Some((position, symbol)) => Err(NumeralError::InvalidSymbol { symbol, position }),
        None => Ok(()),
    }
}

/// Decodes `token` with the additive/subtractive lookahead rule.
///
/// # Errors
///
/// Returns [`NumeralError::InvalidSymbol`] for the first character outside
/// the symbol set.
///
/// # Examples
///
/// ```
/// use roman_words::core::decode;
///
/// assert_eq!(decode("XIV").unwrap(), 14);
/// assert_eq!(decode("iiii").unwrap(), 4);
/// assert!(decode("ABC").is_err());
/// ```
pub fn decode(token: &str) -> Result<i64, NumeralError> {
    let values = token
        .chars()
        .enumerate()
        .map(|(position, symbol)| {
            symbol_value(symbol).ok_or(NumeralError::InvalidSymbol { symbol, position })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut total = 0_i64;
    for (i, &current) in values.iter().enumerate() {
        match values.get(i + 1) {
            Some(&next) if next > current => total -= current,
            _ => total += current,
        }
    }
    Ok(total)
}

/// Encodes `value` in canonical Roman form.
///
/// Returns `None` outside `1..=3999`, where no canonical form exists.
#[must_use]
pub fn encode(value: i64) -> Option<String> {
    if !(1..=MAX_ENCODABLE).contains(&value) {
        return None;
    }
    let mut remaining = value;
    let mut out = String::new();
    for &(amount, symbols) in &ENCODE_TABLE {
        while remaining >= amount {
            out.push_str(symbols);
            remaining -= amount;
        }
    }
    Some(out)
}

/// A token that passed validation, reduced to its decoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RomanNumeral {
    value: i64,
}

impl RomanNumeral {
    /// Validates and decodes `token`.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::InvalidSymbol`] if `token` contains a
    /// character outside the Roman symbol set.
    pub fn parse(token: &str) -> Result<Self, NumeralError> {
        validate_numeral(token)?;
        Ok(Self {
            value: decode(token)?,
        })
    }

    /// Decoded integer value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }
}
