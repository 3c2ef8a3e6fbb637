//! Line sanitizing.
//!
//! A raw line is cut at the first byte that is neither printable ASCII nor
//! ASCII whitespace. Everything from that byte onward is dropped.

/// Returns `true` if the byte survives sanitizing.
///
/// Printable is `0x20..=0x7E`. Whitespace is space, tab, line feed,
/// vertical tab, form feed and carriage return.
#[must_use]
pub const fn is_retained(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7E | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Truncates `raw` at its first non-printable, non-whitespace byte.
///
/// Never fails. Non-ASCII bytes terminate the line, so the result is
/// always plain ASCII.
///
/// # Examples
///
/// ```
/// use roman_words::core::sanitize;
///
/// assert_eq!(sanitize(b"XIV + IX\n"), "XIV + IX\n");
/// assert_eq!(sanitize(b"X + I\x00garbage"), "X + I");
/// ```
#[must_use]
pub fn sanitize(raw: &[u8]) -> String {
    let end = raw
        .iter()
        .position(|&b| !is_retained(b))
        .unwrap_or(raw.len());
    // Every retained byte is ASCII.
    raw[..end].iter().map(|&b| char::from(b)).collect()
}
