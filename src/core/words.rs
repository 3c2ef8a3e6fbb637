//! Rendering integers as English words.
//!
//! The magnitude is split into three-digit chunks, least significant first.
//! Each nonzero chunk is spelled out with its place suffix and the chunks
//! are joined most significant first.

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 9] = [
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "Ten", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

// Quintillion is the largest place reachable by a 64-bit magnitude.
const PLACES: [&str; 7] = [
    "",
    "Thousand",
    "Million",
    "Billion",
    "Trillion",
    "Quadrillion",
    "Quintillion",
];

/// Word rendered for exactly zero.
pub const ZERO: &str = "Zero";

/// Marker prefixed to negative values.
pub const NEGATIVE: &str = "Negative";

/// Converts integers to English word phrases.
///
/// The word tables are immutable data owned by the renderer. Every `i64`
/// renders, including `i64::MIN`.
///
/// # Examples
///
/// ```
/// use roman_words::core::WordsRenderer;
///
/// let renderer = WordsRenderer::new();
/// assert_eq!(renderer.render(23), "Twenty Three");
/// assert_eq!(renderer.render(-1), "Negative One");
/// assert_eq!(renderer.render(0), "Zero");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WordsRenderer {
    ones: &'static [&'static str; 10],
    teens: &'static [&'static str; 9],
    tens: &'static [&'static str; 10],
    places: &'static [&'static str; 7],
}

impl Default for WordsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl WordsRenderer {
    /// Creates a renderer over the English word tables.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ones: &ONES,
            teens: &TEENS,
            tens: &TENS,
            places: &PLACES,
        }
    }

    /// Renders `value` as words.
    #[must_use]
    pub fn render(&self, value: i64) -> String {
        if value == 0 {
            return ZERO.to_string();
        }

        let mut magnitude = value.unsigned_abs();
        let mut chunks = Vec::new();
        let mut place = 0;
        while magnitude > 0 {
            #[allow(clippy::cast_possible_truncation)]
            let chunk = (magnitude % 1000) as u16;
            if chunk > 0 {
                chunks.push(self.render_chunk(chunk, place));
            }
            magnitude /= 1000;
            place += 1;
        }

        let mut words = Vec::with_capacity(chunks.len() + 1);
        if value < 0 {
            words.push(NEGATIVE.to_string());
        }
        words.extend(chunks.into_iter().rev());
        words.join(" ")
    }

    /// Spells out one nonzero chunk (`1..=999`) with its place suffix.
    fn render_chunk(&self, chunk: u16, place: usize) -> String {
        let mut parts: Vec<&str> = Vec::new();

        let hundreds = usize::from(chunk / 100);
        if hundreds > 0 {
            parts.push(self.ones[hundreds]);
            parts.push("Hundred");
        }

        let remainder = usize::from(chunk % 100);
        if (11..=19).contains(&remainder) {
            parts.push(self.teens[remainder - 11]);
        } else {
            let (tens, ones) = (remainder / 10, remainder % 10);
            if tens > 0 {
                parts.push(self.tens[tens]);
            }
            if ones > 0 {
                parts.push(self.ones[ones]);
            }
        }

        if place > 0 {
            parts.push(self.places[place]);
        }

        parts.join(" ")
    }
}

/// Renders `value` with the default renderer.
#[must_use]
pub fn to_words(value: i64) -> String {
    WordsRenderer::new().render(value)
}
