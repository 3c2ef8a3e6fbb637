//! Expression pipeline for roman-words.
//!
//! Leaf to root: sanitizing, numeral validation and decoding, operator
//! evaluation, word rendering, and the per-line orchestrator.

pub mod line;
pub mod numeral;
pub mod operator;
pub mod sanitize;
pub mod words;

pub use line::{Expression, LineOutcome, LineProcessor, MAX_TOKEN_LEN, tokenize};
pub use numeral::{
    RomanNumeral, decode, encode, is_valid_numeral, symbol_value, validate_numeral,
};
pub use operator::{Operator, evaluate};
pub use sanitize::sanitize;
pub use words::{WordsRenderer, to_words};
