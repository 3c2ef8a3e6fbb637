//! # roman-words
//!
//! Evaluates arithmetic on Roman numerals and spells the results out in
//! English.
//!
//! Each line of the input file holds an expression such as `XIV + IX`. The
//! matching line of the output file receives either the result in words
//! (`Twenty Three`) or a diagnostic naming the offending line.
//!
//! ## Pipeline
//!
//! - **Sanitize**: cut the raw line at its first non-printable byte
//! - **Tokenize**: numeral, operator, numeral
//! - **Decode**: permissive additive/subtractive Roman decoding
//! - **Evaluate**: `+ - * /` with a tagged result, never a sentinel
//! - **Render**: chunked English words with place suffixes

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed for memory-mapped I/O (memmap2)
#![warn(unsafe_code)]

pub mod batch;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod io;

// Re-export commonly used types at crate root
pub use error::{Error, LineError, LineErrorKind, NumeralError, OperationError, Result};

// Re-export pipeline types
pub use crate::core::{LineOutcome, LineProcessor, Operator, RomanNumeral, WordsRenderer};

// Re-export run types
pub use batch::{RunSummary, run};
pub use config::Config;

// Re-export CLI types
pub use cli::{Cli, OutputFormat};
