//! Error types for roman-words operations.
//!
//! Two families live here. Run-level errors ([`Error`], [`IoError`],
//! [`CommandError`]) abort the whole batch. Line-level errors ([`LineError`]
//! and the component errors it wraps) are reported inline in the output file
//! and never stop processing.

use thiserror::Error;

/// Result type alias for roman-words operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Run-level errors that abort a batch.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// I/O-specific errors for the input and output files.
#[derive(Error, Debug)]
pub enum IoError {
    /// A file could not be opened. Always fatal.
    #[error("failed to open file: {path}: {reason}")]
    OpenFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write file.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Memory mapping error.
    #[error("memory mapping failed: {path}: {reason}")]
    MmapFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Output format error.
    #[error("output format error: {0}")]
    OutputFormat(String),
}

/// Errors raised while decoding a Roman numeral.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumeralError {
    /// A character outside `{I, V, X, L, C, D, M}` was found.
    #[error("invalid Roman numeral symbol '{symbol}' at position {position}")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
        /// Character index within the token.
        position: usize,
    },
}

/// Errors raised by operator evaluation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationError {
    /// The operator is not one of `+ - * /`.
    #[error("unsupported operator '{0}'")]
    UnsupportedOperator(char),

    /// Right-hand operand of `/` was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The result does not fit in a signed 64-bit integer.
    #[error("arithmetic overflow")]
    Overflow,
}

/// Per-line failure, recovered and reported inline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// The line does not tokenize into numeral, operator, numeral.
    #[error("invalid input format: {reason}")]
    Format {
        /// What was wrong with the line's shape.
        reason: String,
    },

    /// A numeral token contains a symbol outside the Roman set.
    #[error("invalid Roman numeral: {0}")]
    Numeral(#[from] NumeralError),

    /// The operator is unsupported or the arithmetic failed.
    #[error("invalid operation: {0}")]
    Operation(#[from] OperationError),
}

impl LineError {
    /// Builds a format error with the given reason.
    pub fn format(reason: impl Into<String>) -> Self {
        Self::Format {
            reason: reason.into(),
        }
    }

    /// Returns the diagnostic category for this failure.
    #[must_use]
    pub const fn category(&self) -> LineErrorKind {
        match self {
            Self::Format { .. } => LineErrorKind::InvalidFormat,
            Self::Numeral(_) => LineErrorKind::InvalidNumeral,
            Self::Operation(_) => LineErrorKind::InvalidOperation,
        }
    }
}

/// Diagnostic category of a per-line failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineErrorKind {
    /// Malformed line.
    InvalidFormat,
    /// Bad numeral token.
    InvalidNumeral,
    /// Unsupported operator or failed arithmetic.
    InvalidOperation,
}

impl LineErrorKind {
    /// Prefix written to the output file before the offending line.
    #[must_use]
    pub const fn message_prefix(self) -> &'static str {
        match self {
            Self::InvalidFormat => "Invalid input format in line: ",
            Self::InvalidNumeral => "Invalid Roman numeral in line: ",
            Self::InvalidOperation => "Invalid operation in line: ",
        }
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        Self::OutputFormat(err.to_string())
    }
}
