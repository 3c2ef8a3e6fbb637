//! Per-line orchestration.
//!
//! A raw line is sanitized, split into numeral, operator and numeral, then
//! validated, decoded, evaluated and rendered. The first failing stage
//! decides the diagnostic written for the line.

use crate::core::numeral::RomanNumeral;
use crate::core::operator::evaluate;
use crate::core::sanitize::sanitize;
use crate::core::words::WordsRenderer;
use crate::error::{LineError, LineErrorKind};
use tracing::debug;

/// Longest numeral token accepted.
pub const MAX_TOKEN_LEN: usize = 49;

/// A tokenized line: `<numeral> <operator> <numeral>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expression<'a> {
    /// Left numeral token, not yet validated.
    pub lhs: &'a str,
    /// Operator character, not yet validated.
    pub operator: char,
    /// Right numeral token, not yet validated.
    pub rhs: &'a str,
}

/// Splits a sanitized line into exactly three tokens.
///
/// The first token is the first whitespace-delimited word. The operator is
/// the next non-whitespace character and may touch the second numeral
/// (`X +I`). Anything after the second numeral is rejected.
///
/// # Errors
///
/// Returns [`LineError::Format`] when a token is missing, a numeral is
/// longer than [`MAX_TOKEN_LEN`], or extra tokens follow.
pub fn tokenize(line: &str) -> Result<Expression<'_>, LineError> {
    let (lhs, rest) = next_word(line);
    if lhs.is_empty() {
        return Err(LineError::format("empty line"));
    }

    let rest = rest.trim_start();
    let mut chars = rest.chars();
    let Some(operator) = chars.next() else {
        return Err(LineError::format("missing operator"));
    };

    let (rhs, trailing) = next_word(chars.as_str());
    if rhs.is_empty() {
        return Err(LineError::format("missing second numeral"));
    }
    if !trailing.trim().is_empty() {
        return Err(LineError::format("unexpected trailing input"));
    }
    if let Some(token) = [lhs, rhs].into_iter().find(|t| t.len() > MAX_TOKEN_LEN) {
        return Err(LineError::format(format!(
            "numeral of {} characters exceeds {MAX_TOKEN_LEN}",
            token.len()
        )));
    }

    Ok(Expression { lhs, operator, rhs })
}

/// Skips leading whitespace and returns the next word and the remainder.
fn next_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    s.split_at(end)
}

/// Result of processing one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The expression evaluated and rendered.
    Rendered {
        /// Sanitized line.
        line: String,
        /// Computed value.
        value: i64,
        /// Word phrase for `value`.
        words: String,
    },
    /// The line failed at some stage.
    Failed {
        /// Sanitized line, echoed in the diagnostic.
        line: String,
        /// Why it failed.
        error: LineError,
    },
}

impl LineOutcome {
    /// Text written to the output file for this line, without a newline.
    #[must_use]
    pub fn output_line(&self) -> String {
        match self {
            Self::Rendered { words, .. } => words.clone(),
            Self::Failed { line, error } => {
                format!("{}{line}", error.category().message_prefix())
            }
        }
    }

    /// Returns `true` if the line rendered a phrase.
    #[must_use]
    pub const fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered { .. })
    }

    /// Diagnostic category, if the line failed.
    #[must_use]
    pub const fn error_kind(&self) -> Option<LineErrorKind> {
        match self {
            Self::Rendered { .. } => None,
            Self::Failed { error, .. } => Some(error.category()),
        }
    }
}

/// Drives a line through every pipeline stage.
///
/// Holds no state between lines beyond the immutable word tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineProcessor {
    renderer: WordsRenderer,
}

impl LineProcessor {
    /// Creates a processor with the default English renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            renderer: WordsRenderer::new(),
        }
    }

    /// Processes one raw line.
    ///
    /// Never fails: every error is captured in [`LineOutcome::Failed`].
    ///
    /// # Examples
    ///
    /// ```
    /// use roman_words::core::LineProcessor;
    ///
    /// let processor = LineProcessor::new();
    /// assert_eq!(processor.process(b"XIV + IX").output_line(), "Twenty Three");
    /// assert_eq!(
    ///     processor.process(b"X").output_line(),
    ///     "Invalid input format in line: X"
    /// );
    /// ```
    pub fn process(&self, raw: &[u8]) -> LineOutcome {
        let sanitized = sanitize(raw);
        let line = sanitized.trim_end_matches(['\r', '\n']).to_string();

        match self.evaluate_line(&line) {
            Ok(value) => {
                let words = self.renderer.render(value);
                debug!(line = %line, value, words = %words, "line rendered");
                LineOutcome::Rendered { line, value, words }
            }
            Err(error) => {
                debug!(line = %line, error = %error, "line rejected");
                LineOutcome::Failed { line, error }
            }
        }
    }

    /// Tokenizes, validates, decodes and evaluates a sanitized line.
    ///
    /// # Errors
    ///
    /// Returns the [`LineError`] of the first stage that fails.
    pub fn evaluate_line(&self, line: &str) -> Result<i64, LineError> {
        let expr = tokenize(line)?;
        let lhs = RomanNumeral::parse(expr.lhs)?;
        let rhs = RomanNumeral::parse(expr.rhs)?;
        Ok(evaluate(lhs.value(), rhs.value(), expr.operator)?)
    }
}
