//! Batch runs over an input/output file pair.
//!
//! Lines are processed strictly in order, one result line per input line.
//! Only failing to open or write a file aborts the run; per-line failures
//! are written inline and counted.

use crate::config::Config;
use crate::core::{LineOutcome, LineProcessor};
use crate::error::{LineErrorKind, Result};
use crate::io::{InputFile, OutputFile};
use serde::Serialize;
use tracing::{debug, info};

/// Counts gathered over one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Input file path.
    pub input: String,
    /// Output file path.
    pub output: String,
    /// Lines read.
    pub lines: usize,
    /// Lines that rendered a word phrase.
    pub rendered: usize,
    /// Lines that produced a diagnostic.
    pub failed: usize,
    /// Diagnostics for malformed lines.
    pub invalid_format: usize,
    /// Diagnostics for bad numerals.
    pub invalid_numeral: usize,
    /// Diagnostics for unsupported operators and failed arithmetic.
    pub invalid_operation: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &LineOutcome) {
        self.lines += 1;
        match outcome.error_kind() {
            None => self.rendered += 1,
            Some(kind) => {
                self.failed += 1;
                match kind {
                    LineErrorKind::InvalidFormat => self.invalid_format += 1,
                    LineErrorKind::InvalidNumeral => self.invalid_numeral += 1,
                    LineErrorKind::InvalidOperation => self.invalid_operation += 1,
                }
            }
        }
    }
}

/// Processes every line of `config.input_path` into `config.output_path`.
///
/// The input is opened first; if it fails, the output file is not touched.
/// Whichever file did open is closed on every return path.
///
/// # Errors
///
/// Returns a configuration error for an invalid [`Config`] and an I/O
/// error if either file cannot be opened or written.
///
/// # Examples
///
/// ```no_run
/// use roman_words::{Config, batch};
///
/// let summary = batch::run(&Config::default()).unwrap();
/// println!("{} lines", summary.lines);
/// ```
pub fn run(config: &Config) -> Result<RunSummary> {
    config.validate()?;

    let input = InputFile::open(&config.input_path)?;
    let mut output = OutputFile::create(&config.output_path)?;
    info!(
        input = input.path(),
        output = output.path(),
        bytes = input.size(),
        mapped = input.is_mapped(),
        "processing started"
    );

    let processor = LineProcessor::new();
    let mut summary = RunSummary {
        input: input.path().to_string(),
        output: output.path().to_string(),
        ..RunSummary::default()
    };

    for (index, raw) in input.lines(config.max_line_len).enumerate() {
        let outcome = processor.process(raw);
        debug!(line_number = index + 1, rendered = outcome.is_rendered(), "line done");
        output.write_line(&outcome.output_line())?;
        summary.record(&outcome);
    }

    let written = output.finish()?;
    info!(
        lines = summary.lines,
        written,
        rendered = summary.rendered,
        failed = summary.failed,
        "processing complete"
    );
    Ok(summary)
}
