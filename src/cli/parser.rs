//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::config::{Config, DEFAULT_INPUT_PATH, DEFAULT_MAX_LINE_LEN, DEFAULT_OUTPUT_PATH};
use clap::Parser;
use std::path::PathBuf;

/// roman-words: evaluate Roman numeral expressions and write the results as
/// English words.
///
/// Each input line holds `<numeral> <operator> <numeral>`, for example
/// `XIV + IX`. Each output line holds the result (`Twenty Three`) or a
/// diagnostic naming the offending line.
#[derive(Parser, Debug)]
#[command(name = "roman-words")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input file of expressions, one per line.
    #[arg(short, long, env = "ROMAN_WORDS_INPUT", default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Output file for results, one line per input line.
    #[arg(short, long, env = "ROMAN_WORDS_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Raw lines longer than this many bytes are truncated.
    #[arg(long, env = "ROMAN_WORDS_MAX_LINE_LEN", default_value_t = DEFAULT_MAX_LINE_LEN)]
    pub max_line_len: usize,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format for the run summary (text, json).
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl Cli {
    /// Builds the run configuration from the parsed arguments.
    #[must_use]
    pub fn config(&self) -> Config {
        Config::new(&self.input, &self.output).with_max_line_len(self.max_line_len)
    }
}
