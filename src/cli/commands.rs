//! CLI command implementations.

use crate::batch;
use crate::cli::output::{OutputFormat, format_summary};
use crate::cli::parser::Cli;
use crate::error::Result;

/// Executes the CLI command.
///
/// Runs one batch over the configured file pair and returns the formatted
/// summary. Per-line failures are part of a successful run.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or either file cannot
/// be opened or written, or the summary cannot be serialized.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);
    let summary = batch::run(&cli.config())?;
    format_summary(&summary, format)
}
