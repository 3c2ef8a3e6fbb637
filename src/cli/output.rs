//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::batch::RunSummary;
use crate::error::{CommandError, Error, Result};
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Column where summary counts start.
const COUNT_COLUMN: usize = 24;

/// Formats a run summary.
///
/// # Errors
///
/// Returns [`CommandError::OutputFormat`] if JSON serialization fails.
pub fn format_summary(summary: &RunSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_summary_text(summary)),
        OutputFormat::Json => Ok(format_json(summary)?),
    }
}

fn format_summary_text(summary: &RunSummary) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "Processing complete. Check {} for results.",
        summary.output
    );
    write_count(&mut output, 2, "Lines:", summary.lines);
    write_count(&mut output, 2, "Rendered:", summary.rendered);
    write_count(&mut output, 2, "Failed:", summary.failed);
    if summary.failed > 0 {
        write_count(&mut output, 4, "Invalid format:", summary.invalid_format);
        write_count(&mut output, 4, "Invalid numeral:", summary.invalid_numeral);
        write_count(&mut output, 4, "Invalid operation:", summary.invalid_operation);
    }
    output
}

fn write_count(output: &mut String, indent: usize, label: &str, count: usize) {
    let width = COUNT_COLUMN - indent;
    let _ = writeln!(output, "{:indent$}{label:<width$}{count}", "");
}

/// Formats a fatal error.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            let message = error.to_string();
            format_json(&ErrorOutput {
                error: message.clone(),
            })
            .unwrap_or(message)
        }
    }
}

/// Formats a value as pretty-printed JSON.
fn format_json<T: Serialize>(value: &T) -> std::result::Result<String, CommandError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IoError;
    use std::collections::BTreeMap;

    fn summary() -> RunSummary {
        RunSummary {
            input: "Input.txt".to_string(),
            output: "Output.txt".to_string(),
            lines: 6,
            rendered: 3,
            failed: 3,
            invalid_format: 1,
            invalid_numeral: 1,
            invalid_operation: 1,
        }
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("unknown"), OutputFormat::Text);
    }

    #[test]
    fn test_format_summary_text() {
        let text = format_summary(&summary(), OutputFormat::Text).unwrap();
        assert!(text.starts_with("Processing complete. Check Output.txt for results.\n"));
        assert!(text.contains("  Lines:                6\n"));
        assert!(text.contains("    Invalid numeral:    1\n"));
        assert!(text.contains("    Invalid operation:  1\n"));
    }

    #[test]
    fn test_format_summary_text_counts_aligned() {
        let text = format_summary(&summary(), OutputFormat::Text).unwrap();
        let count_lines: Vec<&str> = text.lines().skip(1).collect();
        assert_eq!(count_lines.len(), 6);
        for line in count_lines {
            let (label, count) = line.split_at(COUNT_COLUMN);
            assert!(label.ends_with(' '), "{line:?}");
            assert!(count.chars().all(|c| c.is_ascii_digit()), "{line:?}");
        }
    }

    #[test]
    fn test_format_summary_text_no_failures() {
        let clean = RunSummary {
            failed: 0,
            invalid_format: 0,
            invalid_numeral: 0,
            invalid_operation: 0,
            rendered: 6,
            ..summary()
        };
        let text = format_summary(&clean, OutputFormat::Text).unwrap();
        assert!(!text.contains("Invalid"));
    }

    #[test]
    fn test_format_summary_json() {
        let json = format_summary(&summary(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["lines"], 6);
        assert_eq!(value["invalid_operation"], 1);
        assert_eq!(value["output"], "Output.txt");
    }

    #[test]
    fn test_format_error() {
        let err: Error = IoError::OpenFailed {
            path: "Input.txt".to_string(),
            reason: "not found".to_string(),
        }
        .into();
        assert!(format_error(&err, OutputFormat::Text).contains("Input.txt"));

        let json = format_error(&err, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["error"].as_str().unwrap().contains("failed to open"));
    }

    #[test]
    fn test_format_json_failure_is_command_error() {
        let mut bad = BTreeMap::new();
        bad.insert(vec![1_u8], 1);
        let err = format_json(&bad).unwrap_err();
        assert!(matches!(err, CommandError::OutputFormat(_)));

        let err: Error = err.into();
        assert!(err.to_string().starts_with("command error: output format error"));
    }
}
