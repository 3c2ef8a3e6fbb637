//! CLI layer for roman-words.
//!
//! Provides the command-line interface using clap: argument parsing, the
//! batch command, and summary formatting.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::Cli;
