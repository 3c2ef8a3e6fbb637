//! Binary entry point for roman-words.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::Parser;
use roman_words::cli::output::{OutputFormat, format_error};
use roman_words::cli::{Cli, execute};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let format = OutputFormat::parse(&cli.format);

    match execute(&cli) {
        Ok(output) => {
            // Handle broken pipe gracefully (e.g., when piped to `head`)
            if let Err(e) = write!(io::stdout(), "{output}")
                && e.kind() != io::ErrorKind::BrokenPipe
            {
                eprintln!("Error writing to stdout: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            let error_output = format_error(&e, format);
            match format {
                // JSON errors go to stdout for programmatic parsing
                OutputFormat::Json => println!("{error_output}"),
                OutputFormat::Text => eprintln!("Error: {error_output}"),
            }
            ExitCode::FAILURE
        }
    }
}
