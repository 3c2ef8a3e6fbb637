//! Run configuration.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default input file, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "Input.txt";

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "Output.txt";

/// Default bound on a raw line, in bytes.
pub const DEFAULT_MAX_LINE_LEN: usize = 255;

/// Locations and limits for one batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Source file of expressions.
    pub input_path: PathBuf,
    /// Destination file for results.
    pub output_path: PathBuf,
    /// Raw lines longer than this are truncated.
    pub max_line_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }
}

impl Config {
    /// Creates a configuration for the given file pair.
    #[must_use]
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    /// Sets the raw line bound.
    #[must_use]
    pub const fn with_max_line_len(mut self, max_line_len: usize) -> Self {
        self.max_line_len = max_line_len;
        self
    }

    /// Checks the configuration before a run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `max_line_len` is zero or both paths
    /// resolve to the same file, however they are spelled.
    pub fn validate(&self) -> Result<()> {
        if self.max_line_len == 0 {
            return Err(Error::Config {
                message: "max_line_len must be > 0".to_string(),
            });
        }
        if self.input_path == self.output_path
            || is_same_file(&self.input_path, &self.output_path)
        {
            return Err(Error::Config {
                message: format!(
                    "input and output are the same file: {}",
                    self.input_path.display()
                ),
            });
        }
        Ok(())
    }
}

/// Returns `true` if both paths name one existing file.
///
/// Symlinks, `..` segments and hard links all resolve to the same file.
/// A path that does not exist yet never matches.
fn is_same_file(a: &Path, b: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        match (fs::metadata(a), fs::metadata(b)) {
            (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
            _ => false,
        }
    }
    #[cfg(not(unix))]
    {
        match (fs::canonicalize(a), fs::canonicalize(b)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}
