//! Output file writing.

use crate::error::{IoError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// The results file, written one line at a time.
///
/// The file is created or truncated on open and closed on drop. Call
/// [`OutputFile::finish`] to surface flush errors instead of losing them
/// in `Drop`.
pub struct OutputFile {
    writer: BufWriter<File>,
    path: String,
    lines_written: usize,
}

impl OutputFile {
    /// Creates (or truncates) the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::OpenFailed`] if the file cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_string_lossy().to_string();

        let file = File::create(path_ref).map_err(|e| IoError::OpenFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            writer: BufWriter::new(file),
            path: path_str,
            lines_written: 0,
        })
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Writes `line` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::WriteFailed`] if the write fails.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}").map_err(|e| IoError::WriteFailed {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        self.lines_written += 1;
        Ok(())
    }

    /// Flushes buffered output and closes the file, returning the number
    /// of lines written.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::WriteFailed`] if flushing fails.
    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush().map_err(|e| IoError::WriteFailed {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        Ok(self.lines_written)
    }
}
