//! Input file reading with memory mapping support.
//!
//! The whole input is loaded once, then handed out as raw lines. Large
//! files are memory-mapped instead of read.

// Memory mapping requires unsafe; the map is read-only and dropped with the reader.
#![allow(unsafe_code)]

use crate::error::{IoError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::ops::Deref;
use std::path::Path;
use tracing::warn;

/// Threshold for using memory mapping (1MB).
const MMAP_THRESHOLD: u64 = 1024 * 1024;

/// Maximum input size (1GB).
const MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Loaded input bytes, either owned or mapped.
enum Content {
    Owned(Vec<u8>),
    Mapped(Mmap),
}

impl Deref for Content {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Self::Owned(bytes) => bytes.as_slice(),
            Self::Mapped(mmap) => &mmap[..],
        }
    }
}

/// An opened input file of expressions.
///
/// # Examples
///
/// ```no_run
/// use roman_words::io::InputFile;
///
/// let input = InputFile::open("Input.txt").unwrap();
/// for line in input.lines(255) {
///     println!("{}", String::from_utf8_lossy(line));
/// }
/// ```
pub struct InputFile {
    content: Content,
    path: String,
}

impl InputFile {
    /// Opens and loads the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::OpenFailed`] if the file cannot be opened, and a
    /// read or mapping error if loading fails.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_string_lossy().to_string();

        let file = File::open(path_ref).map_err(|e| IoError::OpenFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        let size = file
            .metadata()
            .map_err(|e| IoError::ReadFailed {
                path: path_str.clone(),
                reason: e.to_string(),
            })?
            .len();

        if size > MAX_FILE_SIZE {
            return Err(IoError::ReadFailed {
                path: path_str,
                reason: format!("file too large: {size} bytes (max: {MAX_FILE_SIZE} bytes)"),
            }
            .into());
        }

        let content = if size >= MMAP_THRESHOLD {
            Content::Mapped(map_file(&file, &path_str)?)
        } else {
            Content::Owned(read_file(file, size, &path_str)?)
        };

        Ok(Self {
            content,
            path: path_str,
        })
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the loaded size in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.content.len()
    }

    /// Returns `true` if the content is memory-mapped.
    #[must_use]
    pub const fn is_mapped(&self) -> bool {
        matches!(self.content, Content::Mapped(_))
    }

    /// Iterates over raw lines, each truncated to `max_line_len` bytes.
    #[must_use]
    pub fn lines(&self, max_line_len: usize) -> RawLines<'_> {
        RawLines {
            rest: &*self.content,
            max_line_len,
            line_number: 0,
        }
    }
}

fn map_file(file: &File, path: &str) -> Result<Mmap> {
    // Safety: the map is read-only and the file is not modified while mapped
    unsafe {
        Mmap::map(file).map_err(|e| {
            IoError::MmapFailed {
                path: path.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

#[allow(clippy::cast_possible_truncation)]
fn read_file(mut file: File, size: u64, path: &str) -> Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(size as usize);
    file.read_to_end(&mut buffer)
        .map_err(|e| IoError::ReadFailed {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
    Ok(buffer)
}

/// Iterator over the raw lines of an [`InputFile`].
///
/// Lines are split on `\n`, and a `\r` before it is dropped. A final line
/// without a terminator is still yielded; an empty file yields nothing.
pub struct RawLines<'a> {
    rest: &'a [u8],
    max_line_len: usize,
    line_number: usize,
}

impl<'a> Iterator for RawLines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        self.line_number += 1;

        let (mut line, rest) = match self.rest.iter().position(|&b| b == b'\n') {
            Some(pos) => (&self.rest[..pos], &self.rest[pos + 1..]),
            None => (self.rest, &self.rest[self.rest.len()..]),
        };
        self.rest = rest;

        if let [head @ .., b'\r'] = line {
            line = head;
        }
        if line.len() > self.max_line_len {
            warn!(
                line_number = self.line_number,
                length = line.len(),
                max = self.max_line_len,
                "line truncated"
            );
            line = &line[..self.max_line_len];
        }
        Some(line)
    }
}
