//! File collaborators for roman-words.
//!
//! Reading the expression file line by line and writing one result line
//! per input line. Both files are released on drop.

pub mod reader;
pub mod writer;

pub use reader::{InputFile, RawLines};
pub use writer::OutputFile;
