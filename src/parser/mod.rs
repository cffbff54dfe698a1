//! Line-level parsing of source documents.
//!
//! This module turns a document's raw lines into the two things the
//! table of contents is built from: its grouping key (from front matter)
//! and its stream of headings.
//!
//! Documents are never loaded whole. Each helper opens the file, reads
//! as many lines as it needs and drops the handle when done.

pub mod frontmatter;
pub mod heading;

pub use frontmatter::read_group_key;
pub use heading::{Heading, HeadingScanner, slugify};

use crate::config::GeneratorConfig;
use crate::error::{Result, TocError};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Line iterator that never rejects content.
///
/// Like [`BufRead::lines`], but bytes that are not valid UTF-8 (Latin-1
/// text, for instance) become U+FFFD instead of ending the iteration with
/// an error. Only genuine read failures are reported.
pub struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LossyLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.ends_with(b"\n") {
                    self.buf.pop();
                    if self.buf.ends_with(b"\r") {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Open a document for buffered line-by-line reading.
///
/// # Errors
///
/// Returns `TocError::FileRead` if the file cannot be opened.
pub fn open_reader(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| TocError::file_read(path, e))
}

/// Start a fresh heading pass over a document.
///
/// Every call reopens the file, so a document can be scanned as many
/// times as needed.
///
/// # Errors
///
/// Returns `TocError::FileRead` if the file cannot be opened.
pub fn scan_file(path: &Path) -> Result<HeadingScanner<BufReader<File>>> {
    Ok(HeadingScanner::new(open_reader(path)?))
}

/// Read the grouping key of a document using the configured delimiter and field.
///
/// # Errors
///
/// Returns `TocError::FileRead` if the file cannot be opened or read.
pub fn group_key_of(path: &Path, config: &GeneratorConfig) -> Result<String> {
    let reader = open_reader(path)?;
    read_group_key(
        LossyLines::new(reader),
        &config.front_matter_delimiter,
        &config.group_field,
    )
    .map_err(|e| TocError::file_read(path, e))
}
