//! Heading records and the line scanner that produces them.

use super::LossyLines;
use regex::Regex;
use std::io::{self, BufRead};
use std::sync::OnceLock;

/// Character that marks a heading line and, repeated, its level.
pub const HEADING_MARKER: char = '#';

/// A heading line reduced to what the table of contents needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Number of leading `#` characters (always at least 1)
    pub level: usize,
    /// Display text with any `{...}` anchor annotation removed
    pub name: String,
    /// In-document fragment identifier
    pub anchor: String,
}

impl Heading {
    /// Parse a single line.
    ///
    /// Returns `None` for lines that do not start with `#` and for lines made
    /// of markers only. Unlike CommonMark, no space is required after the
    /// markers and there is no upper bound on the level.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tocgen::parser::Heading;
    /// let heading = Heading::parse("## Install {#setup}").unwrap();
    /// assert_eq!(heading.level, 2);
    /// assert_eq!(heading.name, "Install");
    /// assert_eq!(heading.anchor, "setup");
    /// assert!(Heading::parse("plain text").is_none());
    /// ```
    pub fn parse(line: &str) -> Option<Self> {
        if !line.starts_with(HEADING_MARKER) {
            return None;
        }

        let body = line.trim_start_matches(HEADING_MARKER);
        if body.is_empty() {
            return None;
        }
        let level = line.len() - body.len();

        let name = match body.find('{') {
            Some(idx) => &body[..idx],
            None => body,
        }
        .trim()
        .to_string();

        let anchor = explicit_anchor(line).unwrap_or_else(|| slugify(&name));

        Some(Self {
            level,
            name,
            anchor,
        })
    }
}

/// Content of the first `{...}` annotation on the line, minus one leading `#`.
fn explicit_anchor(line: &str) -> Option<String> {
    let start = line.find('{')?;
    let end = line.find('}')?;
    if end <= start {
        return None;
    }
    let inner = &line[start + 1..end];
    Some(inner.strip_prefix('#').unwrap_or(inner).to_string())
}

/// Derive an anchor from heading text.
///
/// Lowercases the text and replaces every character outside `[A-Za-z0-9_]`
/// with `-`, one for one. Nothing is collapsed or trimmed, so trailing
/// punctuation leaves a trailing hyphen.
///
/// # Examples
///
/// ```
/// # use tocgen::parser::heading::slugify;
/// assert_eq!(slugify("Getting Started!"), "getting-started-");
/// assert_eq!(slugify("snake_case"), "snake_case");
/// ```
pub fn slugify(text: &str) -> String {
    static NON_WORD: OnceLock<Regex> = OnceLock::new();
    let non_word = NON_WORD.get_or_init(|| Regex::new(r"[^A-Za-z0-9_]").unwrap());

    non_word
        .replace_all(&text.to_lowercase(), "-")
        .into_owned()
}

/// Lazy iterator over the headings of one document.
///
/// Pulls one line at a time from the underlying reader and skips everything
/// that is not a heading. Invalid UTF-8 is decoded leniently, so only read
/// failures surface as errors. To replay a document, open its source again.
pub struct HeadingScanner<R> {
    lines: LossyLines<R>,
}

impl<R: BufRead> HeadingScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: LossyLines::new(reader),
        }
    }
}

impl<R: BufRead> Iterator for HeadingScanner<R> {
    type Item = io::Result<Heading>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            match line {
                Ok(line) => {
                    if let Some(heading) = Heading::parse(&line) {
                        return Some(Ok(heading));
                    }
                }
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }
}
