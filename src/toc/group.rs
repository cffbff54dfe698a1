//! Outer grouping of documents by their front-matter key.
//!
//! Grouping is by contiguity: a group opens whenever a document's key
//! differs from the previous document's key, and a closed group is never
//! reopened. Input sorted by key therefore yields one group per key, but
//! unsorted input can yield several groups with the same label.

use super::{TocSink, TopicNode};
use std::io;

#[derive(Debug, Default)]
pub struct GroupAggregator {
    /// Key of the open group, if any
    current: Option<String>,
    groups: usize,
}

impl GroupAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Announce the next document.
    ///
    /// Opens a new group (closing the previous one) when `key` differs from
    /// the previous document's key. The empty string is an ordinary key.
    /// `href` is the link target of the document, used for a newly opened
    /// group. Returns whether a group was opened.
    pub fn enter<S: TocSink + ?Sized>(
        &mut self,
        key: &str,
        href: &str,
        sink: &mut S,
    ) -> io::Result<bool> {
        if self.current.as_deref() == Some(key) {
            return Ok(false);
        }

        if self.current.take().is_some() {
            sink.close()?;
        }

        tracing::debug!("Opening group '{}'", key);
        sink.open(&TopicNode::new(href, key))?;
        self.current = Some(key.to_string());
        self.groups += 1;
        Ok(true)
    }

    /// Close the last group, if one is open, and return how many groups were opened.
    pub fn finish<S: TocSink + ?Sized>(mut self, sink: &mut S) -> io::Result<usize> {
        if self.current.take().is_some() {
            sink.close()?;
        }
        Ok(self.groups)
    }
}
