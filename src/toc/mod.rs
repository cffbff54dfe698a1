//! Table-of-contents construction.
//!
//! Nodes are never collected into a tree. The writer and the aggregator
//! emit a flat stream of open/close events into a [`TocSink`], and the
//! sink decides how to render them. Every open is matched by exactly one
//! close, in reverse order.

pub mod emitter;
pub mod group;
pub mod writer;

pub use emitter::XmlEmitter;
pub use group::GroupAggregator;
pub use writer::TocTreeWriter;

use std::io;

/// One entry of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicNode {
    /// Link target (document file plus optional `#anchor`)
    pub href: String,
    pub label: String,
}

impl TopicNode {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }
}

/// Receiver of node events.
pub trait TocSink {
    /// Open a node nested inside the most recently opened, still open node.
    fn open(&mut self, node: &TopicNode) -> io::Result<()>;

    /// Close the most recently opened node.
    fn close(&mut self) -> io::Result<()>;
}

/// A recorded node event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TocEvent {
    Open(TopicNode),
    Close,
}

/// Sink that keeps every event in memory.
#[derive(Debug, Default)]
pub struct EventRecorder {
    pub events: Vec<TocEvent>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels of opened nodes, in order.
    pub fn opened_labels(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                TocEvent::Open(node) => Some(node.label.as_str()),
                TocEvent::Close => None,
            })
            .collect()
    }

    pub fn opens(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, TocEvent::Open(_)))
            .count()
    }

    pub fn closes(&self) -> usize {
        self.events.len() - self.opens()
    }

    /// True if no prefix of the stream closes more nodes than it opened.
    pub fn is_well_nested(&self) -> bool {
        let mut depth = 0usize;
        for event in &self.events {
            match event {
                TocEvent::Open(_) => depth += 1,
                TocEvent::Close => match depth.checked_sub(1) {
                    Some(d) => depth = d,
                    None => return false,
                },
            }
        }
        true
    }

    /// True if the stream is well nested and leaves nothing open.
    pub fn is_balanced(&self) -> bool {
        self.is_well_nested() && self.opens() == self.closes()
    }
}

impl TocSink for EventRecorder {
    fn open(&mut self, node: &TopicNode) -> io::Result<()> {
        self.events.push(TocEvent::Open(node.clone()));
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.events.push(TocEvent::Close);
        Ok(())
    }
}
