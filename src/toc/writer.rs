//! Per-document topic nesting.
//!
//! The writer turns a document's flat heading sequence into nested topic
//! events. Its only state is a stack of the levels of the nodes it has
//! opened and not yet closed.
//!
//! Rules, for a heading at level `L` with a maximum level `M`:
//!
//! 1. The first heading of the document opens the document's root topic
//!    (no anchor) in slot level 1, whatever its literal level.
//! 2. Later headings with `L > M` are dropped without touching the stack.
//! 3. Otherwise every open node with level `>= L` is closed, then a node for
//!    the heading is opened at level `L`.
//!
//! With contiguous levels rule 3 closes `depth - L + 1` nodes. When a heading
//! skips levels (a `###` straight under a `#`) it still closes only nodes
//! that are really open, so the stream stays balanced.

use super::{TocSink, TopicNode};
use crate::parser::Heading;
use std::io;

pub struct TocTreeWriter {
    /// Link target of the document itself, without anchor
    href: String,
    max_level: usize,
    /// Levels of the open nodes, outermost first
    open: Vec<usize>,
    topics: usize,
}

impl TocTreeWriter {
    pub fn new(href: impl Into<String>, max_level: usize) -> Self {
        Self {
            href: href.into(),
            max_level,
            open: Vec::new(),
            topics: 0,
        }
    }

    /// Number of topic nodes currently open for this document.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Feed the next heading of the document.
    pub fn push<S: TocSink + ?Sized>(&mut self, heading: &Heading, sink: &mut S) -> io::Result<()> {
        if self.topics == 0 {
            sink.open(&TopicNode::new(self.href.as_str(), heading.name.as_str()))?;
            self.open.push(1);
            self.topics = 1;
            return Ok(());
        }

        if heading.level > self.max_level {
            tracing::debug!(
                "Skipping level {} heading '{}' (max level {})",
                heading.level,
                heading.name,
                self.max_level
            );
            return Ok(());
        }

        while self.open.last().is_some_and(|&level| level >= heading.level) {
            self.open.pop();
            sink.close()?;
        }

        let href = format!("{}#{}", self.href, heading.anchor);
        sink.open(&TopicNode::new(href, heading.name.as_str()))?;
        self.open.push(heading.level);
        self.topics += 1;
        Ok(())
    }

    /// Close everything still open and return how many topics the document produced.
    pub fn finish<S: TocSink + ?Sized>(mut self, sink: &mut S) -> io::Result<usize> {
        while self.open.pop().is_some() {
            sink.close()?;
        }
        Ok(self.topics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toc::{EventRecorder, TocEvent};

    fn heading(level: usize, name: &str) -> Heading {
        Heading {
            level,
            name: name.to_string(),
            anchor: crate::parser::slugify(name),
        }
    }

    fn run(levels: &[usize], max_level: usize) -> EventRecorder {
        let mut recorder = EventRecorder::new();
        let mut writer = TocTreeWriter::new("contents/doc.html", max_level);
        for (i, level) in levels.iter().enumerate() {
            writer
                .push(&heading(*level, &format!("H{}", i)), &mut recorder)
                .unwrap();
        }
        writer.finish(&mut recorder).unwrap();
        recorder
    }

    /// Render as a compact string: `(` label for open, `)` for close.
    fn shape(recorder: &EventRecorder) -> String {
        recorder
            .events
            .iter()
            .map(|e| match e {
                TocEvent::Open(node) => format!("({}", node.label),
                TocEvent::Close => ")".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_contiguous_levels_close_at_end() {
        let recorder = run(&[1, 2, 3], 3);
        assert_eq!(shape(&recorder), "(H0(H1(H2)))");
        assert_eq!(recorder.closes(), 3);
    }

    #[test]
    fn test_root_topic_has_no_anchor() {
        let recorder = run(&[1, 2], 3);
        match &recorder.events[0] {
            TocEvent::Open(node) => assert_eq!(node.href, "contents/doc.html"),
            other => panic!("unexpected event {:?}", other),
        }
        match &recorder.events[1] {
            TocEvent::Open(node) => assert_eq!(node.href, "contents/doc.html#h1"),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_siblings_and_returns() {
        let recorder = run(&[1, 2, 3, 2, 3, 3, 1], 3);
        assert_eq!(shape(&recorder), "(H0(H1(H2))(H3(H4)(H5)))(H6)");
        assert!(recorder.is_balanced());
    }

    #[test]
    fn test_level_gap_stays_balanced() {
        let recorder = run(&[1, 3], 3);
        assert_eq!(recorder.opens(), 2);
        assert_eq!(recorder.closes(), 2);
        assert_eq!(shape(&recorder), "(H0(H1))");
    }

    #[test]
    fn test_level_gap_then_shallower_heading() {
        let recorder = run(&[1, 3, 3, 2, 1], 3);
        assert_eq!(shape(&recorder), "(H0(H1)(H2)(H3))(H4)");
        assert!(recorder.is_balanced());
    }

    #[test]
    fn test_headings_beyond_max_level_are_invisible() {
        let with_deep = run(&[1, 2, 4, 4, 2], 3);
        assert_eq!(with_deep.opened_labels(), vec!["H0", "H1", "H4"]);
        assert_eq!(shape(&with_deep), "(H0(H1)(H4))");
    }

    #[test]
    fn test_first_heading_ignores_its_level() {
        // Document starting at a deep level still gets a root topic
        let recorder = run(&[5, 2, 2], 3);
        assert_eq!(shape(&recorder), "(H0(H1)(H2))");

        let recorder = run(&[2, 2], 3);
        assert_eq!(shape(&recorder), "(H0(H1))");
    }

    #[test]
    fn test_depth_tracking() {
        let mut recorder = EventRecorder::new();
        let mut writer = TocTreeWriter::new("d.html", 3);
        assert_eq!(writer.depth(), 0);
        writer.push(&heading(1, "A"), &mut recorder).unwrap();
        assert_eq!(writer.depth(), 1);
        writer.push(&heading(2, "B"), &mut recorder).unwrap();
        writer.push(&heading(3, "C"), &mut recorder).unwrap();
        assert_eq!(writer.depth(), 3);
        writer.push(&heading(2, "D"), &mut recorder).unwrap();
        assert_eq!(writer.depth(), 2);
        assert_eq!(writer.finish(&mut recorder).unwrap(), 4);
    }

    #[test]
    fn test_empty_document() {
        let recorder = run(&[], 3);
        assert!(recorder.events.is_empty());
    }

    #[test]
    fn test_any_level_sequence_is_balanced() {
        let sequences: &[&[usize]] = &[
            &[1, 6, 1, 5, 2, 3, 1],
            &[3, 1, 3, 2, 3, 1, 2],
            &[1, 1, 1],
            &[2, 3, 2, 1, 3, 3, 2],
            &[1, 3, 2, 3, 4, 5, 2, 1, 3],
        ];
        for levels in sequences {
            for max_level in 1..=4 {
                let recorder = run(levels, max_level);
                assert!(recorder.is_balanced(), "{:?} max {}", levels, max_level);
            }
        }
    }
}
