//! XML rendering of node events.
//!
//! Output is one element per line, indented with one tab per nesting
//! level:
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <toc topic="contents/index.html" label="Guide">
//! 	<topic href="contents/a.html" label="Guide">
//! 		<topic href="contents/a.html" label="A">
//! 		</topic>
//! 	</topic>
//! </toc>
//! ```

use super::{TocSink, TopicNode};
use std::borrow::Cow;
use std::io::{self, Write};

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

pub struct XmlEmitter<W: Write> {
    out: W,
    depth: usize,
}

impl<W: Write> XmlEmitter<W> {
    pub fn new(out: W) -> Self {
        Self { out, depth: 0 }
    }

    /// Current indentation depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Write the XML declaration and open the `<toc>` root element.
    pub fn start_document(&mut self, topic: &str, label: &str) -> io::Result<()> {
        self.line(XML_DECLARATION)?;
        self.line(&format!(
            r#"<toc topic="{}" label="{}">"#,
            escape(topic),
            escape(label)
        ))?;
        self.depth += 1;
        Ok(())
    }

    /// Close the root element and flush.
    pub fn end_document(&mut self) -> io::Result<()> {
        self.depth = self.depth.saturating_sub(1);
        self.line("</toc>")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        for _ in 0..self.depth {
            self.out.write_all(b"\t")?;
        }
        self.out.write_all(text.as_bytes())?;
        self.out.write_all(b"\n")
    }
}

impl<W: Write> TocSink for XmlEmitter<W> {
    fn open(&mut self, node: &TopicNode) -> io::Result<()> {
        self.line(&format!(
            r#"<topic href="{}" label="{}">"#,
            escape(&node.href),
            escape(&node.label)
        ))?;
        self.depth += 1;
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.depth = self.depth.saturating_sub(1);
        self.line("</topic>")
    }
}

/// Escape a string for use inside a double-quoted attribute value.
pub fn escape(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}
