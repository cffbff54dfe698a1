//! # tocgen
//!
//! Generates a help-viewer table of contents from a directory of markdown documents.
//!
//! Every document contributes a topic for itself and nested topics for its
//! headings down to a configurable level. Documents are grouped by the
//! `part:` field of their front matter, and the title of the whole table
//! comes from the same field in the reserved `index.md` document.
//!
//! The conversion is streaming: documents are read line by line and the
//! output is written as node open/close events, never as an in-memory tree.
//!
//! ## Example
//!
//! ```rust
//! use tocgen::parser::HeadingScanner;
//! use tocgen::toc::{EventRecorder, TocTreeWriter};
//!
//! let markdown = "# Introduction\nSome content.\n## Background\n#### Too deep\n## Method\n";
//!
//! let mut recorder = EventRecorder::new();
//! let mut writer = TocTreeWriter::new("contents/intro.html", 3);
//! for heading in HeadingScanner::new(markdown.as_bytes()) {
//!     writer.push(&heading.unwrap(), &mut recorder).unwrap();
//! }
//! writer.finish(&mut recorder).unwrap();
//!
//! assert_eq!(recorder.opened_labels(), vec!["Introduction", "Background", "Method"]);
//! assert!(recorder.is_balanced());
//! ```

/// Configuration module for generator settings.
///
/// Loads defaults, `tocgen.toml` or the user config file.
pub mod config;

/// Error types shared by the whole crate.
pub mod error;

/// Full generation runs, from source directory to descriptor file.
pub mod generator;

/// Diagnostic logging setup for the binary.
pub mod logging;

/// Parser module for document front matter and headings.
pub mod parser;

/// Source directory discovery and validation.
pub mod source;

/// Topic tree construction and XML rendering.
pub mod toc;

// Re-export commonly used types for convenience
pub use config::{Config, GeneratorConfig};
pub use error::{Result, TocError};
pub use generator::{GenerationSummary, TocGenerator};
pub use parser::{Heading, HeadingScanner};
pub use source::{DocumentSource, SourceDocument};
