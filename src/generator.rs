//! End-to-end table-of-contents generation.
//!
//! Ties the pieces together for one run: discover documents, read the
//! title from the reserved document, then stream every document through
//! the group aggregator and tree writer into the XML emitter.

use crate::config::GeneratorConfig;
use crate::error::{Result, TocError};
use crate::parser;
use crate::source::DocumentSource;
use crate::toc::{GroupAggregator, TocTreeWriter, XmlEmitter};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Where the descriptor was written; `None` when streamed to a writer
    pub output: Option<PathBuf>,
    pub documents: usize,
    pub groups: usize,
    pub topics: usize,
}

pub struct TocGenerator {
    config: GeneratorConfig,
}

impl TocGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generate the descriptor for `source_dir` and write it to the
    /// configured output path.
    ///
    /// The file is assembled next to its destination and only moved into
    /// place once complete, so a failed run never leaves a truncated
    /// descriptor behind. The output directory is created if needed.
    ///
    /// # Errors
    ///
    /// Configuration errors for an unusable source directory, resource
    /// errors for any failed read or write.
    pub fn generate(&self, source_dir: &Path) -> Result<GenerationSummary> {
        let source = DocumentSource::discover(source_dir, &self.config)?;
        let output = self.config.output_path();

        let out_dir = &self.config.output_dir;
        fs::create_dir_all(out_dir).map_err(|e| TocError::DirectoryCreation {
            path: out_dir.clone(),
            source: e,
        })?;

        let mut file =
            NamedTempFile::new_in(out_dir).map_err(|e| TocError::file_write(&output, e))?;
        let mut summary = self.render(&source, BufWriter::new(file.as_file_mut()), &output)?;

        file.persist(&output).map_err(|e| TocError::Persist {
            path: output.clone(),
            source: e.error,
        })?;

        tracing::info!(
            "Wrote {} ({} documents, {} groups, {} topics)",
            output.display(),
            summary.documents,
            summary.groups,
            summary.topics
        );
        summary.output = Some(output);
        Ok(summary)
    }

    /// Generate the descriptor for `source_dir` into an arbitrary writer.
    ///
    /// # Errors
    ///
    /// Same as [`TocGenerator::generate`].
    pub fn generate_to<W: Write>(&self, source_dir: &Path, out: W) -> Result<GenerationSummary> {
        let source = DocumentSource::discover(source_dir, &self.config)?;
        self.render(&source, out, Path::new("<output>"))
    }

    fn render<W: Write>(
        &self,
        source: &DocumentSource,
        out: W,
        target: &Path,
    ) -> Result<GenerationSummary> {
        let write_err = |e: std::io::Error| TocError::file_write(target, e);

        let title = parser::group_key_of(&source.index, &self.config)?;
        let mut emitter = XmlEmitter::new(out);
        emitter
            .start_document(&self.config.href(&self.config.index_name), &title)
            .map_err(write_err)?;

        let mut groups = GroupAggregator::new();
        let mut topics = 0;

        for document in &source.documents {
            let key = parser::group_key_of(&document.path, &self.config)?;
            let href = self.config.href(&document.stem);
            groups.enter(&key, &href, &mut emitter).map_err(write_err)?;

            tracing::info!("Processing file {}", document.file_name());
            let mut writer = TocTreeWriter::new(href, self.config.max_level);
            for heading in parser::scan_file(&document.path)? {
                let heading = heading.map_err(|e| TocError::file_read(&document.path, e))?;
                writer.push(&heading, &mut emitter).map_err(write_err)?;
            }
            topics += writer.finish(&mut emitter).map_err(write_err)?;
        }

        let groups = groups.finish(&mut emitter).map_err(write_err)?;
        emitter.end_document().map_err(write_err)?;

        Ok(GenerationSummary {
            output: None,
            documents: source.documents.len(),
            groups,
            topics,
        })
    }
}
