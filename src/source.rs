//! Source directory discovery.
//!
//! Collects the documents a table of contents is generated from: regular
//! files directly inside the source directory that carry the configured
//! extension, minus anything named like the reserved title document,
//! sorted by file name.

use crate::config::GeneratorConfig;
use crate::error::{Result, TocError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A document queued for processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub path: PathBuf,
    /// File name without extension; names the rendered page
    pub stem: String,
}

impl SourceDocument {
    /// File name as found on disk.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Validated view of a source directory.
#[derive(Debug, Clone)]
pub struct DocumentSource {
    /// Ordered documents to include
    pub documents: Vec<SourceDocument>,
    /// Reserved document the descriptor title is read from
    pub index: PathBuf,
}

impl DocumentSource {
    /// Scan `dir` and check it can produce a table of contents.
    ///
    /// # Errors
    ///
    /// - `TocError::NotADirectory` if `dir` is not a directory
    /// - `TocError::NoInputFiles` if no qualifying document exists
    /// - `TocError::MissingIndex` if the reserved title document is absent
    /// - `TocError::Io` if the directory cannot be listed
    pub fn discover(dir: &Path, config: &GeneratorConfig) -> Result<Self> {
        if !dir.is_dir() {
            return Err(TocError::NotADirectory {
                path: dir.to_path_buf(),
            });
        }

        let documents = list_documents(dir, config)?;
        if documents.is_empty() {
            return Err(TocError::NoInputFiles {
                path: dir.to_path_buf(),
            });
        }

        let index = dir.join(config.index_file_name());
        if !index.exists() {
            return Err(TocError::MissingIndex {
                path: dir.to_path_buf(),
                file: config.index_file_name(),
            });
        }

        Ok(Self { documents, index })
    }
}

fn list_documents(dir: &Path, config: &GeneratorConfig) -> Result<Vec<SourceDocument>> {
    let suffix = format!(".{}", config.extension);
    let mut documents = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| TocError::Io(e.into()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if name.starts_with(&config.index_name) {
            continue;
        }
        if let Some(stem) = name.strip_suffix(&suffix) {
            documents.push(SourceDocument {
                path: path.to_path_buf(),
                stem: stem.to_string(),
            });
        }
    }

    Ok(documents)
}
