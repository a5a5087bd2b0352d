//! Graph document model and JSON emission.
//!
//! The output format is a flat JSON object with `vertices` and `edges` keys,
//! consumed by downstream community-detection test harnesses. Documents are
//! written once per run and never read back by this crate; `Deserialize` is
//! derived so tests can load generated files.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while serializing or writing a graph document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// File I/O failed while creating or writing the output file.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// JSON serialization failed.
    #[error("failed to serialize graph document: {source}")]
    Serialize {
        /// Error raised by `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

/// A generated graph: vertex labels plus undirected edges between them.
///
/// Vertex labels are the string form of a 1-based index, `"1"` through
/// `"N"`. Edges are unordered label pairs; both generators emit labels (not
/// raw indices) so edge endpoints always match entries of `vertices`.
/// Duplicate edges are permitted.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Vertex labels in ascending index order.
    pub vertices: Vec<String>,
    /// Unordered pairs of vertex labels.
    pub edges: Vec<[String; 2]>,
}

impl GraphDocument {
    /// Builds the label list `"1"`..`"N"` for `vertex_count` vertices.
    pub(crate) fn labels(vertex_count: usize) -> Vec<String> {
        (1..=vertex_count).map(|index| index.to_string()).collect()
    }

    /// Serializes the document as JSON to `writer`.
    ///
    /// # Errors
    /// Returns [`DocumentError::Serialize`] when serialization fails,
    /// including when the underlying writer reports an I/O failure.
    pub fn to_json_writer<W: Write>(&self, writer: W) -> Result<(), DocumentError> {
        serde_json::to_writer(writer, self).map_err(|source| DocumentError::Serialize { source })
    }

    /// Writes the document as JSON to `path`, overwriting any existing file.
    ///
    /// Errors are propagated unmodified; no retry or partial-file cleanup is
    /// attempted.
    ///
    /// # Errors
    /// Returns [`DocumentError`] when the file cannot be created, written, or
    /// flushed.
    pub fn write_json_file(&self, path: &Path) -> Result<(), DocumentError> {
        let file = File::create(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        self.to_json_writer(&mut writer)?;
        writer.flush().map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
