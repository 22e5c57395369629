//! Load/save helpers.
//!
//! Loading never fails: any read error (missing file, permission denied)
//! produces the one-empty-line document and is only logged. Saving writes
//! every line followed by `\n`, so a file that lacked a trailing newline gains
//! one. No line-ending detection or preservation is attempted.

use crate::Document;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read `path` into a document, falling back to a single empty line.
pub fn load(path: &Path) -> Document {
    match std::fs::read(path) {
        Ok(content) => {
            let doc = Document::from_bytes(&content);
            tracing::debug!(target: "io", file=%path.display(), size_bytes=content.len(), line_count=doc.line_count(), "file_read_ok");
            doc
        }
        Err(e) => {
            tracing::debug!(target: "io", file=%path.display(), ?e, "file_read_fallback_empty");
            Document::new()
        }
    }
}

/// Write the document to `path`.
pub fn save(path: &Path, doc: &Document) -> Result<(), DocumentError> {
    let bytes = doc.to_bytes();
    std::fs::write(path, &bytes).map_err(|source| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(target: "io", file=%path.display(), size_bytes=bytes.len(), line_count=doc.line_count(), "file_write_ok");
    Ok(())
}
