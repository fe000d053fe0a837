//! The issue document served by `/issues`.
//!
//! The file is read and parsed exactly once, at startup. Nothing about its
//! shape is checked beyond being valid JSON: the records are passed through
//! untouched. Numbers keep their source text, so integers wider than 64 bits
//! and exponents outside the `f64` range survive unchanged. The serialized
//! response body is produced at load time so every request hands out the same
//! bytes.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Bytes;
use serde_json::Value;

/// Errors that prevent the document from loading. All of them are fatal.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Failed to read issue document {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Issue document {} is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Immutable, parsed issue collection.
///
/// Cheap to clone; all clones share the same value and body.
#[derive(Debug, Clone)]
pub struct IssueDocument {
    value: Arc<Value>,
    body: Bytes,
}

impl IssueDocument {
    /// Read and parse the document at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let contents = std::fs::read(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let value: Value =
            serde_json::from_slice(&contents).map_err(|source| DocumentError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self::from_value(value))
    }

    /// Build a document from an already parsed value.
    pub fn from_value(value: Value) -> Self {
        // Serializing a `Value` cannot fail: keys are always strings.
        let body = Bytes::from(value.to_string());
        Self {
            value: Arc::new(value),
            body,
        }
    }

    /// Parsed document as loaded.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// JSON body served to clients.
    pub fn body(&self) -> Bytes {
        self.body.clone()
    }

    /// Number of records when the document is an array.
    pub fn record_count(&self) -> Option<usize> {
        self.value.as_array().map(Vec::len)
    }
}
