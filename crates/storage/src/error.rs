//! Storage error types.

use std::path::PathBuf;

/// Errors from query runners and file stores.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StorageError {
    /// No runner is registered under the alias.
    #[error("unknown database alias: {alias}")]
    UnknownAlias {
        /// The alias that was looked up.
        alias: String,
    },

    /// The backend rejected or failed a statement.
    #[error("query failed: {0}")]
    Query(String),

    /// A row could not be decoded into the requested type.
    #[error("row decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// An upload name has no usable file-name component.
    #[error("invalid upload name: {name:?}")]
    InvalidName {
        /// The rejected name.
        name: String,
    },

    /// A filesystem operation failed.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// The path being accessed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
