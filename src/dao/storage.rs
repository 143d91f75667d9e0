use std::path::PathBuf;

use thiserror::Error;

use crate::dao::codec::FormatError;

/// Result alias for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised by the flat-file stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A line of a backing file does not follow its grammar. Aborts the whole load.
    #[error("malformed record in `{}` at line {line}: {source}", .path.display())]
    Format {
        path: PathBuf,
        line: usize,
        #[source]
        source: FormatError,
    },
    /// A record could not be written because one of its fields cannot be encoded.
    #[error("invalid record: {0}")]
    InvalidRecord(#[source] FormatError),
    /// A team with the same name is already registered.
    #[error("team `{0}` already exists")]
    DuplicateName(String),
    /// No team carries the requested name.
    #[error("team `{0}` not found")]
    NotFound(String),
    /// An update callback refused to produce a new record.
    #[error("update rejected: {0}")]
    Rejected(String),
    /// The question bank holds no question.
    #[error("question bank is empty")]
    EmptyBank,
    /// The backing file could not be read or written.
    #[error("failed to access `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Wrap an I/O failure on `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}
