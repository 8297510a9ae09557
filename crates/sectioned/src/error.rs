//! Error types for grouped sequence operations.

use std::path::PathBuf;

/// Result type alias for grouped sequence operations.
pub type Result<T> = std::result::Result<T, SequenceError>;

/// Errors that can occur while building, mutating or querying a
/// [`GroupedSequence`](crate::GroupedSequence).
///
/// A failed call never leaves a partial mutation behind: the structure is
/// exactly as it was before the call.
#[derive(Debug, thiserror::Error)]
pub enum SequenceError {
    /// A section index outside the valid range.
    #[error("Section index {index} out of range (section count is {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A row index outside the rows of an existing section.
    #[error("Row index {row} out of range in section {section} (row count is {len})")]
    RowOutOfRange { section: usize, row: usize, len: usize },

    /// A strict lookup by name found no group.
    #[error("No group named '{name}'")]
    NotFound { name: String },

    /// A group name that is already taken.
    #[error("A group named '{name}' already exists")]
    DuplicateName { name: String },

    /// Malformed bulk-load or configuration input.
    #[error("Failed to parse {format} input: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    /// File I/O error while loading.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SequenceError {
    /// Create a section index error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a not-found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create a duplicate name error.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Create a parse error.
    pub fn parse(format: &'static str, message: impl ToString) -> Self {
        Self::Parse {
            format,
            message: message.to_string(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` for either positional bounds failure.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. } | Self::RowOutOfRange { .. }
        )
    }
}
