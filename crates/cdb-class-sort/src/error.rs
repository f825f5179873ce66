//! Class sort error types.

use std::path::PathBuf;

/// Errors that can occur while sorting a class dump.
#[derive(Debug, thiserror::Error)]
pub enum ClassSortError {
    /// Failed to read the input dump.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Input path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the sorted dump.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A record was still open when another one started or the input ended.
    #[error("record opened at line {line} is never closed")]
    Unterminated {
        /// Line on which the record opened (1-based).
        line: usize,
    },

    /// A class record carries no `"Name"` field.
    #[error("class record opened at line {line} has no name")]
    MissingName {
        /// Line on which the record opened (1-based).
        line: usize,
    },
}
