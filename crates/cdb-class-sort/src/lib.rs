//! Sorts the class records of a tab-indented class database dump by name.
//!
//! Non-class records and any text between records are dropped. Each kept
//! record is copied byte for byte.

mod error;
mod record;

use std::path::Path;

use tracing::info;

pub use error::ClassSortError;
pub use record::{ClassMap, ClassRecord, collect_classes, render_sorted};

/// Sort the class records of `input` by name.
///
/// # Errors
///
/// See [`collect_classes`].
pub fn sort_classes(input: &str) -> Result<String, ClassSortError> {
    collect_classes(input).map(|classes| render_sorted(&classes))
}

/// Read `input`, sort its classes, and write them to `output`.
///
/// Returns the number of classes written.
///
/// # Errors
///
/// Returns [`ClassSortError::Read`] or [`ClassSortError::Write`] on I/O
/// failure, and the parse errors of [`collect_classes`].
pub fn sort_file(input: &Path, output: &Path) -> Result<usize, ClassSortError> {
    let contents = std::fs::read_to_string(input).map_err(|source| ClassSortError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let classes = collect_classes(&contents)?;
    std::fs::write(output, render_sorted(&classes)).map_err(|source| ClassSortError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    info!(
        input = %input.display(),
        output = %output.display(),
        classes = classes.len(),
        "sorted class records"
    );
    Ok(classes.len())
}
