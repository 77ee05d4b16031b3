//! Errors produced when loading the category corpus.
//!
//! All errors from the corpus module use [`CorpusError`].

use std::fmt;

/// Errors produced by the corpus loading module.
///
/// # Variants
///
/// - **Io**: Failed to read the data directory or one of its source files
///   (missing directory, permission denied, invalid UTF-8). An I/O failure on
///   any single source aborts the whole load, so the category set is never
///   partially populated.
///   *Recovery*: Ensure the directory exists and every `*.txt` file in it is
///   readable UTF-8; the source error carries details.
///
/// - **EmptyCorpus**: The directory was read successfully but no category
///   ended up with at least one usable name (no `*.txt` files, or every line
///   filtered to empty).
///   *Recovery*: Provide at least one category file with at least one line
///   that survives alphabet filtering.
#[derive(Debug)]
pub enum CorpusError {
    /// I/O error while reading the directory or a category source.
    Io(std::io::Error),

    /// No category with at least one usable name.
    EmptyCorpus,
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusError::Io(e) => write!(f, "corpus io: {e}"),
            CorpusError::EmptyCorpus => write!(f, "corpus: no usable categories"),
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CorpusError::Io(e) => Some(e),
            CorpusError::EmptyCorpus => None,
        }
    }
}

impl From<std::io::Error> for CorpusError {
    fn from(e: std::io::Error) -> Self {
        CorpusError::Io(e)
    }
}
