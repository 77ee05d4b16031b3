//! Errors produced when encoding categories or characters.
//!
//! All errors from the encoding module use [`EncodeError`]. The sampler
//! reuses it to validate caller-supplied categories and seed characters.

use std::fmt;

/// Errors produced by the encoding module.
///
/// # Variants
///
/// - **UnknownCategory**: The category label is not part of the loaded corpus.
///   *When*: [`category_encoding`](super::category_encoding), or sampling with a label the corpus never saw.
///   *Recovery*: Use one of the corpus categories; the set is fixed at load time.
///
/// - **UnknownChar**: A character is not a member of the alphabet.
///   *When*: [`input_encoding`](super::input_encoding) / [`target_encoding`](super::target_encoding)
///   on unfiltered text, or a sampler seed character outside the alphabet.
///   *Recovery*: Corpus data is pre-filtered by the loader, so this signals
///   caller input; restrict seeds to alphabet members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A category label not present in the corpus.
    UnknownCategory(String),

    /// A character not present in the alphabet.
    UnknownChar(char),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::UnknownCategory(c) => write!(f, "encoding: unknown category {c:?}"),
            EncodeError::UnknownChar(ch) => write!(f, "encoding: character {ch:?} not in alphabet"),
        }
    }
}

impl std::error::Error for EncodeError {}
