//! The loaded corpus: categories mapped to their filtered name lists.
//!
//! Validation at construction keeps the invariants simple downstream: every
//! category holds at least one name, and the category order is fixed.

use rand::{rngs::StdRng, Rng};

use super::CorpusError;

/// Categories and their names, immutable once built.
///
/// Categories are sorted by label so their indices (the one-hot positions)
/// do not depend on filesystem iteration order. Categories whose name list
/// is empty are dropped at construction; an all-empty input is
/// [`CorpusError::EmptyCorpus`].
#[derive(Clone, Debug)]
pub struct Corpus {
    entries: Vec<(String, Vec<String>)>,
}

impl Corpus {
    /// Builds a corpus from `(category, names)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::EmptyCorpus`] when no category has at least one
    /// name.
    pub fn new(entries: Vec<(String, Vec<String>)>) -> Result<Self, CorpusError> {
        let mut entries: Vec<_> = entries
            .into_iter()
            .filter(|(_, names)| !names.is_empty())
            .collect();
        if entries.is_empty() {
            return Err(CorpusError::EmptyCorpus);
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(Corpus { entries })
    }

    /// Category labels in index order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.entries.iter().map(|(c, _)| c.as_str()).collect()
    }

    /// Number of categories (the width of every category encoding).
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.entries.len()
    }

    /// Index of `category`, or `None` if the corpus never saw that label.
    #[must_use]
    pub fn category_index(&self, category: &str) -> Option<usize> {
        self.entries.iter().position(|(c, _)| c == category)
    }

    /// Names belonging to `category`, or `None` for an unknown label.
    #[must_use]
    pub fn names(&self, category: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, names)| names.as_slice())
    }

    /// Total number of names across all categories.
    #[must_use]
    pub fn example_count(&self) -> usize {
        self.entries.iter().map(|(_, names)| names.len()).sum()
    }

    /// Picks one training example: a uniform random category, then a uniform
    /// random name within it. Both levels are independent of list sizes.
    #[must_use]
    pub fn random_example(&self, rng: &mut StdRng) -> (&str, &str) {
        let (category, names) = &self.entries[rng.random_range(0..self.entries.len())];
        let name = &names[rng.random_range(0..names.len())];
        (category, name)
    }
}
