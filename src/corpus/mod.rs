//! Corpus loading: per-category name lists from the filesystem.
//!
//! This module defines the **trait** ([`CorpusLoader`]), the **model**
//! ([`Corpus`]), and the **error** ([`CorpusError`]). Implementations live in
//! the `impls` submodule ([`DirLoader`] for a directory of `*.txt` files).
//! The corpus is loaded once, held immutably, and consumed by the encoder.

mod error;
mod impls;
mod types;

pub use error::CorpusError;
pub use impls::{load_from_dir, DirLoader};
pub use types::Corpus;

/// Trait for loading a category corpus.
pub trait CorpusLoader {
    /// Loads the corpus. Returns [`Corpus`] or a [`CorpusError`].
    fn load(&self) -> Result<Corpus, CorpusError>;
}
