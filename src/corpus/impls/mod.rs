//! Implementations of [`CorpusLoader`](super::CorpusLoader).
//!
//! One file per implementation: [`dir`] for a directory of category files.

mod dir;

pub use dir::{load_from_dir, DirLoader};
