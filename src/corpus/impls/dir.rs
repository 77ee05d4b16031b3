//! [`CorpusLoader`](super::super::CorpusLoader) implementation that reads a
//! directory of per-category text files (UTF-8, one name per line).

use std::fs;
use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use super::super::{Corpus, CorpusError, CorpusLoader};
use crate::encoding::Alphabet;

/// Loads a corpus from a directory: every `*.txt` file becomes one category
/// (label = file stem), every line one candidate name.
///
/// Each line is trimmed, NFKD-decomposed, and filtered to alphabet members.
/// Combining marks fall out of the filter since they are never alphabet
/// members ("Béringer" decomposes to "Be\u{301}ringer" and loads as
/// "Beringer"). Lines that filter to empty are dropped.
#[derive(Clone, Debug)]
pub struct DirLoader<P> {
    dir: P,
    alphabet: Alphabet,
}

impl<P> DirLoader<P>
where
    P: AsRef<Path>,
{
    /// Creates a loader for the given directory and alphabet.
    #[must_use]
    pub fn new(dir: P, alphabet: &Alphabet) -> Self {
        DirLoader {
            dir,
            alphabet: alphabet.clone(),
        }
    }

    /// NFKD-decomposes `line` and keeps only alphabet members.
    fn filter_line(&self, line: &str) -> String {
        line.trim()
            .nfkd()
            .filter(|ch| self.alphabet.contains(*ch))
            .collect()
    }
}

impl<P> CorpusLoader for DirLoader<P>
where
    P: AsRef<Path>,
{
    fn load(&self) -> Result<Corpus, CorpusError> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(self.dir.as_ref())? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("txt") {
                continue;
            }
            // Non-UTF-8 stems cannot name a category; skip such files.
            let Some(category) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let content = fs::read_to_string(&path)?;
            let names: Vec<String> = content
                .lines()
                .map(|line| self.filter_line(line))
                .filter(|name| !name.is_empty())
                .collect();
            entries.push((category.to_string(), names));
        }
        Corpus::new(entries)
    }
}

/// Convenience: load a corpus from a directory using [`DirLoader`].
///
/// # Errors
///
/// - [`CorpusError::Io`] when the directory or a source file cannot be read.
/// - [`CorpusError::EmptyCorpus`] when no category yields a usable name.
pub fn load_from_dir(dir: impl AsRef<Path>, alphabet: &Alphabet) -> Result<Corpus, CorpusError> {
    DirLoader::new(dir, alphabet).load()
}
