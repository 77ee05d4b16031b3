//! Encoding: category labels and character strings to numeric tensors.
//!
//! This module defines the **alphabet** ([`Alphabet`]), the **error**
//! ([`EncodeError`]), and three pure functions with no shared state:
//! [`category_encoding`] (one-hot over categories), [`input_encoding`]
//! (one-hot row per character), and [`target_encoding`] (next-character
//! indices ending in EOS).

mod alphabet;
mod error;

pub use alphabet::Alphabet;
pub use error::EncodeError;

use crate::corpus::Corpus;

/// One-hot vector of width `width` with `index` set to 1.
fn one_hot(width: usize, index: usize) -> Vec<f64> {
    let mut v = vec![0.0; width];
    v[index] = 1.0;
    v
}

/// Encodes a category label as a one-hot vector of width
/// `corpus.category_count()`.
///
/// # Errors
///
/// Returns [`EncodeError::UnknownCategory`] if the label is not in the corpus.
pub fn category_encoding(corpus: &Corpus, category: &str) -> Result<Vec<f64>, EncodeError> {
    let index = corpus
        .category_index(category)
        .ok_or_else(|| EncodeError::UnknownCategory(category.to_string()))?;
    Ok(one_hot(corpus.category_count(), index))
}

/// Encodes a name as a sequence of one-hot rows, one per character, each of
/// width `alphabet.size()`. The EOS slot is never set in an input row.
///
/// # Errors
///
/// Returns [`EncodeError::UnknownChar`] on the first character outside the
/// alphabet. Loader-filtered corpus data never triggers this; the guard is
/// for caller-supplied text.
pub fn input_encoding(alphabet: &Alphabet, name: &str) -> Result<Vec<Vec<f64>>, EncodeError> {
    name.chars()
        .map(|ch| {
            let index = alphabet
                .index_of(ch)
                .ok_or(EncodeError::UnknownChar(ch))?;
            Ok(one_hot(alphabet.size(), index))
        })
        .collect()
}

/// Encodes the supervision targets for a name: the alphabet index of each
/// character from the second onward, then the EOS index. Character `i` of the
/// input predicts entry `i` here, so the last character predicts EOS.
///
/// # Errors
///
/// Returns [`EncodeError::UnknownChar`] on the first character outside the
/// alphabet.
pub fn target_encoding(alphabet: &Alphabet, name: &str) -> Result<Vec<usize>, EncodeError> {
    let mut targets: Vec<usize> = name
        .chars()
        .skip(1)
        .map(|ch| alphabet.index_of(ch).ok_or(EncodeError::UnknownChar(ch)))
        .collect::<Result<_, _>>()?;
    targets.push(alphabet.eos_id());
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_corpus() -> Corpus {
        Corpus::new(vec![
            ("German".to_string(), vec!["Bauer".to_string()]),
            ("Spanish".to_string(), vec!["Ibarra".to_string()]),
        ])
        .unwrap()
    }

    #[test]
    fn alphabet_indices_are_contiguous_and_stable() {
        let a = Alphabet::new(['a', 'b', 'c']);
        assert_eq!(a.size(), 4);
        assert_eq!(a.eos_id(), 3);
        assert_eq!(a.index_of('a'), Some(0));
        assert_eq!(a.index_of('c'), Some(2));
        assert_eq!(a.char_at(1), Some('b'));
        assert_eq!(a.char_at(3), None, "EOS has no character form");
        assert!(!a.contains('z'));
    }

    #[test]
    fn alphabet_skips_duplicates_first_wins() {
        let a = Alphabet::new(['a', 'b', 'a']);
        assert_eq!(a.size(), 3);
        assert_eq!(a.index_of('b'), Some(1));
    }

    #[test]
    fn default_alphabet_covers_name_characters() {
        let a = Alphabet::default();
        assert_eq!(a.size(), 26 + 26 + 6 + 1);
        for ch in "O'Neill y-Garcia".chars() {
            assert!(a.contains(ch), "{ch:?} should be in the default alphabet");
        }
        assert!(!a.contains('é'));
    }

    #[test]
    fn category_encoding_is_true_one_hot() {
        let corpus = toy_corpus();
        let v = category_encoding(&corpus, "Spanish").unwrap();
        assert_eq!(v.len(), corpus.category_count());
        assert_eq!(v.iter().filter(|&&x| x == 1.0).count(), 1);
        assert_eq!(v.iter().filter(|&&x| x == 0.0).count(), v.len() - 1);
        let index = corpus.category_index("Spanish").unwrap();
        assert_eq!(v[index], 1.0);
    }

    #[test]
    fn category_encoding_unknown_category_errors() {
        let corpus = toy_corpus();
        let result = category_encoding(&corpus, "Klingon");
        assert!(matches!(result, Err(EncodeError::UnknownCategory(_))));
    }

    #[test]
    fn input_encoding_one_row_per_character() {
        let a = Alphabet::new(['a', 'b']);
        let rows = input_encoding(&a, "ab").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec![1.0, 0.0, 0.0]);
        assert_eq!(rows[1], vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn input_encoding_unknown_char_errors() {
        let a = Alphabet::new(['a', 'b']);
        let result = input_encoding(&a, "abc");
        assert_eq!(result, Err(EncodeError::UnknownChar('c')));
    }

    #[test]
    fn target_encoding_shifts_by_one_and_ends_in_eos() {
        let a = Alphabet::new(['a', 'b', 'c']);
        let name = "abc";
        let inputs = input_encoding(&a, name).unwrap();
        let targets = target_encoding(&a, name).unwrap();
        assert_eq!(targets.len(), name.chars().count());
        // First n-1 targets are the input indices shifted one position left.
        for (i, target) in targets.iter().take(targets.len() - 1).enumerate() {
            let next_index = inputs[i + 1]
                .iter()
                .position(|&x| x == 1.0)
                .unwrap();
            assert_eq!(*target, next_index);
        }
        assert_eq!(*targets.last().unwrap(), a.eos_id());
    }

    #[test]
    fn target_encoding_single_char_is_just_eos() {
        let a = Alphabet::new(['a', 'b']);
        assert_eq!(target_encoding(&a, "a").unwrap(), vec![a.eos_id()]);
    }

    #[test]
    fn one_hot_round_trip_reproduces_name() {
        let a = Alphabet::default();
        let name = "O'Neill";
        let rows = input_encoding(&a, name).unwrap();
        let decoded: String = rows
            .iter()
            .map(|row| {
                let index = row.iter().position(|&x| x == 1.0).unwrap();
                a.char_at(index).unwrap()
            })
            .collect();
        assert_eq!(decoded, name);
    }
}
