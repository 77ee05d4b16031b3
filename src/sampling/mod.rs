//! Sampling: greedy decoding of a new name from a trained cell.
//!
//! Starts from a seed character, repeatedly takes the single
//! highest-probability next character, and stops on EOS or after
//! `max_length` generated characters. Dropout is disabled and no gradients
//! are consulted; parameters are read-only here.

use crate::autograd::ScalarNode;
use crate::corpus::Corpus;
use crate::encoding::{category_encoding, input_encoding, Alphabet, EncodeError};
use crate::model::NameRnn;

/// Index of the largest log-probability.
fn argmax(output: &[f64]) -> usize {
    let mut best = 0;
    let mut best_val = f64::NEG_INFINITY;
    for (i, &v) in output.iter().enumerate() {
        if v > best_val {
            best_val = v;
            best = i;
        }
    }
    best
}

/// Synthesizes one name for `category`, starting from `seed`.
///
/// The result always begins with `seed` and holds at most `max_length + 1`
/// characters. Decoding is greedy, so repeated calls with the same arguments
/// and parameters return the same string.
///
/// # Errors
///
/// - [`EncodeError::UnknownCategory`] when the corpus has no such category.
/// - [`EncodeError::UnknownChar`] when `seed` is outside the alphabet.
pub fn sample(
    model: &NameRnn,
    corpus: &Corpus,
    alphabet: &Alphabet,
    category: &str,
    seed: char,
    max_length: usize,
) -> Result<String, EncodeError> {
    let category_vec = category_encoding(corpus, category)?;
    if !alphabet.contains(seed) {
        return Err(EncodeError::UnknownChar(seed));
    }

    let mut out = String::new();
    out.push(seed);
    let mut hidden = model.init_hidden();
    let mut current = seed;

    for _ in 0..max_length {
        let input = input_encoding(alphabet, &current.to_string())?;
        let (output, new_hidden) = model.step(&category_vec, &input[0], &hidden, None);
        hidden = new_hidden;

        let values: Vec<f64> = output.iter().map(|o| o.data()).collect();
        let next = argmax(&values);
        if next == alphabet.eos_id() {
            break;
        }
        let Some(ch) = alphabet.char_at(next) else {
            break;
        };
        out.push(ch);
        current = ch;
    }

    Ok(out)
}
