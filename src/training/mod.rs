//! Training: per-example backpropagation-through-time with plain SGD.
//!
//! One example at a time: the cell is stepped across every character of the
//! name with teacher forcing (the true character, not the model's own
//! prediction, feeds each step), the per-step negative log-likelihoods are
//! summed, one backward pass runs through the whole sequence, and every
//! parameter takes one SGD step. The update for an example completes before
//! the next example starts; nothing here shares parameters across examples.

use rand::rngs::StdRng;

use crate::autograd::{ScalarNode, ValueRef};
use crate::config::Config;
use crate::corpus::Corpus;
use crate::encoding::{category_encoding, input_encoding, target_encoding, Alphabet, EncodeError};
use crate::model::NameRnn;

/// Runs one full-sequence update on a single encoded example.
///
/// `inputs` and `targets` must have equal, nonzero length (the encoder
/// guarantees this for any non-empty name). Gradients are taken of the
/// *total* sequence loss (full BPTT, no truncation); the SGD step is
/// `p -= learning_rate * grad` for every parameter, followed by `zero_grad`.
///
/// Returns the final step's log-probabilities and the mean per-character
/// loss, for monitoring.
pub fn train_example(
    model: &NameRnn,
    params: &[ValueRef],
    category: &[f64],
    inputs: &[Vec<f64>],
    targets: &[usize],
    learning_rate: f64,
    rng: &mut StdRng,
) -> (Vec<f64>, f64) {
    assert_eq!(
        inputs.len(),
        targets.len(),
        "train_example: inputs and targets must have equal length"
    );
    assert!(!inputs.is_empty(), "train_example: empty sequence");

    let mut hidden = model.init_hidden();
    let mut total = ValueRef::new(0.0);
    let mut last_output = Vec::new();
    for (input, &target) in inputs.iter().zip(targets.iter()) {
        let (output, new_hidden) = model.step(category, input, &hidden, Some(&mut *rng));
        total = &total + &(-&output[target]);
        last_output = output.iter().map(ValueRef::data).collect();
        hidden = new_hidden;
    }

    total.backward();
    for p in params {
        p.set_data(p.data() - learning_rate * p.grad());
        p.zero_grad();
    }

    let mean_loss = total.data() / inputs.len() as f64;
    (last_output, mean_loss)
}

/// The outer training loop.
///
/// For `config.num_iterations` iterations: draw one (category, name) example
/// uniformly (category first, then name), encode it, and apply
/// [`train_example`]. Every `config.plot_every` iterations the running
/// average loss is pushed onto the returned history and reset; every
/// `config.log_every` iterations a progress line is logged. Both are
/// observability only.
///
/// # Errors
///
/// Returns [`EncodeError`] if an example fails to encode. The loader filters
/// corpus text to the alphabet, so this indicates a corpus/alphabet mismatch.
pub fn train(
    model: &NameRnn,
    corpus: &Corpus,
    alphabet: &Alphabet,
    config: &Config,
    rng: &mut StdRng,
) -> Result<Vec<f64>, EncodeError> {
    let params = model.params();
    let mut history = Vec::new();
    let mut running = 0.0;

    for iteration in 1..=config.num_iterations {
        let (category, name) = corpus.random_example(rng);
        let category_vec = category_encoding(corpus, category)?;
        let inputs = input_encoding(alphabet, name)?;
        let targets = target_encoding(alphabet, name)?;

        let (_, loss) = train_example(
            model,
            &params,
            &category_vec,
            &inputs,
            &targets,
            config.learning_rate,
            rng,
        );
        running += loss;

        if iteration % config.log_every == 0 {
            log::info!(
                "iteration {iteration} / {} | loss {loss:.4}",
                config.num_iterations
            );
        }
        if iteration % config.plot_every == 0 {
            history.push(running / config.plot_every as f64);
            running = 0.0;
        }
    }

    Ok(history)
}
