//! The recurrent cell: category + character + hidden state in, next-character
//! log-probabilities and a new hidden state out.
//!
//! Three linear transforms over autograd nodes, composed per character step.
//! Parameters are a plain struct of weight matrices and bias vectors; the
//! transition is a pure function of them, so training mutates parameters in
//! place and sampling reads them without any mode flag on the struct itself.
//! Dropout is driven by whether the caller passes an RNG.

use rand::rngs::StdRng;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::autograd::{Exp, Log, ScalarNode, ValueRef};

/// Matrix-vector multiply with bias: one dot product per row of `w`, plus `b`.
#[must_use]
pub fn linear(x: &[ValueRef], w: &[Vec<ValueRef>], b: &[ValueRef]) -> Vec<ValueRef> {
    w.iter()
        .zip(b.iter())
        .map(|(row, bias)| {
            let mut sum = bias.clone();
            for (wi, xi) in row.iter().zip(x.iter()) {
                sum = &sum + &(wi * xi);
            }
            sum
        })
        .collect()
}

/// Logits to log-probabilities: `x_i - max - ln(sum(exp(x_j - max)))`.
/// The max shift keeps the exponentials in range; exponentiating the result
/// gives a distribution summing to 1.
#[must_use]
pub fn log_softmax(logits: &[ValueRef]) -> Vec<ValueRef> {
    let max_val = logits
        .iter()
        .map(ValueRef::data)
        .fold(f64::NEG_INFINITY, f64::max);
    let max_v = ValueRef::new(max_val);

    let shifted: Vec<ValueRef> = logits.iter().map(|l| l - &max_v).collect();
    let mut total = ValueRef::new(0.0);
    for s in &shifted {
        total = &total + &s.exp();
    }
    let log_total = (&total).log();
    shifted.iter().map(|s| s - &log_total).collect()
}

/// Inverted dropout: each element is zeroed with probability `rate`, kept
/// elements are scaled by `1/(1-rate)` so the expected activation is
/// unchanged. Only the training path calls this; inference skips it entirely.
#[must_use]
pub fn dropout(x: &[ValueRef], rate: f64, rng: &mut StdRng) -> Vec<ValueRef> {
    if rate == 0.0 {
        return x.to_vec();
    }
    let keep = ValueRef::new(1.0 / (1.0 - rate));
    let drop = ValueRef::new(0.0);
    x.iter()
        .map(|xi| {
            if rng.random::<f64>() < rate {
                xi * &drop
            } else {
                xi * &keep
            }
        })
        .collect()
}

/// Parameters of the name-generating recurrent cell.
///
/// `w_*` rows are output-major (`[out][in]`), matching [`linear`]. Weights
/// start Gaussian(0, `init_std`), biases at zero. Use [`NameRnn::params`] for
/// the flat list the optimizer walks.
pub struct NameRnn {
    w_i2h: Vec<Vec<ValueRef>>,
    b_i2h: Vec<ValueRef>,
    w_i2o: Vec<Vec<ValueRef>>,
    b_i2o: Vec<ValueRef>,
    w_o2o: Vec<Vec<ValueRef>>,
    b_o2o: Vec<ValueRef>,
    hidden_size: usize,
    dropout_rate: f64,
}

impl NameRnn {
    /// Builds a cell for `category_count` categories and an alphabet of
    /// `alphabet_size` symbols (EOS included), with a hidden state of
    /// `hidden_size`.
    #[must_use]
    pub fn new(
        category_count: usize,
        alphabet_size: usize,
        hidden_size: usize,
        dropout_rate: f64,
        init_std: f64,
        rng: &mut StdRng,
    ) -> Self {
        let normal = Normal::new(0.0, init_std).expect("init_std must be finite and positive");
        let mut matrix = |nout: usize, nin: usize| -> Vec<Vec<ValueRef>> {
            (0..nout)
                .map(|_| {
                    (0..nin)
                        .map(|_| ValueRef::new(normal.sample(rng)))
                        .collect()
                })
                .collect()
        };
        let zeros = |n: usize| -> Vec<ValueRef> { (0..n).map(|_| ValueRef::new(0.0)).collect() };

        let combined = category_count + alphabet_size + hidden_size;
        NameRnn {
            w_i2h: matrix(hidden_size, combined),
            b_i2h: zeros(hidden_size),
            w_i2o: matrix(alphabet_size, combined),
            b_i2o: zeros(alphabet_size),
            w_o2o: matrix(alphabet_size, hidden_size + alphabet_size),
            b_o2o: zeros(alphabet_size),
            hidden_size,
            dropout_rate,
        }
    }

    /// Returns all parameters as a flat list (for the optimizer).
    #[must_use]
    pub fn params(&self) -> Vec<ValueRef> {
        let mut params = Vec::new();
        for row in &self.w_i2h {
            params.extend(row.clone());
        }
        params.extend(self.b_i2h.clone());
        for row in &self.w_i2o {
            params.extend(row.clone());
        }
        params.extend(self.b_i2o.clone());
        for row in &self.w_o2o {
            params.extend(row.clone());
        }
        params.extend(self.b_o2o.clone());
        params
    }

    /// A zero hidden state, created once per sequence.
    #[must_use]
    pub fn init_hidden(&self) -> Vec<ValueRef> {
        (0..self.hidden_size).map(|_| ValueRef::new(0.0)).collect()
    }

    /// One transition step.
    ///
    /// `category` and `input` are plain one-hot vectors (constants for the
    /// step); `hidden` carries the graph from previous steps. Passing
    /// `Some(rng)` enables dropout on the raw output (training); `None` is
    /// the deterministic inference path. Returns `(log-probs, new_hidden)`.
    #[must_use]
    pub fn step(
        &self,
        category: &[f64],
        input: &[f64],
        hidden: &[ValueRef],
        rng: Option<&mut StdRng>,
    ) -> (Vec<ValueRef>, Vec<ValueRef>) {
        let mut combined: Vec<ValueRef> = category
            .iter()
            .chain(input.iter())
            .map(|&v| ValueRef::new(v))
            .collect();
        combined.extend(hidden.iter().cloned());

        let new_hidden = linear(&combined, &self.w_i2h, &self.b_i2h);
        let out_part = linear(&combined, &self.w_i2o, &self.b_i2o);

        let mut joined = new_hidden.clone();
        joined.extend(out_part);
        let raw = linear(&joined, &self.w_o2o, &self.b_o2o);

        let raw = match rng {
            Some(rng) => dropout(&raw, self.dropout_rate, rng),
            None => raw,
        };
        (log_softmax(&raw), new_hidden)
    }
}
