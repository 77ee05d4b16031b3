//! Implementations of the autograd traits.
//!
//! One file per implementation: [`scalar`] holds the `f64` node graph.

pub mod scalar;
