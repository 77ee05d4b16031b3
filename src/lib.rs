//! # namegen
//!
//! Conditional character-level name generation: a minimal recurrent cell
//! over a fixed alphabet, trained one example at a time with full
//! backpropagation-through-time, sampled with greedy decoding.
//!
//! Pipeline: [`corpus`] loads per-category name files → [`encoding`] turns
//! categories and characters into one-hot tensors → [`training`] runs the
//! [`model`] cell across each name and applies SGD → [`sampling`] reuses the
//! trained cell to synthesize new names. [`autograd`] is the scalar
//! differentiation engine underneath; [`config`] holds the knobs.

pub mod autograd;
pub mod config;
pub mod corpus;
pub mod encoding;
pub mod model;
pub mod sampling;
pub mod training;
