//! Central place for all configuration constants.
//!
//! Default values and environment variable key names used by the config
//! builder. Keeping them here avoids magic numbers and repeated string
//! literals across the config module.

/// Environment variable prefix (e.g. `NAMEGEN_HIDDEN_SIZE`).
pub(crate) const ENV_PREFIX: &str = "NAMEGEN_";

// --- Env key suffixes (full key = ENV_PREFIX + suffix) ---

pub(crate) const ENV_SEED: &str = "SEED";
pub(crate) const ENV_DATA_DIR: &str = "DATA_DIR";
pub(crate) const ENV_HIDDEN_SIZE: &str = "HIDDEN_SIZE";
pub(crate) const ENV_INIT_STD: &str = "INIT_STD";
pub(crate) const ENV_LEARNING_RATE: &str = "LEARNING_RATE";
pub(crate) const ENV_DROPOUT: &str = "DROPOUT";
pub(crate) const ENV_NUM_ITERATIONS: &str = "NUM_ITERATIONS";
pub(crate) const ENV_LOG_EVERY: &str = "LOG_EVERY";
pub(crate) const ENV_PLOT_EVERY: &str = "PLOT_EVERY";
pub(crate) const ENV_MAX_LENGTH: &str = "MAX_LENGTH";
pub(crate) const ENV_SAMPLE_SEEDS: &str = "SAMPLE_SEEDS";

// --- Default values ---

pub(crate) const DEFAULT_SEED: u64 = 42;
pub(crate) const DEFAULT_DATA_DIR: &str = "data/names";
pub(crate) const DEFAULT_HIDDEN_SIZE: usize = 128;
pub(crate) const DEFAULT_INIT_STD: f64 = 0.08;
pub(crate) const DEFAULT_LEARNING_RATE: f64 = 0.0005;
pub(crate) const DEFAULT_DROPOUT: f64 = 0.1;
pub(crate) const DEFAULT_NUM_ITERATIONS: usize = 100_000;
pub(crate) const DEFAULT_LOG_EVERY: usize = 5_000;
pub(crate) const DEFAULT_PLOT_EVERY: usize = 500;
pub(crate) const DEFAULT_MAX_LENGTH: usize = 20;
pub(crate) const DEFAULT_SAMPLE_SEEDS: &str = "ABC";
