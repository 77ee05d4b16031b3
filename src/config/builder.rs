//! Build [`Config`] from environment variables.
//!
//! Uses [`env_string`] and [`env_parsed`] to read env vars with a single
//! place for key names (see [`crate::config::constants`]) and typed errors
//! ([`ConfigError`]).

use std::path::PathBuf;

use super::constants::{
    ENV_DATA_DIR, ENV_DROPOUT, ENV_HIDDEN_SIZE, ENV_INIT_STD, ENV_LEARNING_RATE, ENV_LOG_EVERY,
    ENV_MAX_LENGTH, ENV_NUM_ITERATIONS, ENV_PLOT_EVERY, ENV_PREFIX, ENV_SAMPLE_SEEDS, ENV_SEED,
};
use super::Config;
use super::ConfigError;

/// Returns the full environment variable key for a given suffix
/// (e.g. `SEED` → `NAMEGEN_SEED`).
#[must_use]
pub fn env_key(suffix: &str) -> String {
    format!("{ENV_PREFIX}{suffix}")
}

/// Reads an environment variable as a string.
///
/// Returns `Some(value)` if the variable is set and valid UTF-8, `None` if
/// unset. Returns `Err(ConfigError::EnvVar)` if set but unreadable (e.g. not
/// Unicode).
pub fn env_string(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(s) => Ok(Some(s)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar {
            key: key.to_string(),
            message: e.to_string(),
        }),
    }
}

/// Reads an environment variable and parses it into type `T`.
///
/// Returns `Ok(Some(value))` if set and parse succeeds, `Ok(None)` if unset,
/// and `Err(ConfigError::Parse)` if set but parsing fails.
pub fn env_parsed<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let s = match std::env::var(key) {
        Ok(s) => s,
        Err(std::env::VarError::NotPresent) => return Ok(None),
        Err(e) => {
            return Err(ConfigError::EnvVar {
                key: key.to_string(),
                message: e.to_string(),
            })
        }
    };
    match s.parse() {
        Ok(t) => Ok(Some(t)),
        Err(e) => Err(ConfigError::Parse {
            key: key.to_string(),
            value: s,
            message: e.to_string(),
        }),
    }
}

/// Builds [`Config`] from environment variables, falling back to
/// [`Config::default`] for unset values.
///
/// Returns [`ConfigError`] if any *set* variable fails to parse
/// (e.g. `NAMEGEN_SEED=abc`). Key names live in the `constants` submodule.
pub fn from_env() -> Result<Config, ConfigError> {
    let default = Config::default();

    let seed = env_parsed::<u64>(&env_key(ENV_SEED))?.unwrap_or(default.seed);
    let data_dir = env_string(&env_key(ENV_DATA_DIR))?
        .map(PathBuf::from)
        .unwrap_or_else(|| default.data_dir.clone());
    let hidden_size =
        env_parsed::<usize>(&env_key(ENV_HIDDEN_SIZE))?.unwrap_or(default.hidden_size);
    let init_std = env_parsed::<f64>(&env_key(ENV_INIT_STD))?.unwrap_or(default.init_std);
    let learning_rate =
        env_parsed::<f64>(&env_key(ENV_LEARNING_RATE))?.unwrap_or(default.learning_rate);
    let dropout = env_parsed::<f64>(&env_key(ENV_DROPOUT))?.unwrap_or(default.dropout);
    let num_iterations =
        env_parsed::<usize>(&env_key(ENV_NUM_ITERATIONS))?.unwrap_or(default.num_iterations);
    let log_every = env_parsed::<usize>(&env_key(ENV_LOG_EVERY))?.unwrap_or(default.log_every);
    let plot_every = env_parsed::<usize>(&env_key(ENV_PLOT_EVERY))?.unwrap_or(default.plot_every);
    let max_length = env_parsed::<usize>(&env_key(ENV_MAX_LENGTH))?.unwrap_or(default.max_length);
    let sample_seeds =
        env_string(&env_key(ENV_SAMPLE_SEEDS))?.unwrap_or_else(|| default.sample_seeds.clone());

    Ok(Config {
        seed,
        data_dir,
        hidden_size,
        init_std,
        learning_rate,
        dropout,
        num_iterations,
        log_every,
        plot_every,
        max_length,
        sample_seeds,
    })
}
