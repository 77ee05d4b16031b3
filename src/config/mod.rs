//! Configuration for the model, training, sampling, and paths.
//!
//! Load from environment via [`from_env`] and validate with
//! [`Config::validate`]. Default values and env key names are centralized in
//! the `constants` submodule.

mod builder;
mod constants;
mod error;

use std::path::PathBuf;

use constants::{
    DEFAULT_DATA_DIR, DEFAULT_DROPOUT, DEFAULT_HIDDEN_SIZE, DEFAULT_INIT_STD,
    DEFAULT_LEARNING_RATE, DEFAULT_LOG_EVERY, DEFAULT_MAX_LENGTH, DEFAULT_NUM_ITERATIONS,
    DEFAULT_PLOT_EVERY, DEFAULT_SAMPLE_SEEDS, DEFAULT_SEED,
};

pub use builder::{env_key, env_parsed, env_string, from_env};
pub use error::ConfigError;

/// Central configuration for the namegen pipeline.
///
/// Holds model dimensions, training and sampling parameters, and paths.
/// Use [`from_env`] to build from environment variables and
/// [`Config::validate`] before use.
#[derive(Clone, Debug)]
pub struct Config {
    /// Seed for RNG (reproducibility).
    pub seed: u64,
    /// Directory of per-category name files (one `*.txt` per category).
    pub data_dir: PathBuf,

    /// Hidden state size of the recurrent cell.
    pub hidden_size: usize,
    /// Weight init standard deviation.
    pub init_std: f64,

    /// SGD learning rate.
    pub learning_rate: f64,
    /// Dropout rate on the raw output during training (0 disables).
    pub dropout: f64,
    /// Number of training iterations (one example each).
    pub num_iterations: usize,
    /// Log progress every this many iterations.
    pub log_every: usize,
    /// Average the running loss into the history every this many iterations.
    pub plot_every: usize,

    /// Maximum number of generated characters per sample (seed excluded).
    pub max_length: usize,
    /// Seed letters the binary samples each category with.
    pub sample_seeds: String,
}

impl Default for Config {
    /// Returns default configuration (suitable for tests and fallbacks).
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            hidden_size: DEFAULT_HIDDEN_SIZE,
            init_std: DEFAULT_INIT_STD,
            learning_rate: DEFAULT_LEARNING_RATE,
            dropout: DEFAULT_DROPOUT,
            num_iterations: DEFAULT_NUM_ITERATIONS,
            log_every: DEFAULT_LOG_EVERY,
            plot_every: DEFAULT_PLOT_EVERY,
            max_length: DEFAULT_MAX_LENGTH,
            sample_seeds: DEFAULT_SAMPLE_SEEDS.to_string(),
        }
    }
}

impl Config {
    /// Validates configuration. Returns `Ok(())` if valid, or a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hidden_size == 0 {
            return Err(ConfigError::Validation(
                "hidden_size must be greater than 0".to_string(),
            ));
        }
        if !(self.init_std > 0.0 && self.init_std.is_finite()) {
            return Err(ConfigError::Validation(
                "init_std must be finite and greater than 0".to_string(),
            ));
        }
        if !(self.learning_rate > 0.0 && self.learning_rate.is_finite()) {
            return Err(ConfigError::Validation(
                "learning_rate must be finite and greater than 0".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.dropout) {
            return Err(ConfigError::Validation(
                "dropout must be in [0, 1)".to_string(),
            ));
        }
        if self.num_iterations == 0 {
            return Err(ConfigError::Validation(
                "num_iterations must be greater than 0".to_string(),
            ));
        }
        if self.log_every == 0 {
            return Err(ConfigError::Validation(
                "log_every must be greater than 0".to_string(),
            ));
        }
        if self.plot_every == 0 {
            return Err(ConfigError::Validation(
                "plot_every must be greater than 0".to_string(),
            ));
        }
        if self.max_length == 0 {
            return Err(ConfigError::Validation(
                "max_length must be greater than 0".to_string(),
            ));
        }
        if self.sample_seeds.is_empty() {
            return Err(ConfigError::Validation(
                "sample_seeds must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::constants::{ENV_DROPOUT, ENV_HIDDEN_SIZE, ENV_SEED};
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = Config::default();
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_hidden_size() {
        let cfg = Config {
            hidden_size: 0,
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_dropout_out_of_range() {
        let cfg_one = Config {
            dropout: 1.0,
            ..Config::default()
        };
        assert!(cfg_one.validate().is_err());
        let cfg_neg = Config {
            dropout: -0.1,
            ..Config::default()
        };
        assert!(cfg_neg.validate().is_err());
        let cfg_zero = Config {
            dropout: 0.0,
            ..Config::default()
        };
        assert!(cfg_zero.validate().is_ok(), "0 disables dropout");
    }

    #[test]
    fn validate_rejects_non_positive_learning_rate() {
        let cfg = Config {
            learning_rate: 0.0,
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_iteration_knobs() {
        for cfg in [
            Config {
                num_iterations: 0,
                ..Config::default()
            },
            Config {
                log_every: 0,
                ..Config::default()
            },
            Config {
                plot_every: 0,
                ..Config::default()
            },
            Config {
                max_length: 0,
                ..Config::default()
            },
        ] {
            assert!(cfg.validate().is_err());
        }
    }

    #[test]
    fn validate_rejects_empty_sample_seeds() {
        let cfg = Config {
            sample_seeds: String::new(),
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }

    /// Lock so env tests don't run in parallel and pollute each other.
    static CONFIG_ENV_LOCK: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

    #[test]
    fn from_env_falls_back_to_defaults() {
        let _g = CONFIG_ENV_LOCK
            .get_or_init(|| std::sync::Mutex::new(()))
            .lock()
            .unwrap();
        std::env::remove_var(env_key(ENV_HIDDEN_SIZE));
        std::env::remove_var(env_key(ENV_SEED));
        let cfg = from_env().unwrap();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.hidden_size, Config::default().hidden_size);
    }

    #[test]
    fn from_env_overrides_with_env_vars() {
        let _g = CONFIG_ENV_LOCK
            .get_or_init(|| std::sync::Mutex::new(()))
            .lock()
            .unwrap();
        let key_hidden = env_key(ENV_HIDDEN_SIZE);
        let key_dropout = env_key(ENV_DROPOUT);
        std::env::set_var(&key_hidden, "64");
        std::env::set_var(&key_dropout, "0.2");
        let cfg = from_env().unwrap();
        assert_eq!(cfg.hidden_size, 64);
        assert!((cfg.dropout - 0.2).abs() < 1e-12);
        std::env::remove_var(key_hidden);
        std::env::remove_var(key_dropout);
    }

    #[test]
    fn from_env_returns_error_on_invalid_parse() {
        let _g = CONFIG_ENV_LOCK
            .get_or_init(|| std::sync::Mutex::new(()))
            .lock()
            .unwrap();
        let key = env_key(ENV_SEED);
        std::env::set_var(&key, "not_a_number");
        let res = from_env();
        std::env::remove_var(key);
        assert!(matches!(res, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn config_error_validation_display() {
        let e = ConfigError::Validation("hidden_size must be greater than 0".to_string());
        assert!(e.to_string().contains("config validation"));
        assert!(e.to_string().contains("hidden_size"));
        assert_eq!(e.message(), "hidden_size must be greater than 0");
    }

    #[test]
    fn config_error_parse_display() {
        let e = ConfigError::Parse {
            key: "NAMEGEN_SEED".to_string(),
            value: "abc".to_string(),
            message: "invalid digit".to_string(),
        };
        assert!(e.to_string().contains("NAMEGEN_SEED"));
        assert!(e.to_string().contains("abc"));
        assert_eq!(e.message(), "invalid digit");
    }

    #[test]
    fn env_string_unset_returns_none() {
        let key = "NAMEGEN_UNLIKELY_KEY_12345";
        assert_eq!(env_string(key).unwrap(), None);
    }

    #[test]
    fn env_parsed_unset_returns_none() {
        let key = "NAMEGEN_UNLIKELY_KEY_67890";
        assert_eq!(env_parsed::<u64>(key).unwrap(), None);
    }
}
