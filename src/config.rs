//! Generator configuration.
//!
//! Values are fixed for the life of the process; callers build one
//! [`GeneratorConfig`] and pass it to every attempt.

use crate::category::{CategoryDefinition, default_categories};

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 128;
pub const DEFAULT_LENGTH: usize = 12;

/// Upper bound on candidate draws for a single attempt.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

pub const DEFAULT_LENGTH_ENV: &str = "PWD_GEN_DEFAULT_LENGTH";
pub const MAX_ATTEMPTS_ENV: &str = "PWD_GEN_MAX_ATTEMPTS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub min_length: usize,
    pub max_length: usize,
    /// Suggested to the user when asking for a length.
    pub default_length: usize,
    pub max_attempts: usize,
    /// Category definitions in display order.
    pub categories: Vec<CategoryDefinition>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_length: MIN_LENGTH,
            max_length: MAX_LENGTH,
            default_length: DEFAULT_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            categories: default_categories(),
        }
    }
}

impl GeneratorConfig {
    /// Returns the default configuration with environment overrides applied.
    ///
    /// Priority for each overridable value:
    /// 1. Environment variable (`PWD_GEN_DEFAULT_LENGTH`, `PWD_GEN_MAX_ATTEMPTS`)
    /// 2. Built-in default
    ///
    /// Unparsable or zero values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(length) = env_usize(DEFAULT_LENGTH_ENV) {
            config.default_length = length;
        }
        if let Some(attempts) = env_usize(MAX_ATTEMPTS_ENV) {
            config.max_attempts = attempts;
        }
        config
    }

    pub fn with_categories(mut self, categories: Vec<CategoryDefinition>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

fn env_usize(key: &str) -> Option<usize> {
    let value = std::env::var(key).ok()?;
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Some(n),
        _ => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Ignoring invalid value for {}: {:?}", key, value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment run under #[serial]
        unsafe { std::env::set_var(key, value); }
    }

    fn remove_env(key: &str) {
        // SAFETY: tests touching the environment run under #[serial]
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    fn test_default_values() {
        let config = GeneratorConfig::default();
        assert_eq!(config.min_length, 8);
        assert_eq!(config.max_length, 128);
        assert_eq!(config.default_length, 12);
        assert_eq!(config.max_attempts, 10_000);
        assert_eq!(config.categories.len(), 4);
    }

    #[test]
    #[serial]
    fn test_from_env_without_overrides() {
        remove_env(DEFAULT_LENGTH_ENV);
        remove_env(MAX_ATTEMPTS_ENV);

        assert_eq!(GeneratorConfig::from_env(), GeneratorConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_with_overrides() {
        set_env(DEFAULT_LENGTH_ENV, "20");
        set_env(MAX_ATTEMPTS_ENV, " 500 ");

        let config = GeneratorConfig::from_env();
        assert_eq!(config.default_length, 20);
        assert_eq!(config.max_attempts, 500);
        assert_eq!(config.min_length, MIN_LENGTH);
        assert_eq!(config.max_length, MAX_LENGTH);

        remove_env(DEFAULT_LENGTH_ENV);
        remove_env(MAX_ATTEMPTS_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_garbage() {
        set_env(DEFAULT_LENGTH_ENV, "twelve");
        set_env(MAX_ATTEMPTS_ENV, "0");

        let config = GeneratorConfig::from_env();
        assert_eq!(config.default_length, DEFAULT_LENGTH);
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);

        remove_env(DEFAULT_LENGTH_ENV);
        remove_env(MAX_ATTEMPTS_ENV);
    }
}
