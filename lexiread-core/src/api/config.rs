//! Configuration API for annotation

use crate::api::Error;

/// Default configuration constants
pub mod defaults {
    /// Largest accepted input in bytes (16 MiB)
    pub const MAX_INPUT_BYTES: u64 = 16 * 1024 * 1024;

    /// Minimum similarity score for suggestions
    pub const MIN_RANK: f64 = 0.3;

    /// Maximum number of suggestions
    pub const MAX_SIMILAR: usize = 10;
}

/// Annotation configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) max_input_bytes: u64,
    pub(crate) threads: Option<usize>, // None = all available threads
    pub(crate) min_rank: f64,
    pub(crate) max_similar: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_input_bytes: defaults::MAX_INPUT_BYTES,
            threads: None,
            min_rank: defaults::MIN_RANK,
            max_similar: defaults::MAX_SIMILAR,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn max_input_bytes(&self) -> u64 {
        self.max_input_bytes
    }

    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    pub fn min_rank(&self) -> f64 {
        self.min_rank
    }

    pub fn max_similar(&self) -> usize {
        self.max_similar
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.max_input_bytes == 0 {
            return Err(Error::Configuration(
                "max_input_bytes must be greater than 0".into(),
            ));
        }

        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(Error::Configuration(
                    "threads must be greater than 0".into(),
                ));
            }
        }

        if !(0.0..=1.0).contains(&self.min_rank) {
            return Err(Error::Configuration(format!(
                "min_rank must be between 0 and 1, got {}",
                self.min_rank
            )));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    max_input_bytes: Option<u64>,
    threads: Option<usize>,
    min_rank: Option<f64>,
    max_similar: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject inputs larger than this many bytes
    pub fn max_input_bytes(mut self, bytes: u64) -> Self {
        self.max_input_bytes = Some(bytes);
        self
    }

    /// Set the number of threads for batches (None = all available)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.threads = count;
        self
    }

    /// Default minimum similarity score
    pub fn min_rank(mut self, rank: f64) -> Self {
        self.min_rank = Some(rank);
        self
    }

    /// Default maximum number of similar terms
    pub fn max_similar(mut self, count: usize) -> Self {
        self.max_similar = Some(count);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(bytes) = self.max_input_bytes {
            config.max_input_bytes = bytes;
        }

        if self.threads.is_some() {
            config.threads = self.threads;
        }

        if let Some(rank) = self.min_rank {
            config.min_rank = rank;
        }

        if let Some(count) = self.max_similar {
            config.max_similar = count;
        }

        config.validate()?;
        Ok(config)
    }
}
