//! Configuration module

use crate::{output::OutputFormat, CliError};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Defaults for command arguments
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Similar-term lookup configuration
    #[serde(default)]
    pub similar: SimilarConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Argument defaults
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Preset code or name used when `--language` is absent
    pub language: String,

    /// Output format used when `--format` is absent
    pub format: OutputFormat,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            format: OutputFormat::Text,
        }
    }
}

/// Similar-term configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimilarConfig {
    /// Minimum Dice score
    pub min_rank: f64,

    /// Maximum number of suggestions
    pub max_count: usize,
}

impl Default for SimilarConfig {
    fn default() -> Self {
        Self {
            min_rank: lexiread_core::api::defaults::MIN_RANK,
            max_count: lexiread_core::api::defaults::MAX_SIMILAR,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,

    /// Largest accepted input, in megabytes
    pub max_input_mb: u64,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            worker_threads: 0,
            max_input_mb: lexiread_core::api::defaults::MAX_INPUT_BYTES / (1024 * 1024),
        }
    }
}

impl PerformanceConfig {
    /// Thread count for the core, `None` meaning auto
    pub fn threads(&self) -> Option<usize> {
        (self.worker_threads > 0).then_some(self.worker_threads)
    }
}

impl CliConfig {
    /// Load a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse a TOML configuration document
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| anyhow::Error::new(CliError::ConfigError(e.to_string())))
    }

    /// The file at `path`, or the defaults when no path is given
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
