//! Where the language rules for a run come from

use anyhow::{Context, Result};
use lexiread_core::LanguageRules;
use std::path::PathBuf;

/// Source of language rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSource {
    /// Embedded preset, by code or display name
    Preset(String),
    /// External TOML file
    External {
        path: PathBuf,
        /// Overrides the code declared in the file
        language_code: Option<String>,
    },
}

impl LanguageSource {
    /// Human-readable description for log messages
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::Preset(code) => code.clone(),
            LanguageSource::External {
                path,
                language_code,
            } => match language_code {
                Some(code) => format!("{} ({})", path.display(), code),
                None => path.display().to_string(),
            },
        }
    }

    /// Compile the rules
    pub fn load(&self) -> Result<LanguageRules> {
        let rules = match self {
            LanguageSource::Preset(code) => LanguageRules::preset(code),
            LanguageSource::External {
                path,
                language_code,
            } => LanguageRules::from_file(path, language_code.as_deref()),
        };
        rules
            .map_err(|e| anyhow::Error::new(crate::CliError::ConfigError(e.to_string())))
            .with_context(|| format!("Failed to load language rules: {}", self.display_name()))
    }
}
