use super::types::LanguageConfig;
use crate::domain::error::DomainError;

macro_rules! embed_language_config {
    ($code:expr, $name:expr, $path:expr) => {
        ($code, $name, include_str!($path))
    };
}

/// Language definitions compiled into the crate: (code, name, TOML source)
const EMBEDDED_CONFIGS: &[(&str, &str, &str)] = &[
    embed_language_config!("en", "English", "../../../../configs/languages/english.toml"),
    embed_language_config!("fr", "French", "../../../../configs/languages/french.toml"),
    embed_language_config!("de", "German", "../../../../configs/languages/german.toml"),
    embed_language_config!("ja", "Japanese", "../../../../configs/languages/japanese.toml"),
    embed_language_config!("zh", "Chinese", "../../../../configs/languages/chinese.toml"),
    embed_language_config!("ar", "Arabic", "../../../../configs/languages/arabic.toml"),
];

/// Parse the embedded definition for `code`.
///
/// Parsed on every call; nothing is cached process-wide.
pub fn get_language_config(code: &str) -> Result<LanguageConfig, DomainError> {
    let normalized = code.trim().to_lowercase();
    let (expected, _, toml_content) = EMBEDDED_CONFIGS
        .iter()
        .find(|(c, name, _)| *c == normalized || name.to_lowercase() == normalized)
        .ok_or_else(|| DomainError::UnsupportedLanguage(code.to_string()))?;

    let config = LanguageConfig::from_toml_str(toml_content).map_err(|e| {
        DomainError::Configuration(format!("Failed to parse {expected} config: {e}"))
    })?;

    if config.metadata.code != *expected {
        return Err(DomainError::Configuration(format!(
            "Config code mismatch: expected {}, got {}",
            expected, config.metadata.code
        )));
    }

    Ok(config)
}

/// Codes and display names of the embedded presets
pub fn list_available_languages() -> Vec<(&'static str, &'static str)> {
    EMBEDDED_CONFIGS
        .iter()
        .map(|(code, name, _)| (*code, *name))
        .collect()
}
