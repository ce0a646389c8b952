use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};

/// TOML schema of a language definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: MetadataConfig,
    pub sentences: SentenceConfig,
    pub words: WordConfig,
    #[serde(default)]
    pub substitutions: Vec<SubstitutionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub right_to_left: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceConfig {
    pub split_chars: Vec<char>,
    #[serde(default)]
    pub exceptions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordConfig {
    /// Regex character-class body, with or without the surrounding brackets
    #[serde(default)]
    pub chars: Option<String>,
    #[serde(default)]
    pub split_each_char: bool,
    #[serde(default)]
    pub remove_spaces: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubstitutionConfig {
    pub from: String,
    pub to: String,
}

impl LanguageConfig {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, DomainError> {
        toml::from_str(content)
            .map_err(|e| DomainError::Configuration(format!("Failed to parse TOML: {e}")))
    }

    /// Structural checks that do not need compilation
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.metadata.code.trim().is_empty() {
            return Err(DomainError::Configuration(
                "Language code must not be empty".to_string(),
            ));
        }

        if self.sentences.split_chars.is_empty() {
            return Err(DomainError::NoSplitCharacters);
        }

        if let Some(index) = self.substitutions.iter().position(|s| s.from.is_empty()) {
            return Err(DomainError::EmptySubstitution { index });
        }

        if self.words.chars.is_none() && !self.words.split_each_char {
            return Err(DomainError::Configuration(
                "A word character class is required unless split_each_char is set".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENGLISH: &str = r#"
        [metadata]
        code = "en"
        name = "English"

        [sentences]
        split_chars = [".", "!", "?"]
        exceptions = ["Mr.", "Dr."]

        [words]
        chars = "a-zA-Z"

        [[substitutions]]
        from = "’"
        to = "'"
    "#;

    #[test]
    fn test_language_config_deserialize() {
        let config = LanguageConfig::from_toml_str(ENGLISH).unwrap();
        assert_eq!(config.metadata.code, "en");
        assert!(!config.metadata.right_to_left);
        assert_eq!(config.sentences.split_chars, vec!['.', '!', '?']);
        assert_eq!(config.sentences.exceptions.len(), 2);
        assert_eq!(config.words.chars.as_deref(), Some("a-zA-Z"));
        assert!(!config.words.split_each_char);
        assert_eq!(config.substitutions.len(), 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_substitution_rejected() {
        let content = ENGLISH.replace("from = \"’\"", "from = \"\"");
        let config = LanguageConfig::from_toml_str(&content).unwrap();
        assert_eq!(
            config.validate().unwrap_err(),
            DomainError::EmptySubstitution { index: 0 }
        );
    }

    #[test]
    fn test_missing_split_chars_rejected() {
        let content = ENGLISH.replace(r#"split_chars = [".", "!", "?"]"#, "split_chars = []");
        let config = LanguageConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.validate().unwrap_err(), DomainError::NoSplitCharacters);
    }

    #[test]
    fn test_word_chars_required_without_split_each_char() {
        let content = ENGLISH.replace(r#"chars = "a-zA-Z""#, "");
        let config = LanguageConfig::from_toml_str(&content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(DomainError::Configuration(_))
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let result = LanguageConfig::from_toml_str("[metadata\ncode = 1");
        assert!(matches!(result, Err(DomainError::Configuration(_))));
    }
}
