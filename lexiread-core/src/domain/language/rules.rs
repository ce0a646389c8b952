use crate::domain::{
    error::DomainError,
    language::{
        config::{get_language_config, LanguageConfig},
        exceptions::ExceptionTrie,
        word_chars::WordChars,
    },
    preprocess::Substitutions,
};
use std::collections::HashSet;
use std::path::Path;

/// Characters that may end a sentence
#[derive(Debug, Clone)]
pub struct SplitChars {
    chars: HashSet<char>,
    /// ASCII lookup table for the common case
    ascii_lookup: [bool; 128],
}

impl SplitChars {
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let chars: HashSet<char> = chars.into_iter().collect();
        let mut ascii_lookup = [false; 128];
        for &ch in &chars {
            if ch.is_ascii() {
                ascii_lookup[ch as usize] = true;
            }
        }
        Self {
            chars,
            ascii_lookup,
        }
    }

    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_lookup[ch as usize]
        } else {
            self.chars.contains(&ch)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Split characters in code point order
    pub fn sorted(&self) -> Vec<char> {
        let mut chars: Vec<char> = self.chars.iter().copied().collect();
        chars.sort_unstable();
        chars
    }
}

/// Immutable tokenization rules of one language.
///
/// Built once (validated and compiled up front) and passed explicitly to
/// every pipeline call.
#[derive(Debug, Clone)]
pub struct LanguageRules {
    code: String,
    name: String,
    split_chars: SplitChars,
    exceptions: ExceptionTrie,
    word_chars: WordChars,
    substitutions: Substitutions,
    right_to_left: bool,
}

impl LanguageRules {
    /// Start a programmatic definition
    pub fn builder(code: impl Into<String>, name: impl Into<String>) -> LanguageRulesBuilder {
        LanguageRulesBuilder::new(code, name)
    }

    /// Rules of an embedded preset, looked up by code or name
    pub fn preset(code: &str) -> Result<Self, DomainError> {
        let config = get_language_config(code)?;
        Self::from_config(&config)
    }

    /// Parse rules from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, DomainError> {
        let config = LanguageConfig::from_toml_str(content)?;
        Self::from_config(&config)
    }

    /// Load rules from an external TOML file
    pub fn from_file(path: &Path, language_code: Option<&str>) -> Result<Self, DomainError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::Configuration(format!(
                "Failed to read file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut config = LanguageConfig::from_toml_str(&content).map_err(|e| {
            DomainError::Configuration(format!("Failed to load '{}': {}", path.display(), e))
        })?;

        // Override language code if provided
        if let Some(code) = language_code {
            config.metadata.code = code.to_string();
        }

        Self::from_config(&config)
    }

    /// Validate and compile a configuration
    pub fn from_config(config: &LanguageConfig) -> Result<Self, DomainError> {
        config.validate()?;

        let word_chars = WordChars::new(
            config.words.chars.as_deref(),
            config.words.split_each_char,
            config.words.remove_spaces,
        )?;

        let substitutions = Substitutions::new(
            config
                .substitutions
                .iter()
                .map(|s| (s.from.clone(), s.to.clone())),
        )?;

        tracing::debug!(
            code = %config.metadata.code,
            exceptions = config.sentences.exceptions.len(),
            substitutions = substitutions.len(),
            "compiled language rules"
        );

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            split_chars: SplitChars::new(config.sentences.split_chars.iter().copied()),
            exceptions: ExceptionTrie::new(&config.sentences.exceptions),
            word_chars,
            substitutions,
            right_to_left: config.metadata.right_to_left,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn split_chars(&self) -> &SplitChars {
        &self.split_chars
    }

    #[inline]
    pub fn is_split_char(&self, ch: char) -> bool {
        self.split_chars.contains(ch)
    }

    pub fn exceptions(&self) -> &ExceptionTrie {
        &self.exceptions
    }

    pub fn word_chars(&self) -> &WordChars {
        &self.word_chars
    }

    pub fn substitutions(&self) -> &Substitutions {
        &self.substitutions
    }

    /// Rendering direction only; segmentation ignores it
    pub fn right_to_left(&self) -> bool {
        self.right_to_left
    }
}

/// Fluent builder for [`LanguageRules`]
#[derive(Debug, Clone)]
pub struct LanguageRulesBuilder {
    code: String,
    name: String,
    split_chars: Vec<char>,
    exceptions: Vec<String>,
    word_chars: Option<String>,
    split_each_char: bool,
    remove_spaces: bool,
    substitutions: Vec<(String, String)>,
    right_to_left: bool,
}

impl LanguageRulesBuilder {
    fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            split_chars: Vec::new(),
            exceptions: Vec::new(),
            word_chars: None,
            split_each_char: false,
            remove_spaces: false,
            substitutions: Vec::new(),
            right_to_left: false,
        }
    }

    /// Characters that may end a sentence, e.g. `".!?"`
    pub fn split_chars(mut self, chars: &str) -> Self {
        self.split_chars = chars.chars().collect();
        self
    }

    pub fn exceptions<I, S>(mut self, exceptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exceptions = exceptions.into_iter().map(Into::into).collect();
        self
    }

    /// Word-character class, e.g. `"a-zA-Z"` or `"[a-zA-Z]"`
    pub fn word_chars(mut self, class: impl Into<String>) -> Self {
        self.word_chars = Some(class.into());
        self
    }

    pub fn split_each_char(mut self, enabled: bool) -> Self {
        self.split_each_char = enabled;
        self
    }

    pub fn remove_spaces(mut self, enabled: bool) -> Self {
        self.remove_spaces = enabled;
        self
    }

    pub fn substitution(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.substitutions.push((from.into(), to.into()));
        self
    }

    pub fn right_to_left(mut self, enabled: bool) -> Self {
        self.right_to_left = enabled;
        self
    }

    /// Validate and compile
    pub fn build(self) -> Result<LanguageRules, DomainError> {
        use crate::domain::language::config::{
            MetadataConfig, SentenceConfig, SubstitutionConfig, WordConfig,
        };

        let config = LanguageConfig {
            metadata: MetadataConfig {
                code: self.code,
                name: self.name,
                right_to_left: self.right_to_left,
            },
            sentences: SentenceConfig {
                split_chars: self.split_chars,
                exceptions: self.exceptions,
            },
            words: WordConfig {
                chars: self.word_chars,
                split_each_char: self.split_each_char,
                remove_spaces: self.remove_spaces,
            },
            substitutions: self
                .substitutions
                .into_iter()
                .map(|(from, to)| SubstitutionConfig { from, to })
                .collect(),
        };

        LanguageRules::from_config(&config)
    }
}
