use thiserror::Error;

/// Domain-specific errors
///
/// Every variant is a configuration error: it is raised while building
/// language rules or a vocabulary snapshot, never while text is processed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Configuration loading or parsing error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unsupported language requested
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// A substitution with an empty `from` pattern
    #[error("Substitution #{index} has an empty `from` pattern")]
    EmptySubstitution { index: usize },

    /// Word-character class that does not compile
    #[error("Invalid word character class '{class}': {reason}")]
    InvalidWordChars { class: String, reason: String },

    /// No characters that may end a sentence
    #[error("No sentence split characters defined")]
    NoSplitCharacters,

    /// Vocabulary entry that cannot be indexed
    #[error("Invalid vocabulary entry {id}: {reason}")]
    InvalidVocabularyEntry { id: u64, reason: String },
}
