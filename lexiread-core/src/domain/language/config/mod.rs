//! Serde/TOML configuration for language rules

mod loader;
mod types;

pub use loader::{get_language_config, list_available_languages};
pub use types::{LanguageConfig, MetadataConfig, SentenceConfig, SubstitutionConfig, WordConfig};
