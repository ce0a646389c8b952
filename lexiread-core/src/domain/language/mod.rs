//! Language rules: which characters end sentences, which abbreviations do
//! not, which characters form words, and which substitutions normalize the
//! text first.
//!
//! Rules are built once, either from an embedded preset, a TOML file or the
//! fluent builder, and then passed explicitly to every pipeline call.
//!
//! # Usage
//!
//! ```rust
//! use lexiread_core::domain::language::LanguageRules;
//!
//! let rules = LanguageRules::builder("en", "English")
//!     .split_chars(".!?")
//!     .exceptions(["Mr.", "Dr."])
//!     .word_chars("a-zA-Z")
//!     .build()
//!     .unwrap();
//!
//! assert!(rules.is_split_char('!'));
//! ```

pub mod config;
pub mod exceptions;
pub mod rules;
pub mod word_chars;

pub use config::{get_language_config, list_available_languages, LanguageConfig};
pub use exceptions::{ExceptionMatch, ExceptionTrie};
pub use rules::{LanguageRules, LanguageRulesBuilder, SplitChars};
pub use word_chars::WordChars;
