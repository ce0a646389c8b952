//! Text segmentation and vocabulary overlay for reading foreign-language texts
//!
//! The crate turns raw text into sentences, sentences into WORD/OTHER tokens,
//! and tokens into segments overlaid with the longest matching known
//! vocabulary term, so a reader can see every recorded word and expression
//! inline together with its learning status. A bigram-based similarity
//! ranker suggests known terms close to a new word.
//!
//! # Architecture
//!
//! - **Domain layer**: pure pipeline stages (preprocessing, splitting,
//!   tokenization, overlay, similarity) over explicit language rules
//! - **Processing layer**: the stages chained into one pass, batch execution
//! - **API layer**: [`Annotator`] facade with input limits and lossy decoding
//!
//! # Example
//!
//! ```rust
//! use lexiread_core::{Annotator, Input, TermStatus, Vocabulary, VocabularyEntry};
//!
//! let annotator = Annotator::with_language("en").unwrap();
//! let vocabulary = Vocabulary::from_entries([
//!     VocabularyEntry::new(1, "hello", TermStatus::Learned),
//! ])
//! .unwrap();
//!
//! let output = annotator
//!     .annotate(Input::from_text("Mr. Smith said hello."), &vocabulary)
//!     .unwrap();
//!
//! assert_eq!(output.sentences.len(), 1);
//! let term = output.sentences[0]
//!     .segments
//!     .iter()
//!     .find(|segment| segment.is_term())
//!     .unwrap();
//! assert_eq!(term.text(), "hello");
//! ```

pub mod api;
pub mod domain;
pub mod processing;

pub use api::{
    AnnotatedText, Annotator, Config, ConfigBuilder, Error as ApiError, Input, Preview, TextStats,
};
pub use domain::*;
pub use processing::AnnotatedSentence;

/// Codes and display names of the embedded language presets
pub fn available_presets() -> Vec<(&'static str, &'static str)> {
    domain::language::list_available_languages()
}
