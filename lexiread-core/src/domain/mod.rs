//! Domain layer: the segmentation and overlay pipeline.
//!
//! Every entry point is a pure function of its inputs. Language rules and
//! the vocabulary snapshot are passed explicitly; nothing here keeps state
//! between calls or performs I/O.

pub mod error;
pub mod external;
pub mod language;
pub mod overlay;
pub mod preprocess;
pub mod similarity;
pub mod splitter;
pub mod status;
pub mod tokenizer;
pub mod types;
pub mod vocabulary;

pub use error::DomainError;
pub use language::LanguageRules;
pub use overlay::{overlay, overlay_with_lemmas, LemmaLookup, MatchKind, OverlaySegment, SegmentKind};
pub use similarity::{bigrams, find_similar, rank, SimilarTerm};
pub use splitter::{split, split_explained, BoundaryDecision, SplitReport};
pub use status::TermStatus;
pub use tokenizer::{reconstruct, tokenize};
pub use types::{Sentence, Terminator, Token, TokenKind, TokenizedSentence};
pub use vocabulary::{Vocabulary, VocabularyEntry};

use std::borrow::Cow;

/// Apply the language's substitutions to raw text, after normalizing line
/// endings. The result is what [`split`] and the tokenizer see.
pub fn prepare<'a>(text: &'a str, rules: &LanguageRules) -> Cow<'a, str> {
    match preprocess::normalize_line_endings(text) {
        Cow::Borrowed(text) => rules.substitutions().apply(text),
        Cow::Owned(text) => Cow::Owned(rules.substitutions().apply(&text).into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_normalizes_then_substitutes() {
        let rules = LanguageRules::builder("xx", "Test")
            .split_chars(".")
            .word_chars("a-z")
            .substitution("\n", " ")
            .build()
            .unwrap();
        assert_eq!(prepare("a\r\nb", &rules), "a b");
    }

    #[test]
    fn test_prepare_borrows_when_unchanged() {
        let rules = LanguageRules::preset("en").unwrap();
        assert!(matches!(prepare("plain text.", &rules), Cow::Borrowed(_)));
    }
}
