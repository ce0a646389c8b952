//! Output types for unified API

use crate::domain::{
    splitter::BoundaryCandidate, status::TermStatus, types::TokenizedSentence,
};
use crate::processing::AnnotatedSentence;
use serde::Serialize;
use std::collections::BTreeMap;

/// Annotated text ready for rendering
#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedText<'v> {
    /// Language code of the rules used
    pub language: String,
    /// Rendering direction
    pub right_to_left: bool,
    pub sentences: Vec<AnnotatedSentence<'v>>,
    pub stats: TextStats,
}

/// Segmentation result for human review
#[derive(Debug, Clone, Serialize)]
pub struct Preview {
    pub language: String,
    pub right_to_left: bool,
    pub sentences: Vec<TokenizedSentence>,
    /// Every split-character run and the decision taken there
    pub candidates: Vec<BoundaryCandidate>,
    pub stats: TextStats,
}

/// Counts over one text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextStats {
    /// Characters after preprocessing
    pub chars: usize,
    pub sentences: usize,
    pub tokens: usize,
    /// WORD tokens
    pub words: usize,
    /// WORD tokens outside every TERM segment
    pub unrecorded_words: usize,
    /// TERM segments per status label
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub terms_by_status: BTreeMap<&'static str, usize>,
}

impl TextStats {
    pub(crate) fn from_tokenized(sentences: &[TokenizedSentence]) -> Self {
        let mut stats = Self {
            sentences: sentences.len(),
            ..Self::default()
        };
        for sentence in sentences {
            stats.chars += sentence.sentence.char_len();
            stats.tokens += sentence.tokens.len();
            stats.words += sentence.tokens.iter().filter(|t| t.is_word()).count();
        }
        stats.unrecorded_words = stats.words;
        stats
    }

    pub(crate) fn from_annotated(sentences: &[AnnotatedSentence<'_>]) -> Self {
        let mut stats = Self {
            sentences: sentences.len(),
            ..Self::default()
        };
        for sentence in sentences {
            stats.chars += sentence.sentence.char_len();
            for segment in &sentence.segments {
                let words = segment.tokens.iter().filter(|t| t.is_word()).count();
                stats.tokens += segment.tokens.len();
                stats.words += words;
                match segment.term {
                    Some(entry) => {
                        *stats.terms_by_status.entry(entry.status.label()).or_insert(0) += 1;
                    }
                    None => stats.unrecorded_words += words,
                }
            }
        }
        stats
    }

    /// Number of TERM segments with the given status
    pub fn terms_with(&self, status: TermStatus) -> usize {
        self.terms_by_status.get(status.label()).copied().unwrap_or(0)
    }
}
