//! raw text → substitutions → sentences → tokens → overlay segments

use crate::domain::{
    overlay::{overlay_with_lemmas, LemmaLookup, OverlaySegment},
    prepare,
    splitter::{split_explained, BoundaryCandidate},
    tokenizer::{tokenize, tokenize_sentences},
    types::{Sentence, TokenizedSentence},
    vocabulary::Vocabulary,
    LanguageRules,
};
use serde::Serialize;

/// Result of the split and tokenize stages
#[derive(Debug, Clone, Default, Serialize)]
pub struct Segmentation {
    pub sentences: Vec<TokenizedSentence>,
    /// Every split-character run and the decision taken there
    pub candidates: Vec<BoundaryCandidate>,
}

/// A sentence with its overlay segments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedSentence<'v> {
    pub sentence: Sentence,
    pub segments: Vec<OverlaySegment<'v>>,
}

/// Substitute, split and tokenize
pub fn segment_text(text: &str, rules: &LanguageRules) -> Segmentation {
    let prepared = prepare(text, rules);
    let report = split_explained(&prepared, rules);
    let sentences = tokenize_sentences(report.sentences, rules);

    tracing::debug!(
        language = rules.code(),
        sentences = sentences.len(),
        tokens = sentences.iter().map(|s| s.tokens.len()).sum::<usize>(),
        "segmented text"
    );

    Segmentation {
        sentences,
        candidates: report.candidates,
    }
}

/// Run the whole pipeline over one text
pub fn annotate_text<'v, L>(
    text: &str,
    rules: &LanguageRules,
    vocabulary: &'v Vocabulary,
    lemmas: &L,
) -> Vec<AnnotatedSentence<'v>>
where
    L: LemmaLookup + ?Sized,
{
    let prepared = prepare(text, rules);
    let sentences = split_explained(&prepared, rules).sentences;

    let annotated: Vec<AnnotatedSentence<'v>> = sentences
        .into_iter()
        .map(|sentence| {
            let tokens = tokenize(&sentence.text, rules);
            let segments = overlay_with_lemmas(tokens, vocabulary, lemmas);
            AnnotatedSentence { sentence, segments }
        })
        .collect();

    tracing::debug!(
        language = rules.code(),
        sentences = annotated.len(),
        segments = annotated.iter().map(|s| s.segments.len()).sum::<usize>(),
        "annotated text"
    );

    annotated
}
