//! Vocabulary overlay: greedy longest match of known terms over the tokens of
//! one sentence.
//!
//! Every token ends up in exactly one segment, in order. OTHER tokens are
//! never looked up and pass through as PLAIN segments unless they sit inside
//! a matched expression. The vocabulary is only read; segments borrow its
//! entries.

use crate::domain::{
    types::Token,
    vocabulary::{Vocabulary, VocabularyEntry},
};
use serde::Serialize;
use smallvec::SmallVec;
use std::collections::HashMap;

/// Segment classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Not a recorded term
    Plain,
    /// A recorded vocabulary term
    Term,
}

/// How a TERM segment was matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Single word found under its own key
    Exact,
    /// Multi-word expression
    Expression,
    /// Single word found under its lemma
    Lemma,
}

/// Contiguous span of tokens, plain or matched
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlaySegment<'v> {
    pub kind: SegmentKind,
    pub tokens: Vec<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<&'v VocabularyEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_kind: Option<MatchKind>,
}

impl<'v> OverlaySegment<'v> {
    pub fn plain(token: Token) -> Self {
        Self {
            kind: SegmentKind::Plain,
            tokens: vec![token],
            term: None,
            match_kind: None,
        }
    }

    pub fn term(tokens: Vec<Token>, entry: &'v VocabularyEntry, match_kind: MatchKind) -> Self {
        Self {
            kind: SegmentKind::Term,
            tokens,
            term: Some(entry),
            match_kind: Some(match_kind),
        }
    }

    pub fn is_term(&self) -> bool {
        self.kind == SegmentKind::Term
    }

    /// Concatenated token text
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// Char offset of the first token within the sentence
    pub fn start(&self) -> usize {
        self.tokens.first().map_or(0, |t| t.start)
    }

    /// Char offset right after the last token
    pub fn end(&self) -> usize {
        self.tokens.last().map_or(0, |t| t.end)
    }
}

/// Externally supplied lemmatizer: lowercase word to lowercase lemma
pub trait LemmaLookup {
    fn lemma(&self, word: &str) -> Option<&str>;
}

impl LemmaLookup for HashMap<String, String> {
    fn lemma(&self, word: &str) -> Option<&str> {
        self.get(word).map(String::as_str)
    }
}

/// Lemma lookup that never finds anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLemmas;

impl LemmaLookup for NoLemmas {
    fn lemma(&self, _word: &str) -> Option<&str> {
        None
    }
}

/// Overlay one sentence's tokens with the vocabulary
pub fn overlay<'v>(tokens: Vec<Token>, vocabulary: &'v Vocabulary) -> Vec<OverlaySegment<'v>> {
    overlay_with_lemmas(tokens, vocabulary, &NoLemmas)
}

/// Like [`overlay`], but a single WORD that misses the vocabulary is looked
/// up again under its lemma
pub fn overlay_with_lemmas<'v, L>(
    tokens: Vec<Token>,
    vocabulary: &'v Vocabulary,
    lemmas: &L,
) -> Vec<OverlaySegment<'v>>
where
    L: LemmaLookup + ?Sized,
{
    let keys: Vec<Option<String>> = tokens
        .iter()
        .map(|t| t.is_word().then(|| t.key()))
        .collect();

    let mut spans: Vec<Span<'v>> = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        let Some(key) = keys[i].as_deref() else {
            spans.push(Span::plain());
            i += 1;
            continue;
        };

        if let Some((entry, last)) = longest_expression(&keys, i, key, vocabulary) {
            let kind = if entry.is_expression() {
                MatchKind::Expression
            } else {
                MatchKind::Exact
            };
            spans.push(Span {
                len: last - i + 1,
                term: Some((entry, kind)),
            });
            i = last + 1;
            continue;
        }

        let term = vocabulary
            .word(key)
            .map(|entry| (entry, MatchKind::Exact))
            .or_else(|| {
                lemmas
                    .lemma(key)
                    .and_then(|lemma| vocabulary.word(&lemma.to_lowercase()))
                    .map(|entry| (entry, MatchKind::Lemma))
            });
        spans.push(Span { len: 1, term });
        i += 1;
    }

    let segments = build_segments(tokens, spans);

    tracing::trace!(
        segments = segments.len(),
        terms = segments.iter().filter(|s| s.is_term()).count(),
        "overlaid sentence"
    );

    segments
}

/// Tokens covered by one segment
struct Span<'v> {
    len: usize,
    term: Option<(&'v VocabularyEntry, MatchKind)>,
}

impl Span<'_> {
    fn plain() -> Self {
        Self { len: 1, term: None }
    }
}

/// Longest expression anchored at token `anchor`; returns the entry and the
/// index of its last token. Candidates come longest first, then lowest id,
/// so the first full match wins.
fn longest_expression<'v>(
    keys: &[Option<String>],
    anchor: usize,
    anchor_key: &str,
    vocabulary: &'v Vocabulary,
) -> Option<(&'v VocabularyEntry, usize)> {
    // Positions of the WORD tokens following the anchor, collected lazily
    let mut following: SmallVec<[usize; 8]> = SmallVec::new();
    let mut scan = anchor + 1;

    for (entry, words) in vocabulary.sequences_starting_with(anchor_key) {
        let rest = words.len() - 1;
        while following.len() < rest && scan < keys.len() {
            if keys[scan].is_some() {
                following.push(scan);
            }
            scan += 1;
        }
        if following.len() < rest {
            continue;
        }

        let matched = words[1..]
            .iter()
            .zip(&following)
            .all(|(word, &pos)| keys[pos].as_deref() == Some(word.as_str()));
        if matched {
            let last = if rest == 0 { anchor } else { following[rest - 1] };
            return Some((entry, last));
        }
    }

    None
}

fn build_segments<'v>(tokens: Vec<Token>, spans: Vec<Span<'v>>) -> Vec<OverlaySegment<'v>> {
    let mut tokens = tokens.into_iter();
    spans
        .into_iter()
        .map(|span| {
            let covered: Vec<Token> = tokens.by_ref().take(span.len).collect();
            match span.term {
                Some((entry, match_kind)) => OverlaySegment::term(covered, entry, match_kind),
                None => OverlaySegment {
                    kind: SegmentKind::Plain,
                    tokens: covered,
                    term: None,
                    match_kind: None,
                },
            }
        })
        .collect()
}
