//! Orthographic similarity between terms: Dice coefficient over letter
//! bigrams, counted as multisets so repeated letters score correctly.

use crate::domain::vocabulary::VocabularyEntry;
use serde::Serialize;
use std::collections::HashMap;

/// A candidate together with its score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarTerm<'v> {
    pub entry: &'v VocabularyEntry,
    pub score: f64,
}

/// Overlapping two-character substrings of `s`, in order, duplicates kept.
/// A string shorter than two characters has none.
pub fn bigrams(s: &str) -> Vec<String> {
    char_bigrams(s)
        .map(|(a, b)| [a, b].iter().collect())
        .collect()
}

fn char_bigrams(s: &str) -> impl Iterator<Item = (char, char)> + '_ {
    s.chars().zip(s.chars().skip(1))
}

/// Similarity of two strings in `[0, 1]`.
///
/// Case-sensitive and code-point based. Either string empty scores 0; two
/// single characters score 1 when equal and 0 otherwise.
pub fn rank(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let mut counts: HashMap<(char, char), usize> = HashMap::new();
    let mut total_a = 0;
    for bigram in char_bigrams(a) {
        *counts.entry(bigram).or_insert(0) += 1;
        total_a += 1;
    }

    let mut total_b = 0;
    let mut shared = 0;
    for bigram in char_bigrams(b) {
        total_b += 1;
        if let Some(count) = counts.get_mut(&bigram) {
            if *count > 0 {
                *count -= 1;
                shared += 1;
            }
        }
    }

    let total = total_a + total_b;
    if total == 0 {
        return 0.0;
    }
    (2 * shared) as f64 / total as f64
}

/// Candidates whose key ranks at least `min_rank` against `target`, best
/// first (ties by lowest id), at most `max_count` of them
pub fn find_similar<'v, I>(
    target: &str,
    candidates: I,
    min_rank: f64,
    max_count: usize,
) -> Vec<SimilarTerm<'v>>
where
    I: IntoIterator<Item = &'v VocabularyEntry>,
{
    let mut ranked: Vec<SimilarTerm<'v>> = candidates
        .into_iter()
        .map(|entry| SimilarTerm {
            entry,
            score: rank(target, &entry.key),
        })
        .filter(|term| term.score >= min_rank)
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.entry.id.cmp(&b.entry.id))
    });
    ranked.truncate(max_count);

    tracing::debug!(
        term = target,
        min_rank,
        matches = ranked.len(),
        "ranked similar terms"
    );

    ranked
}
