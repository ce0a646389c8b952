//! Read-only vocabulary snapshot used by the overlay matcher.
//!
//! Single words are indexed by their lowercase key; multi-word expressions
//! are indexed by their first word so the matcher can find every candidate
//! anchored at a token while scanning left to right. Buckets are sorted once
//! when a snapshot is built; [`Vocabulary::insert`] places new sequences in
//! order.

use crate::domain::{error::DomainError, language::LanguageRules, status::TermStatus};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::{cmp::Ordering, collections::HashMap};

/// A recorded vocabulary term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub id: u64,
    /// Text as the learner recorded it
    pub text: String,
    /// Lowercase lookup key, words joined by a single space. Derived from
    /// `text` when left empty.
    #[serde(default)]
    pub key: String,
    /// Number of words in `key`. Derived when zero.
    #[serde(default)]
    pub word_count: usize,
    #[serde(default)]
    pub status: TermStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub romanization: Option<String>,
}

impl VocabularyEntry {
    pub fn new(id: u64, text: impl Into<String>, status: TermStatus) -> Self {
        let text = text.into();
        let key = normalize_key(&text);
        let word_count = key.split(' ').filter(|w| !w.is_empty()).count();
        Self {
            id,
            text,
            key,
            word_count,
            status,
            translation: None,
            romanization: None,
        }
    }

    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = Some(translation.into());
        self
    }

    pub fn with_romanization(mut self, romanization: impl Into<String>) -> Self {
        self.romanization = Some(romanization.into());
        self
    }

    /// Words of the key in order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.key.split(' ')
    }

    pub fn is_expression(&self) -> bool {
        self.word_count > 1
    }

    /// Fill in derived fields and check consistency
    fn normalized(mut self) -> Result<Self, DomainError> {
        if self.key.is_empty() {
            self.key = normalize_key(&self.text);
        } else {
            self.key = normalize_key(&self.key);
        }

        if self.key.is_empty() {
            return Err(DomainError::InvalidVocabularyEntry {
                id: self.id,
                reason: "empty key".to_string(),
            });
        }

        let words = self.key.split(' ').count();
        if self.word_count == 0 {
            self.word_count = words;
        } else if self.word_count != words {
            return Err(DomainError::InvalidVocabularyEntry {
                id: self.id,
                reason: format!(
                    "word_count is {} but key '{}' has {} words",
                    self.word_count, self.key, words
                ),
            });
        }

        Ok(self)
    }
}

/// Lowercase and collapse whitespace runs to single spaces
pub fn normalize_key(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Word sequence an entry is matched by, anchored at its first word
#[derive(Debug, Clone)]
struct Sequence {
    entry: usize,
    words: Vec<String>,
    /// Key spelled one character per word, for languages tokenized per char
    spelled: bool,
}

/// Indexed vocabulary snapshot
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    entries: Vec<VocabularyEntry>,
    /// Single-word key -> entry index
    words: HashMap<String, usize>,
    /// First word -> sequences, longest first, then lowest id
    sequences: HashMap<String, Vec<Sequence>>,
    /// Also index every key by its characters
    spell_chars: bool,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty snapshot matched against text tokenized with `rules`. When the
    /// rules split every character into its own word, keys such as "日本"
    /// are also indexed character by character.
    pub fn for_rules(rules: &LanguageRules) -> Self {
        Self {
            spell_chars: rules.word_chars().split_each_char(),
            ..Self::default()
        }
    }

    /// Build a snapshot, rejecting inconsistent entries
    pub fn from_entries(
        entries: impl IntoIterator<Item = VocabularyEntry>,
    ) -> Result<Self, DomainError> {
        Self::new().extended(entries)
    }

    /// Build a snapshot for text tokenized with `rules`, see [`Vocabulary::for_rules`]
    pub fn from_entries_for(
        entries: impl IntoIterator<Item = VocabularyEntry>,
        rules: &LanguageRules,
    ) -> Result<Self, DomainError> {
        Self::for_rules(rules).extended(entries)
    }

    fn extended(
        mut self,
        entries: impl IntoIterator<Item = VocabularyEntry>,
    ) -> Result<Self, DomainError> {
        for entry in entries {
            self.index(entry)?;
        }
        let entries = &self.entries;
        for bucket in self.sequences.values_mut() {
            bucket.sort_by(|a, b| sequence_order(entries, a, b));
        }

        tracing::debug!(
            entries = self.len(),
            words = self.words.len(),
            sequence_anchors = self.sequences.len(),
            spell_chars = self.spell_chars,
            "built vocabulary snapshot"
        );
        Ok(self)
    }

    /// Add an entry. When two single words share a key the lowest id wins.
    pub fn insert(&mut self, entry: VocabularyEntry) -> Result<(), DomainError> {
        let touched = self.index(entry)?;
        let entries = &self.entries;
        for (i, anchor) in touched.iter().enumerate() {
            if touched[..i].contains(anchor) {
                continue;
            }
            let added = touched.iter().filter(|a| *a == anchor).count();
            let Some(bucket) = self.sequences.get_mut(anchor) else {
                continue;
            };
            let tail = bucket.split_off(bucket.len() - added);
            for sequence in tail {
                let at = bucket.partition_point(|s| sequence_order(entries, s, &sequence).is_lt());
                bucket.insert(at, sequence);
            }
        }
        Ok(())
    }

    /// Store an entry and append its sequences unsorted. Returns one anchor
    /// per appended sequence.
    fn index(&mut self, entry: VocabularyEntry) -> Result<SmallVec<[String; 2]>, DomainError> {
        let entry = entry.normalized()?;
        let index = self.entries.len();
        let mut touched = SmallVec::new();

        let words: Vec<String> = entry.words().map(str::to_string).collect();
        let spelled: Vec<String> = if self.spell_chars {
            entry
                .key
                .chars()
                .filter(|c| *c != ' ')
                .map(String::from)
                .collect()
        } else {
            Vec::new()
        };

        if entry.is_expression() {
            touched.push(self.push_sequence(index, words.clone(), false));
        } else {
            let replace = match self.words.get(&entry.key) {
                Some(&existing) => entry.id < self.entries[existing].id,
                None => true,
            };
            if replace {
                self.words.insert(entry.key.clone(), index);
            }
        }
        if spelled.len() > 1 && spelled != words {
            touched.push(self.push_sequence(index, spelled, true));
        }

        self.entries.push(entry);
        Ok(touched)
    }

    fn push_sequence(&mut self, entry: usize, words: Vec<String>, spelled: bool) -> String {
        let anchor = words.first().cloned().unwrap_or_default();
        self.sequences
            .entry(anchor.clone())
            .or_default()
            .push(Sequence {
                entry,
                words,
                spelled,
            });
        anchor
    }

    /// Single-word entry for a lowercase key
    pub fn word(&self, key: &str) -> Option<&VocabularyEntry> {
        self.words.get(key).map(|&i| &self.entries[i])
    }

    /// Expressions whose first word is `key`, longest first, then lowest id
    pub fn expressions_starting_with(&self, key: &str) -> impl Iterator<Item = &VocabularyEntry> {
        self.sequences
            .get(key)
            .into_iter()
            .flatten()
            .filter(|s| !s.spelled)
            .map(|s| &self.entries[s.entry])
    }

    /// Every word sequence anchored at `key` with the entry it matches,
    /// longest first, then lowest id. Includes character-spelled keys.
    pub fn sequences_starting_with(
        &self,
        key: &str,
    ) -> impl Iterator<Item = (&VocabularyEntry, &[String])> {
        self.sequences
            .get(key)
            .into_iter()
            .flatten()
            .map(|s| (&self.entries[s.entry], s.words.as_slice()))
    }

    /// Entry for a full key, single word or expression
    pub fn lookup(&self, key: &str) -> Option<&VocabularyEntry> {
        let key = normalize_key(key);
        match key.split_once(' ') {
            None => self.word(&key),
            Some((first, _)) => self
                .expressions_starting_with(first)
                .filter(|e| e.key == key)
                .min_by_key(|e| e.id),
        }
    }

    /// Every entry in insertion order
    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn sequence_order(entries: &[VocabularyEntry], a: &Sequence, b: &Sequence) -> Ordering {
    b.words
        .len()
        .cmp(&a.words.len())
        .then(entries[a.entry].id.cmp(&entries[b.entry].id))
}
