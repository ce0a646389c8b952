//! Vocabulary snapshots and lemma tables read from JSON files
//!
//! A snapshot is either a bare array of entries or an object with an
//! `entries` array:
//!
//! ```json
//! [{ "id": 1, "text": "new york", "status": 2, "translation": "..." }]
//! ```

use crate::CliError;
use anyhow::{Context, Result};
use lexiread_core::vocabulary::normalize_key;
use lexiread_core::{LanguageRules, Vocabulary, VocabularyEntry};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum Snapshot {
    Entries(Vec<VocabularyEntry>),
    Wrapped { entries: Vec<VocabularyEntry> },
}

/// Load and index a vocabulary snapshot for text tokenized with `rules`
pub fn load_vocabulary(path: &Path, rules: &LanguageRules) -> Result<Vocabulary> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read vocabulary: {}", path.display()))?;
    let vocabulary = parse_vocabulary(&content, rules)
        .with_context(|| format!("Failed to load vocabulary: {}", path.display()))?;
    log::info!(
        "Loaded {} vocabulary entries from {}",
        vocabulary.len(),
        path.display()
    );
    Ok(vocabulary)
}

/// Parse and index a JSON vocabulary snapshot
pub fn parse_vocabulary(content: &str, rules: &LanguageRules) -> Result<Vocabulary> {
    let snapshot: Snapshot = serde_json::from_str(content)
        .map_err(|e| anyhow::Error::new(CliError::VocabularyError(e.to_string())))?;
    let entries = match snapshot {
        Snapshot::Entries(entries) | Snapshot::Wrapped { entries } => entries,
    };
    Vocabulary::from_entries_for(entries, rules)
        .map_err(|e| anyhow::Error::new(CliError::VocabularyError(e.to_string())))
}

/// Load a surface-form to lemma table (a JSON object of strings). Surface
/// forms are keyed the way tokens are looked up, so "Went" and "went" are
/// the same entry.
pub fn load_lemmas(path: &Path) -> Result<HashMap<String, String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read lemma table: {}", path.display()))?;
    let table: HashMap<String, String> = serde_json::from_str(&content)
        .map_err(|e| anyhow::Error::new(CliError::VocabularyError(e.to_string())))
        .with_context(|| format!("Failed to load lemma table: {}", path.display()))?;
    let lemmas: HashMap<String, String> = table
        .into_iter()
        .map(|(surface, lemma)| (normalize_key(&surface), lemma))
        .collect();
    log::info!("Loaded {} lemmas from {}", lemmas.len(), path.display());
    Ok(lemmas)
}
