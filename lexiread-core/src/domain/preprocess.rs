//! Text preprocessing applied before sentence splitting.
//!
//! - literal substitutions from the language rules, applied in order
//! - lossy decoding of untrusted bytes
//! - line ending normalization

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Placeholder written in place of undecodable input
pub const REPLACEMENT_CHAR: char = char::REPLACEMENT_CHARACTER;

/// A single literal replacement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    pub from: String,
    pub to: String,
}

/// Validated, ordered substitution list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    items: Vec<Substitution>,
}

impl Substitutions {
    /// Validate a list of `(from, to)` pairs. An empty `from` is a
    /// configuration error.
    pub fn new<I, F, T>(pairs: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (F, T)>,
        F: Into<String>,
        T: Into<String>,
    {
        let mut items = Vec::new();
        for (index, (from, to)) in pairs.into_iter().enumerate() {
            let from = from.into();
            if from.is_empty() {
                return Err(DomainError::EmptySubstitution { index });
            }
            items.push(Substitution { from, to: to.into() });
        }
        Ok(Self { items })
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Substitution> {
        self.items.iter()
    }

    /// Apply every substitution in list order, each one over the result of
    /// the previous one. Within one substitution occurrences are replaced
    /// leftmost-first without overlap.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut current = Cow::Borrowed(text);
        for substitution in &self.items {
            if current.contains(substitution.from.as_str()) {
                current = Cow::Owned(current.replace(&substitution.from, &substitution.to));
            }
        }
        current
    }
}

/// Convert CRLF and lone CR to LF
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Decode bytes as UTF-8, replacing every invalid sequence with U+FFFD
pub fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

/// Decode UTF-16 code units, replacing unpaired surrogates with U+FFFD
pub fn decode_utf16_lossy(units: &[u16]) -> String {
    String::from_utf16_lossy(units)
}
