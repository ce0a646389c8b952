//! Core value types shared by the splitter, tokenizer and overlay matcher.
//!
//! All offsets are counted in Unicode scalar values, never in bytes, so that
//! multi-byte scripts address the same positions a renderer sees.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A run of word characters; eligible for vocabulary lookup
    Word,
    /// Punctuation, spacing and anything else that is not a word
    Other,
}

/// A contiguous span of a sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token text as it appears in the sentence
    pub text: String,
    /// Word or non-word
    pub kind: TokenKind,
    /// Start offset within the sentence (chars, inclusive)
    pub start: usize,
    /// End offset within the sentence (chars, exclusive)
    pub end: usize,
    /// Pronunciation supplied by an external morphological parser
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<String>,
}

impl Token {
    /// Create a token
    pub fn new(text: impl Into<String>, kind: TokenKind, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            kind,
            start,
            end,
            reading: None,
        }
    }

    /// Create a WORD token
    pub fn word(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self::new(text, TokenKind::Word, start, end)
    }

    /// Create an OTHER token
    pub fn other(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self::new(text, TokenKind::Other, start, end)
    }

    /// Attach a reading
    pub fn with_reading(mut self, reading: impl Into<String>) -> Self {
        self.reading = Some(reading.into());
        self
    }

    #[inline]
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Lookup key for vocabulary matching
    pub fn key(&self) -> String {
        self.text.to_lowercase()
    }
}

/// What ended a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "mark", rename_all = "snake_case")]
pub enum Terminator {
    /// A split character resolved as a real sentence end
    Punctuation(char),
    /// Two or more consecutive newlines
    Paragraph,
    /// Text ran out
    EndOfText,
}

/// One sentence of a text, with its original characters preserved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// 1-based position within the text
    pub index: usize,
    /// Sentence text including its terminating punctuation and trailing spacing
    pub text: String,
    /// Start offset within the normalized text (chars)
    pub start: usize,
    /// End offset within the normalized text (chars, exclusive)
    pub end: usize,
    /// Resolved boundary marker
    pub terminator: Terminator,
    /// Whether a blank-line paragraph break follows this sentence
    pub ends_paragraph: bool,
    /// Offsets within the sentence right after an abbreviation from the
    /// exception list; a renderer keeps a visual separation there
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub soft_breaks: SmallVec<[usize; 2]>,
}

impl Sentence {
    /// Number of characters in the sentence
    pub fn char_len(&self) -> usize {
        self.end - self.start
    }

    /// True when the sentence holds nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }
}

/// A sentence together with its tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizedSentence {
    pub sentence: Sentence,
    pub tokens: Vec<Token>,
}
