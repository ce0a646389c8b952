//! Ingestion of token streams produced by external morphological parsers
//! (MeCab, Jieba and similar) for scripts written without spaces.
//!
//! Line format:
//!
//! ```text
//! surface[<TAB>reading]
//! ```
//!
//! One token per line. A blank line is a paragraph boundary. A token made
//! only of split characters ends the current sentence.

use crate::domain::{
    language::LanguageRules,
    preprocess::normalize_line_endings,
    types::{Sentence, Terminator, Token, TokenKind, TokenizedSentence},
};
use smallvec::SmallVec;

/// Build tokenized sentences from parser output
pub fn parse_line_output(output: &str, rules: &LanguageRules) -> Vec<TokenizedSentence> {
    let output = normalize_line_endings(output);
    let mut builder = SentenceBuilder::default();

    for line in output.lines() {
        if line.trim().is_empty() {
            builder.finish(Terminator::Paragraph, true);
            continue;
        }

        let (surface, reading) = match line.split_once('\t') {
            Some((surface, reading)) => (surface, Some(reading.trim())),
            None => (line, None),
        };

        let kind = if surface.chars().any(|c| rules.word_chars().is_word_char(c)) {
            TokenKind::Word
        } else {
            TokenKind::Other
        };
        builder.push(surface, kind, reading.filter(|r| !r.is_empty()));

        let mut chars = surface.chars();
        let is_mark_token = chars.clone().all(|c| rules.is_split_char(c));
        if is_mark_token {
            if let Some(mark) = chars.next_back() {
                builder.finish(Terminator::Punctuation(mark), false);
            }
        }
    }
    builder.finish(Terminator::EndOfText, false);

    tracing::debug!(
        language = rules.code(),
        sentences = builder.sentences.len(),
        "parsed external tokenizer output"
    );

    builder.sentences
}

#[derive(Default)]
struct SentenceBuilder {
    sentences: Vec<TokenizedSentence>,
    tokens: Vec<Token>,
    text: String,
    /// Char offset of the current sentence within the whole output
    start: usize,
    /// Char length of the current sentence
    len: usize,
}

impl SentenceBuilder {
    fn push(&mut self, surface: &str, kind: TokenKind, reading: Option<&str>) {
        let len = surface.chars().count();
        let mut token = Token::new(surface, kind, self.len, self.len + len);
        if let Some(reading) = reading {
            token = token.with_reading(reading);
        }
        self.tokens.push(token);
        self.text.push_str(surface);
        self.len += len;
    }

    fn finish(&mut self, terminator: Terminator, ends_paragraph: bool) {
        if self.tokens.is_empty() {
            // A blank line right after a sentence end still closes the paragraph
            if ends_paragraph {
                if let Some(last) = self.sentences.last_mut() {
                    last.sentence.ends_paragraph = true;
                }
            }
            return;
        }

        let sentence = Sentence {
            index: self.sentences.len() + 1,
            text: std::mem::take(&mut self.text),
            start: self.start,
            end: self.start + self.len,
            terminator,
            ends_paragraph,
            soft_breaks: SmallVec::new(),
        };
        self.start += self.len;
        self.len = 0;
        self.sentences.push(TokenizedSentence {
            sentence,
            tokens: std::mem::take(&mut self.tokens),
        });
    }
}
