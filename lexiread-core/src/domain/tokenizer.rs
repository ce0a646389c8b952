//! Sentence tokenization into WORD and OTHER tokens.
//!
//! Offsets are char offsets within the sentence. Except in `remove_spaces`
//! mode the token texts concatenate back to the sentence; in that mode the
//! dropped whitespace is still covered by the offsets, so [`reconstruct`]
//! can rebuild the sentence.

use crate::domain::{
    language::{LanguageRules, WordChars},
    types::{Sentence, Token, TokenKind, TokenizedSentence},
};

/// Split one sentence into tokens
pub fn tokenize(sentence: &str, rules: &LanguageRules) -> Vec<Token> {
    let word_chars = rules.word_chars();

    let tokens = if word_chars.split_each_char() {
        tokenize_each_char(sentence, word_chars)
    } else if word_chars.remove_spaces() {
        tokenize_runs_ignoring_spaces(sentence, word_chars)
    } else {
        tokenize_runs(sentence, word_chars)
    };

    tracing::trace!(
        chars = sentence.chars().count(),
        tokens = tokens.len(),
        "tokenized sentence"
    );

    tokens
}

/// Tokenize every sentence
pub fn tokenize_sentences(sentences: Vec<Sentence>, rules: &LanguageRules) -> Vec<TokenizedSentence> {
    sentences
        .into_iter()
        .map(|sentence| {
            let tokens = tokenize(&sentence.text, rules);
            TokenizedSentence { sentence, tokens }
        })
        .collect()
}

/// Rebuild a sentence from its tokens, taking any span the tokens leave
/// uncovered from `sentence`
pub fn reconstruct(sentence: &str, tokens: &[Token]) -> String {
    let chars: Vec<char> = sentence.chars().collect();
    let mut out = String::with_capacity(sentence.len());
    let mut pos = 0;

    for token in tokens {
        let start = token.start.min(chars.len());
        let end = token.end.min(chars.len());
        if start > pos {
            out.extend(&chars[pos..start]);
        }
        if token.text.chars().count() == end.saturating_sub(start) {
            out.push_str(&token.text);
        } else {
            out.extend(&chars[start..end]);
        }
        pos = pos.max(end);
    }

    if pos < chars.len() {
        out.extend(&chars[pos..]);
    }
    out
}

/// Maximal runs of word characters become WORD tokens, the gaps between
/// them OTHER tokens
fn tokenize_runs(sentence: &str, word_chars: &WordChars) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut byte_pos = 0;
    let mut char_pos = 0;

    let mut push = |text: &str, kind: TokenKind, char_pos: &mut usize| {
        let len = text.chars().count();
        tokens.push(Token::new(text, kind, *char_pos, *char_pos + len));
        *char_pos += len;
    };

    for (start, end) in word_chars.word_runs(sentence) {
        if start > byte_pos {
            push(&sentence[byte_pos..start], TokenKind::Other, &mut char_pos);
        }
        push(&sentence[start..end], TokenKind::Word, &mut char_pos);
        byte_pos = end;
    }
    if byte_pos < sentence.len() {
        push(&sentence[byte_pos..], TokenKind::Other, &mut char_pos);
    }

    tokens
}

/// One token per non-space code point. Whitespace runs become OTHER tokens
/// unless spaces are removed.
fn tokenize_each_char(sentence: &str, word_chars: &WordChars) -> Vec<Token> {
    let remove_spaces = word_chars.remove_spaces();
    let mut tokens: Vec<Token> = Vec::new();
    let mut space: Option<(usize, String)> = None;

    for (i, ch) in sentence.chars().enumerate() {
        if ch.is_whitespace() {
            if !remove_spaces {
                space.get_or_insert_with(|| (i, String::new())).1.push(ch);
            }
            continue;
        }

        if let Some((start, text)) = space.take() {
            tokens.push(Token::other(text, start, i));
        }

        let kind = if word_chars.is_word_char(ch) {
            TokenKind::Word
        } else {
            TokenKind::Other
        };
        tokens.push(Token::new(ch.to_string(), kind, i, i + 1));
    }

    if let Some((start, text)) = space {
        let end = start + text.chars().count();
        tokens.push(Token::other(text, start, end));
    }

    tokens
}

/// Runs of word and non-word characters where whitespace neither ends a run
/// nor appears in a token's text
fn tokenize_runs_ignoring_spaces(sentence: &str, word_chars: &WordChars) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut current: Option<Token> = None;

    for (i, ch) in sentence.chars().enumerate() {
        if ch.is_whitespace() {
            continue;
        }

        let kind = if word_chars.is_word_char(ch) {
            TokenKind::Word
        } else {
            TokenKind::Other
        };

        match current.as_mut() {
            Some(token) if token.kind == kind => {
                token.text.push(ch);
                token.end = i + 1;
            }
            _ => {
                if let Some(done) = current.take() {
                    tokens.push(done);
                }
                current = Some(Token::new(ch.to_string(), kind, i, i + 1));
            }
        }
    }

    tokens.extend(current);
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> LanguageRules {
        LanguageRules::builder("en", "English")
            .split_chars(".!?")
            .word_chars("a-zA-Z")
            .build()
            .unwrap()
    }

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_word_and_other_runs() {
        let tokens = tokenize("Hello, world!", &english());
        assert_eq!(texts(&tokens), vec!["Hello", ", ", "world", "!"]);
        assert_eq!(tokens[0].kind, TokenKind::Word);
        assert_eq!(tokens[1].kind, TokenKind::Other);
        assert_eq!((tokens[2].start, tokens[2].end), (7, 12));
    }

    #[test]
    fn test_leading_other_run() {
        let tokens = tokenize("  \"Hi\"", &english());
        assert_eq!(texts(&tokens), vec!["  \"", "Hi", "\""]);
    }

    #[test]
    fn test_empty_sentence() {
        assert!(tokenize("", &english()).is_empty());
    }

    #[test]
    fn test_multibyte_offsets_are_chars() {
        let rules = LanguageRules::builder("fr", "French")
            .split_chars(".")
            .word_chars("a-zA-ZÀ-ÿ")
            .build()
            .unwrap();
        let tokens = tokenize("Été déjà.", &rules);
        assert_eq!(texts(&tokens), vec!["Été", " ", "déjà", "."]);
        assert_eq!((tokens[2].start, tokens[2].end), (4, 8));
    }

    #[test]
    fn test_split_each_char() {
        let rules = LanguageRules::builder("ja", "Japanese")
            .split_chars("。")
            .split_each_char(true)
            .build()
            .unwrap();
        let tokens = tokenize("日本語", &rules);
        assert_eq!(texts(&tokens), vec!["日", "本", "語"]);
        assert!(tokens.iter().all(Token::is_word));
        assert_eq!((tokens[2].start, tokens[2].end), (2, 3));
    }

    #[test]
    fn test_split_each_char_keeps_spaces_as_other() {
        let rules = LanguageRules::builder("ja", "Japanese")
            .split_chars("。")
            .word_chars(r"\p{Han}\p{Hiragana}")
            .split_each_char(true)
            .build()
            .unwrap();
        let tokens = tokenize("猫  です。", &rules);
        assert_eq!(texts(&tokens), vec!["猫", "  ", "で", "す", "。"]);
        assert_eq!(tokens[1].kind, TokenKind::Other);
        assert_eq!(tokens[4].kind, TokenKind::Other);
        assert_eq!(tokens.iter().map(|t| t.text.as_str()).collect::<String>(), "猫  です。");
    }

    #[test]
    fn test_split_each_char_with_removed_spaces() {
        let rules = LanguageRules::preset("ja").unwrap();
        let tokens = tokenize("猫 です。", &rules);
        assert_eq!(texts(&tokens), vec!["猫", "で", "す", "。"]);
        assert_eq!(tokens[1].start, 2);
        assert_eq!(reconstruct("猫 です。", &tokens), "猫 です。");
    }

    #[test]
    fn test_remove_spaces_without_split_each_char() {
        let rules = LanguageRules::builder("xx", "Spaced")
            .split_chars(".")
            .word_chars("a-z")
            .remove_spaces(true)
            .build()
            .unwrap();
        let tokens = tokenize("ab cd, ef.", &rules);
        assert_eq!(texts(&tokens), vec!["abcd", ",", "ef", "."]);
        assert_eq!((tokens[0].start, tokens[0].end), (0, 5));
        assert_eq!(reconstruct("ab cd, ef.", &tokens), "ab cd, ef.");
    }

    #[test]
    fn test_reconstruct_is_identity_for_plain_tokens() {
        let sentence = "Mr. Smith said hello.";
        let tokens = tokenize(sentence, &english());
        assert_eq!(reconstruct(sentence, &tokens), sentence);
    }

    #[test]
    fn test_tokenize_sentences_keeps_order() {
        let rules = english();
        let sentences = crate::domain::splitter::split("One. Two.", &rules);
        let tokenized = tokenize_sentences(sentences, &rules);
        assert_eq!(tokenized.len(), 2);
        assert_eq!(tokenized[1].tokens[0].text, "Two");
    }
}
