use crate::domain::error::DomainError;
use regex::Regex;

/// Compiled word-character class
#[derive(Debug, Clone)]
struct CharClass {
    /// Class as configured
    source: String,
    /// Matches one word character
    single: Regex,
    /// Matches a maximal run of word characters
    run: Regex,
}

/// Decides which code points take part in WORD tokens.
///
/// Either a regular-expression character class, or the `split_each_char`
/// mode used for scripts written without spaces. `remove_spaces` can be
/// combined with both.
#[derive(Debug, Clone)]
pub struct WordChars {
    class: Option<CharClass>,
    split_each_char: bool,
    remove_spaces: bool,
}

impl WordChars {
    /// Build from an optional class body such as `a-zA-Z` or `[a-zA-Z]`
    pub fn new(
        class: Option<&str>,
        split_each_char: bool,
        remove_spaces: bool,
    ) -> Result<Self, DomainError> {
        let class = match class.map(str::trim) {
            Some(source) if !source.is_empty() => Some(Self::compile(source)?),
            Some(_) | None if split_each_char => None,
            _ => {
                return Err(DomainError::InvalidWordChars {
                    class: class.unwrap_or_default().to_string(),
                    reason: "a character class is required unless split_each_char is set"
                        .to_string(),
                })
            }
        };

        Ok(Self {
            class,
            split_each_char,
            remove_spaces,
        })
    }

    /// Plain character-class mode
    pub fn class(source: &str) -> Result<Self, DomainError> {
        Self::new(Some(source), false, false)
    }

    fn compile(source: &str) -> Result<CharClass, DomainError> {
        let bracketed = if source.starts_with('[') && source.ends_with(']') && source.len() > 1 {
            source.to_string()
        } else {
            format!("[{source}]")
        };

        let invalid = |e: regex::Error| DomainError::InvalidWordChars {
            class: source.to_string(),
            reason: e.to_string(),
        };
        let single = Regex::new(&bracketed).map_err(invalid)?;
        let run = Regex::new(&format!("{bracketed}+")).map_err(invalid)?;

        Ok(CharClass {
            source: source.to_string(),
            single,
            run,
        })
    }

    /// Configured class source, if any
    pub fn source(&self) -> Option<&str> {
        self.class.as_ref().map(|c| c.source.as_str())
    }

    pub fn split_each_char(&self) -> bool {
        self.split_each_char
    }

    pub fn remove_spaces(&self) -> bool {
        self.remove_spaces
    }

    /// Whether a single code point is a word character.
    ///
    /// Whitespace never is. Without a class (`split_each_char` only) every
    /// other code point is.
    pub fn is_word_char(&self, ch: char) -> bool {
        if ch.is_whitespace() {
            return false;
        }
        match &self.class {
            Some(class) => {
                let mut buf = [0u8; 4];
                class.single.is_match(ch.encode_utf8(&mut buf))
            }
            None => true,
        }
    }

    /// Byte ranges of maximal word-character runs in `text`.
    pub(crate) fn word_runs<'t>(&'t self, text: &'t str) -> impl Iterator<Item = (usize, usize)> + 't {
        let class = self.class.as_ref();
        class
            .into_iter()
            .flat_map(move |c| c.run.find_iter(text).map(|m| (m.start(), m.end())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracketed_and_bare_classes_are_equivalent() {
        let bare = WordChars::class("a-zA-Z").unwrap();
        let bracketed = WordChars::class("[a-zA-Z]").unwrap();
        for ch in ['a', 'Z', '1', '.', 'é'] {
            assert_eq!(bare.is_word_char(ch), bracketed.is_word_char(ch));
        }
        assert!(bare.is_word_char('q'));
        assert!(!bare.is_word_char('.'));
    }

    #[test]
    fn test_unicode_classes() {
        let japanese = WordChars::new(Some(r"\p{Han}\p{Hiragana}\p{Katakana}"), true, true).unwrap();
        assert!(japanese.is_word_char('日'));
        assert!(japanese.is_word_char('の'));
        assert!(japanese.is_word_char('カ'));
        assert!(!japanese.is_word_char('。'));
        assert!(!japanese.is_word_char(' '));
    }

    #[test]
    fn test_invalid_class_fails_fast() {
        let result = WordChars::class(r"\p{NoSuchScript}");
        assert!(matches!(result, Err(DomainError::InvalidWordChars { .. })));
    }

    #[test]
    fn test_class_required_without_split_each_char() {
        assert!(WordChars::new(None, false, false).is_err());
        assert!(WordChars::new(Some("  "), false, true).is_err());
        let each = WordChars::new(None, true, false).unwrap();
        assert!(each.is_word_char('。'));
        assert!(!each.is_word_char('\u{3000}'));
    }

    #[test]
    fn test_word_runs() {
        let chars = WordChars::class("a-z").unwrap();
        let runs: Vec<_> = chars.word_runs("ab, cd!").collect();
        assert_eq!(runs, vec![(0, 2), (4, 6)]);
    }
}
