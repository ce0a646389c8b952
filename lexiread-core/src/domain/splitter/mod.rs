//! Sentence splitting.
//!
//! The splitter walks the text once, collects candidate boundaries at runs of
//! split characters and hands each one to the [`disambiguator`]. Blank lines
//! always end a sentence. Every character of the input ends up in exactly
//! one sentence: terminating punctuation, closing quotes and the spacing that
//! follows belong to the sentence they close.

pub mod disambiguator;

pub use disambiguator::{decide, BoundaryContext, BoundaryDecision, FollowingChar, NonTerminal};

use crate::domain::{
    language::LanguageRules,
    preprocess::normalize_line_endings,
    types::{Sentence, Terminator},
};
use serde::Serialize;
use smallvec::SmallVec;

/// A split-character run that was evaluated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundaryCandidate {
    /// Char offset of the last mark of the run in the normalized text
    pub offset: usize,
    /// Index of the sentence the mark belongs to (1-based)
    pub sentence: usize,
    pub mark: char,
    /// Word right before the mark
    pub preceding_word: String,
    pub decision: BoundaryDecision,
}

/// Sentences plus every boundary decision taken while splitting
#[derive(Debug, Clone, Default, Serialize)]
pub struct SplitReport {
    pub sentences: Vec<Sentence>,
    pub candidates: Vec<BoundaryCandidate>,
}

/// Split text into sentences.
///
/// Line endings are normalized to LF first; the sentences concatenate back to
/// the normalized text. Empty input yields no sentences.
pub fn split(text: &str, rules: &LanguageRules) -> Vec<Sentence> {
    split_explained(text, rules).sentences
}

/// Split text and keep the decision taken at every candidate
pub fn split_explained(text: &str, rules: &LanguageRules) -> SplitReport {
    let normalized = normalize_line_endings(text);
    let chars: Vec<char> = normalized.chars().collect();
    let report = Splitter::new(&chars, rules).run();

    tracing::debug!(
        language = rules.code(),
        chars = chars.len(),
        sentences = report.sentences.len(),
        candidates = report.candidates.len(),
        "split text"
    );

    report
}

/// Closing punctuation that stays with the sentence it follows
pub fn is_closing_char(ch: char) -> bool {
    matches!(
        ch,
        '"' | '\''
            | ')'
            | ']'
            | '}'
            | '»'
            | '›'
            | '”'
            | '’'
            | '」'
            | '』'
            | '）'
            | '】'
            | '〉'
            | '》'
            | '〕'
    )
}

struct Splitter<'a> {
    chars: &'a [char],
    rules: &'a LanguageRules,
    sentences: Vec<Sentence>,
    candidates: Vec<BoundaryCandidate>,
    /// Start of the sentence being built
    start: usize,
    soft_breaks: SmallVec<[usize; 2]>,
}

impl<'a> Splitter<'a> {
    fn new(chars: &'a [char], rules: &'a LanguageRules) -> Self {
        Self {
            chars,
            rules,
            sentences: Vec::new(),
            candidates: Vec::new(),
            start: 0,
            soft_breaks: SmallVec::new(),
        }
    }

    fn run(mut self) -> SplitReport {
        let len = self.chars.len();
        let mut i = 0;

        while i < len {
            let ch = self.chars[i];

            if ch == '\n' {
                let (ws_end, newlines) = self.whitespace_run(i);
                if newlines >= 2 {
                    if self.has_content(self.start, i) {
                        self.emit(ws_end, Terminator::Paragraph, true);
                    }
                    i = ws_end;
                } else {
                    i += 1;
                }
                continue;
            }

            if self.rules.is_split_char(ch) {
                i = self.evaluate_candidate(i);
                continue;
            }

            i += 1;
        }

        if self.start < len {
            self.emit(len, Terminator::EndOfText, false);
        }

        SplitReport {
            sentences: self.sentences,
            candidates: self.candidates,
        }
    }

    /// Evaluate the split-character run starting at `first`; returns where
    /// scanning resumes.
    fn evaluate_candidate(&mut self, first: usize) -> usize {
        let len = self.chars.len();

        let mut last = first;
        while last + 1 < len && self.rules.is_split_char(self.chars[last + 1]) {
            last += 1;
        }
        let after_marks = last + 1;

        let mut closers_end = after_marks;
        while closers_end < len && is_closing_char(self.chars[closers_end]) {
            closers_end += 1;
        }

        let (ws_end, newlines) = self.whitespace_run(closers_end);
        let following = self.chars.get(ws_end).copied();
        let attached = self
            .chars
            .get(after_marks)
            .is_some_and(|c| c.is_alphanumeric());

        let context = BoundaryContext {
            mark: self.chars[last],
            preceding_word: self.preceding_word(first),
            exception: self
                .rules
                .exceptions()
                .longest_ending_at(self.chars, after_marks)
                .map(|m| m.exception),
            following: FollowingChar::classify(following),
            attached,
        };
        let decision = decide(&context);

        tracing::trace!(
            offset = last,
            mark = %context.mark,
            preceding = %context.preceding_word,
            ?decision,
            "boundary candidate"
        );

        self.candidates.push(BoundaryCandidate {
            offset: last,
            sentence: self.sentences.len() + 1,
            mark: context.mark,
            preceding_word: context.preceding_word,
            decision,
        });

        match decision {
            BoundaryDecision::SentenceEnd => {
                self.emit(ws_end, Terminator::Punctuation(self.chars[last]), newlines >= 2);
                ws_end
            }
            BoundaryDecision::SoftBreak => {
                self.soft_breaks.push(after_marks - self.start);
                after_marks
            }
            BoundaryDecision::NotBoundary(_) => after_marks,
        }
    }

    /// Maximal alphanumeric run ending right before `mark`
    fn preceding_word(&self, mark: usize) -> String {
        let begin = self.chars[self.start..mark]
            .iter()
            .rposition(|c| !c.is_alphanumeric())
            .map_or(self.start, |p| self.start + p + 1);
        self.chars[begin..mark].iter().collect()
    }

    /// End of the whitespace run starting at `from` and the number of
    /// newlines in it
    fn whitespace_run(&self, from: usize) -> (usize, usize) {
        let mut end = from;
        let mut newlines = 0;
        while end < self.chars.len() && self.chars[end].is_whitespace() {
            if self.chars[end] == '\n' {
                newlines += 1;
            }
            end += 1;
        }
        (end, newlines)
    }

    fn has_content(&self, from: usize, to: usize) -> bool {
        self.chars[from..to].iter().any(|c| !c.is_whitespace())
    }

    fn emit(&mut self, end: usize, terminator: Terminator, ends_paragraph: bool) {
        let text: String = self.chars[self.start..end].iter().collect();
        self.sentences.push(Sentence {
            index: self.sentences.len() + 1,
            text,
            start: self.start,
            end,
            terminator,
            ends_paragraph,
            soft_breaks: std::mem::take(&mut self.soft_breaks),
        });
        self.start = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> LanguageRules {
        LanguageRules::builder("en", "English")
            .split_chars(".!?")
            .exceptions(["Mr.", "Dr.", "e.g."])
            .word_chars("a-zA-Z")
            .build()
            .unwrap()
    }

    fn texts(sentences: &[Sentence]) -> Vec<&str> {
        sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_basic_split() {
        let sentences = split("Hello world. This is a test.", &english());
        assert_eq!(texts(&sentences), vec!["Hello world. ", "This is a test."]);
        assert_eq!(sentences[0].index, 1);
        assert_eq!(sentences[1].index, 2);
        assert_eq!(sentences[0].terminator, Terminator::Punctuation('.'));
        assert_eq!(sentences[1].start, 13);
    }

    #[test]
    fn test_empty_input() {
        assert!(split("", &english()).is_empty());
    }

    #[test]
    fn test_no_terminal_punctuation() {
        let sentences = split("no punctuation here", &english());
        assert_eq!(texts(&sentences), vec!["no punctuation here"]);
        assert_eq!(sentences[0].terminator, Terminator::EndOfText);
    }

    #[test]
    fn test_exception_produces_soft_break() {
        let sentences = split("Dr. Smith is here.", &english());
        assert_eq!(texts(&sentences), vec!["Dr. Smith is here."]);
        assert_eq!(sentences[0].soft_breaks.as_slice(), &[3]);
    }

    #[test]
    fn test_exception_inside_second_sentence() {
        let sentences = split("Hi. Then Mr. Smith came.", &english());
        assert_eq!(texts(&sentences), vec!["Hi. ", "Then Mr. Smith came."]);
        assert_eq!(sentences[1].soft_breaks.as_slice(), &[8]);
    }

    #[test]
    fn test_question_and_exclamation() {
        let sentences = split("Really? Yes! Fine.", &english());
        assert_eq!(texts(&sentences), vec!["Really? ", "Yes! ", "Fine."]);
    }

    #[test]
    fn test_mark_run_is_one_candidate() {
        let report = split_explained("What?! No... Wait... what now?", &english());
        assert_eq!(
            texts(&report.sentences),
            vec!["What?! ", "No... ", "Wait... what now?"]
        );
        assert_eq!(report.candidates.len(), 4);
        assert_eq!(
            report.candidates[2].decision,
            BoundaryDecision::NotBoundary(NonTerminal::LowercaseFollows)
        );
    }

    #[test]
    fn test_closing_quote_stays_with_sentence() {
        let sentences = split("He said \"Stop.\" Then he left.", &english());
        assert_eq!(texts(&sentences), vec!["He said \"Stop.\" ", "Then he left."]);
    }

    #[test]
    fn test_quoted_lowercase_continuation() {
        let sentences = split("\"Wow!\" she said.", &english());
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_decimal_and_attached_marks() {
        assert_eq!(split("The value is 3.14.", &english()).len(), 1);
        assert_eq!(split("Ch.10 continues.", &english()).len(), 1);
        assert_eq!(split("See e.g. this case.", &english()).len(), 1);
    }

    #[test]
    fn test_numeric_heuristic() {
        let sentences = split("The year is 2024. It was fine.", &english());
        assert_eq!(texts(&sentences), vec!["The year is 2024. ", "It was fine."]);

        let sentences = split("See chapter 10. It was fine.", &english());
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_initials() {
        let sentences = split("J. R. Tolkien wrote it. Then more.", &english());
        assert_eq!(
            texts(&sentences),
            vec!["J. R. Tolkien wrote it. ", "Then more."]
        );
    }

    #[test]
    fn test_paragraph_break_always_ends_sentence() {
        let sentences = split("First line without stop\n\nSecond paragraph", &english());
        assert_eq!(
            texts(&sentences),
            vec!["First line without stop\n\n", "Second paragraph"]
        );
        assert_eq!(sentences[0].terminator, Terminator::Paragraph);
        assert!(sentences[0].ends_paragraph);
        assert!(!sentences[1].ends_paragraph);
    }

    #[test]
    fn test_paragraph_break_after_abbreviation() {
        let sentences = split("Signed by Dr.\n\nNext part.", &english());
        assert_eq!(texts(&sentences), vec!["Signed by Dr.\n\n", "Next part."]);
    }

    #[test]
    fn test_paragraph_after_punctuation_is_flagged() {
        let sentences = split("One.\n \nTwo.", &english());
        assert_eq!(texts(&sentences), vec!["One.\n \n", "Two."]);
        assert_eq!(sentences[0].terminator, Terminator::Punctuation('.'));
        assert!(sentences[0].ends_paragraph);
    }

    #[test]
    fn test_single_newline_is_not_a_break() {
        let sentences = split("line one\nline two", &english());
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_leading_blank_lines_stay_in_first_sentence() {
        let sentences = split("\n\nHello.", &english());
        assert_eq!(texts(&sentences), vec!["\n\nHello."]);
    }

    #[test]
    fn test_crlf_normalized() {
        let sentences = split("One.\r\n\r\nTwo.", &english());
        assert_eq!(texts(&sentences), vec!["One.\n\n", "Two."]);
    }

    #[test]
    fn test_whitespace_only_input() {
        let sentences = split("   ", &english());
        assert_eq!(texts(&sentences), vec!["   "]);
        assert!(sentences[0].is_blank());
    }

    #[test]
    fn test_offsets_are_char_based() {
        let rules = LanguageRules::preset("ja").unwrap();
        let sentences = split("日本語です。次の文！", &rules);
        assert_eq!(texts(&sentences), vec!["日本語です。", "次の文！"]);
        assert_eq!(sentences[1].start, 6);
        assert_eq!(sentences[1].end, 10);
    }

    #[test]
    fn test_lossless_concatenation() {
        let text = "Mr. Smith paid 3.50 dollars!  Then? \"Yes.\"\n\n\nNew para. end";
        let joined: String = split(text, &english())
            .into_iter()
            .map(|s| s.text)
            .collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn test_candidates_record_sentence_index() {
        let report = split_explained("A bc. Dr. C d.", &english());
        assert_eq!(report.candidates.len(), 3);
        assert_eq!(report.candidates[0].sentence, 1);
        assert_eq!(report.candidates[1].decision, BoundaryDecision::SoftBreak);
        assert_eq!(report.candidates[1].sentence, 2);
    }
}
