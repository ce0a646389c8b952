//! Sentence-end decision for a single split-character candidate.
//!
//! The decision is a pure function of a [`BoundaryContext`] whose fields are
//! gathered by the splitter. Rules are evaluated in priority order and the
//! first rule that fires wins; each rule is a separate function so it can be
//! tested on its own.

use serde::Serialize;

/// Character class of the first non-space character after a mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowingChar {
    /// Nothing but whitespace or closing punctuation until end of text
    Absent,
    Uppercase(char),
    Lowercase(char),
    /// Digits, uncased scripts, punctuation
    Uncased(char),
}

impl FollowingChar {
    pub fn classify(ch: Option<char>) -> Self {
        match ch {
            None => FollowingChar::Absent,
            Some(c) if c.is_uppercase() => FollowingChar::Uppercase(c),
            Some(c) if c.is_lowercase() => FollowingChar::Lowercase(c),
            Some(c) => FollowingChar::Uncased(c),
        }
    }

    pub fn is_absent(self) -> bool {
        self == FollowingChar::Absent
    }
}

/// Everything the decision needs to know about one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryContext {
    /// Last split character of the candidate run
    pub mark: char,
    /// Maximal run of alphanumeric characters right before the mark run
    pub preceding_word: String,
    /// Exception-list entry ending at the mark, if any
    pub exception: Option<String>,
    /// First non-space character after the mark and any closing quotes
    pub following: FollowingChar,
    /// Mark directly followed by an alphanumeric character, no space between
    pub attached: bool,
}

impl BoundaryContext {
    /// Length of the preceding word in chars
    pub fn preceding_len(&self) -> usize {
        self.preceding_word.chars().count()
    }

    /// Preceding word consists only of digits
    pub fn preceding_is_numeric(&self) -> bool {
        !self.preceding_word.is_empty() && self.preceding_word.chars().all(char::is_numeric)
    }

    fn mark_is_full_stop(&self) -> bool {
        matches!(self.mark, '.' | '．')
    }
}

/// Why a candidate did not end the sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NonTerminal {
    /// Mark glued to the next word ("3.14", "Ch.10")
    Attached,
    /// Single-letter initial ("J. Smith")
    Initial,
    /// Number shorter than three digits ("Ch. 10.")
    ShortNumber,
    /// Next word starts lowercase
    LowercaseFollows,
}

/// Outcome for a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "reason", rename_all = "snake_case")]
pub enum BoundaryDecision {
    /// The sentence ends here
    SentenceEnd,
    /// Exception-list abbreviation: no break, but keep a soft separator
    SoftBreak,
    /// Not a sentence end
    NotBoundary(NonTerminal),
}

type Rule = fn(&BoundaryContext) -> Option<BoundaryDecision>;

/// Rules in priority order
pub const RULES: &[(&str, Rule)] = &[
    ("end_of_text", end_of_text),
    ("exception", exception),
    ("attached", attached),
    ("initial", initial),
    ("short_number", short_number),
    ("lowercase_follows", lowercase_follows),
];

/// Decide whether a candidate ends the sentence
pub fn decide(context: &BoundaryContext) -> BoundaryDecision {
    RULES
        .iter()
        .find_map(|(_, rule)| rule(context))
        .unwrap_or(BoundaryDecision::SentenceEnd)
}

/// Nothing follows: always a sentence end
pub fn end_of_text(context: &BoundaryContext) -> Option<BoundaryDecision> {
    context
        .following
        .is_absent()
        .then_some(BoundaryDecision::SentenceEnd)
}

/// Exception-list match: soft break
pub fn exception(context: &BoundaryContext) -> Option<BoundaryDecision> {
    context
        .exception
        .is_some()
        .then_some(BoundaryDecision::SoftBreak)
}

/// Mark glued between ASCII letters or digits on the left and a word
/// character on the right. Scripts written without spaces ("すごい!次")
/// never trigger it.
pub fn attached(context: &BoundaryContext) -> Option<BoundaryDecision> {
    let ascii_before = context
        .preceding_word
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_alphanumeric());
    (context.attached && ascii_before)
        .then_some(BoundaryDecision::NotBoundary(NonTerminal::Attached))
}

/// Single cased letter before a full stop
pub fn initial(context: &BoundaryContext) -> Option<BoundaryDecision> {
    if !context.mark_is_full_stop() {
        return None;
    }
    let mut chars = context.preceding_word.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_uppercase() || c.is_lowercase() => {
            Some(BoundaryDecision::NotBoundary(NonTerminal::Initial))
        }
        _ => None,
    }
}

/// Numbers with fewer than three digits before a full stop. Longer numbers
/// (years and the like) do end the sentence.
pub fn short_number(context: &BoundaryContext) -> Option<BoundaryDecision> {
    (context.mark_is_full_stop() && context.preceding_is_numeric() && context.preceding_len() < 3)
        .then_some(BoundaryDecision::NotBoundary(NonTerminal::ShortNumber))
}

/// Lowercase continuation
pub fn lowercase_follows(context: &BoundaryContext) -> Option<BoundaryDecision> {
    matches!(context.following, FollowingChar::Lowercase(_))
        .then_some(BoundaryDecision::NotBoundary(NonTerminal::LowercaseFollows))
}
