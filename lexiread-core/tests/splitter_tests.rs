//! Sentence boundary edge cases

use lexiread_core::{split, split_explained, BoundaryDecision, LanguageRules, Terminator};
use lexiread_core::splitter::NonTerminal;

fn rules_with(exceptions: &[&str]) -> LanguageRules {
    LanguageRules::builder("en", "English")
        .split_chars(".!?")
        .exceptions(exceptions.iter().copied())
        .word_chars("a-zA-Z")
        .build()
        .unwrap()
}

fn texts(text: &str, rules: &LanguageRules) -> Vec<String> {
    split(text, rules).into_iter().map(|s| s.text).collect()
}

#[test]
fn test_exception_list_suppresses_splitting() {
    let rules = rules_with(&["Dr."]);
    assert_eq!(texts("Dr. Smith is here.", &rules), vec!["Dr. Smith is here."]);

    let without = rules_with(&[]);
    assert_eq!(
        texts("Dr. Smith is here.", &without),
        vec!["Dr. ", "Smith is here."]
    );
}

#[test]
fn test_decimal_is_not_a_boundary() {
    let rules = rules_with(&[]);
    assert_eq!(texts("The value is 3.14.", &rules), vec!["The value is 3.14."]);
}

#[test]
fn test_long_number_ends_sentence() {
    let rules = rules_with(&[]);
    let sentences = split("The year is 2024.", &rules);
    assert_eq!(sentences.len(), 1);
    assert_eq!(sentences[0].terminator, Terminator::Punctuation('.'));
    assert!(sentences[0].text.ends_with("2024."));

    assert_eq!(
        texts("It was 1999. Then came 2000.", &rules),
        vec!["It was 1999. ", "Then came 2000."]
    );
}

#[test]
fn test_short_number_is_non_terminal() {
    let rules = rules_with(&[]);
    assert_eq!(texts("Ch.10 continues.", &rules), vec!["Ch.10 continues."]);

    let report = split_explained("See page 12. It helps.", &rules);
    assert_eq!(report.sentences.len(), 1);
    assert_eq!(
        report.candidates[0].decision,
        BoundaryDecision::NotBoundary(NonTerminal::ShortNumber)
    );
}

#[test]
fn test_single_letter_initials() {
    let rules = rules_with(&[]);
    assert_eq!(
        texts("Written by A. Smith. Published later.", &rules),
        vec!["Written by A. Smith. ", "Published later."]
    );
}

#[test]
fn test_lowercase_continuation() {
    let rules = rules_with(&[]);
    assert_eq!(
        texts("Use approx. two cups. Stir well.", &rules),
        vec!["Use approx. two cups. ", "Stir well."]
    );
}

#[test]
fn test_ellipsis_mid_sentence_and_at_end() {
    let rules = rules_with(&[]);
    assert_eq!(
        texts("Well... maybe. Or not...", &rules),
        vec!["Well... maybe. ", "Or not..."]
    );
}

#[test]
fn test_exception_is_case_sensitive() {
    let rules = rules_with(&["Dr."]);
    assert_eq!(
        texts("Ask the dr. Then leave.", &rules),
        vec!["Ask the dr. ", "Then leave."]
    );
}

#[test]
fn test_exception_requires_word_start() {
    let rules = rules_with(&["Dr."]);
    assert_eq!(
        texts("It is XDr. Then leave.", &rules),
        vec!["It is XDr. ", "Then leave."]
    );
    assert_eq!(texts("Call (Dr. Who) now.", &rules), vec!["Call (Dr. Who) now."]);
}

#[test]
fn test_quotes_belong_to_sentence() {
    let rules = rules_with(&[]);
    assert_eq!(
        texts("\"Run!\" He ran. (It was late.) Done.", &rules),
        vec!["\"Run!\" ", "He ran. ", "(It was late.) ", "Done."]
    );
}

#[test]
fn test_paragraphs() {
    let rules = rules_with(&[]);
    let sentences = split("Title\n\nFirst sentence. Second one.\r\n\r\nLast", &rules);
    let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["Title\n\n", "First sentence. ", "Second one.\n\n", "Last"]
    );
    let ends: Vec<bool> = sentences.iter().map(|s| s.ends_paragraph).collect();
    assert_eq!(ends, vec![true, false, true, false]);
}

#[test]
fn test_empty_and_unpunctuated_input() {
    let rules = rules_with(&[]);
    assert!(split("", &rules).is_empty());

    let sentences = split("no terminal punctuation at all", &rules);
    assert_eq!(sentences.len(), 1);
    assert_eq!(sentences[0].index, 1);
    assert_eq!(sentences[0].terminator, Terminator::EndOfText);
}

#[test]
fn test_sentence_offsets_are_contiguous() {
    let rules = rules_with(&["Mr."]);
    let text = "Mr. A. Jones arrived! Was it 10.30? Yes.\n\nNew day.";
    let sentences = split(text, &rules);

    let mut expected_start = 0;
    for (i, sentence) in sentences.iter().enumerate() {
        assert_eq!(sentence.index, i + 1);
        assert_eq!(sentence.start, expected_start);
        assert_eq!(sentence.char_len(), sentence.text.chars().count());
        expected_start = sentence.end;
    }
    assert_eq!(expected_start, text.chars().count());
}
