//! End-to-end integration tests for the complete annotation pipeline

use lexiread_core::{
    overlay, split, tokenize, Annotator, Input, LanguageRules, SegmentKind, TermStatus,
    Vocabulary, VocabularyEntry,
};

fn scenario_rules() -> LanguageRules {
    LanguageRules::builder("en", "English")
        .split_chars(".!?")
        .exceptions(["Mr.", "Dr."])
        .word_chars("[a-zA-Z]")
        .build()
        .unwrap()
}

#[test]
fn test_abbreviation_scenario() {
    let rules = scenario_rules();
    let vocabulary =
        Vocabulary::from_entries([VocabularyEntry::new(1, "hello", TermStatus::Learned)]).unwrap();

    let sentences = split("Mr. Smith said hello.", &rules);
    assert_eq!(sentences.len(), 1);
    assert_eq!(sentences[0].text, "Mr. Smith said hello.");

    let tokens = tokenize(&sentences[0].text, &rules);
    let segments = overlay(tokens, &vocabulary);

    let terms: Vec<_> = segments.iter().filter(|s| s.is_term()).collect();
    assert_eq!(terms.len(), 1);
    assert_eq!(terms[0].text(), "hello");
    assert_eq!(terms[0].term.unwrap().status, TermStatus::Learned);

    let rebuilt: String = segments.iter().map(|s| s.text()).collect();
    assert_eq!(rebuilt, "Mr. Smith said hello.");
    assert_eq!(segments.last().unwrap().text(), ".");
    assert_eq!(segments.last().unwrap().kind, SegmentKind::Plain);
}

#[test]
fn test_greedy_longest_multi_word_match() {
    let rules = scenario_rules();
    let vocabulary = Vocabulary::from_entries([
        VocabularyEntry::new(1, "new york", TermStatus::Learning2),
        VocabularyEntry::new(2, "new", TermStatus::Learned),
    ])
    .unwrap();

    let segments = overlay(tokenize("new york city", &rules), &vocabulary);
    let summary: Vec<(String, bool)> = segments.iter().map(|s| (s.text(), s.is_term())).collect();
    assert_eq!(
        summary,
        vec![
            ("new york".to_string(), true),
            (" ".to_string(), false),
            ("city".to_string(), false),
        ]
    );
    assert_eq!(segments[0].term.unwrap().word_count, 2);
}

#[test]
fn test_multi_word_match_never_crosses_sentences() {
    let rules = scenario_rules();
    let vocabulary =
        Vocabulary::from_entries([VocabularyEntry::new(1, "end start", TermStatus::Unknown)])
            .unwrap();
    let annotator = Annotator::new(rules);

    let output = annotator
        .annotate(Input::from_text("This is the end. Start again."), &vocabulary)
        .unwrap();
    assert_eq!(output.sentences.len(), 2);
    assert!(output
        .sentences
        .iter()
        .flat_map(|s| &s.segments)
        .all(|segment| !segment.is_term()));
}

#[test]
fn test_annotation_is_deterministic() {
    let annotator = Annotator::with_language("en").unwrap();
    let vocabulary = Vocabulary::from_entries([
        VocabularyEntry::new(3, "take off", TermStatus::Learning1),
        VocabularyEntry::new(1, "take on", TermStatus::Learning4),
        VocabularyEntry::new(2, "plane", TermStatus::WellKnown),
    ])
    .unwrap();
    let text = "The plane will take off soon. Dr. Who will take on the task!";

    let first = annotator.annotate(Input::from_text(text), &vocabulary).unwrap();
    let second = annotator.annotate(Input::from_text(text), &vocabulary).unwrap();
    assert_eq!(first.sentences, second.sentences);
    assert_eq!(first.stats, second.stats);
    assert_eq!(first.sentences.len(), 2);
    assert_eq!(first.stats.terms_with(TermStatus::WellKnown), 1);
    assert_eq!(first.stats.terms_with(TermStatus::Learning1), 1);
    assert_eq!(first.stats.terms_with(TermStatus::Learning4), 1);
}

#[test]
fn test_substitutions_apply_before_tokenizing() {
    let annotator = Annotator::with_language("en").unwrap();
    let vocabulary = Vocabulary::new();

    // The preset folds the typographic apostrophe into ASCII, but ASCII "'"
    // is not a word character, so "don't" splits into two words.
    let output = annotator
        .annotate(Input::from_text("I don’t know."), &vocabulary)
        .unwrap();
    assert_eq!(output.sentences[0].sentence.text, "I don't know.");
    assert_eq!(output.stats.words, 4);
}

#[test]
fn test_preview_reports_boundary_decisions() {
    let annotator = Annotator::with_language("en").unwrap();
    let preview = annotator
        .preview(Input::from_text("It costs 3.50 today. See Dr. Lee."))
        .unwrap();

    let decisions: Vec<String> = preview
        .candidates
        .iter()
        .map(|c| serde_json::to_value(c.decision).unwrap()["decision"].to_string())
        .collect();
    assert_eq!(
        decisions,
        vec![
            "\"not_boundary\"",
            "\"sentence_end\"",
            "\"soft_break\"",
            "\"sentence_end\""
        ]
    );
    assert_eq!(preview.sentences.len(), 2);
    assert_eq!(preview.sentences[1].sentence.soft_breaks.as_slice(), &[7]);
}
