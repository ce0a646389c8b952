//! Property tests for the pipeline invariants

use lexiread_core::{
    overlay, rank, split, tokenize, LanguageRules, TermStatus, Vocabulary, VocabularyEntry,
};
use lexiread_core::tokenizer::reconstruct;
use proptest::prelude::*;

fn english() -> LanguageRules {
    LanguageRules::builder("en", "English")
        .split_chars(".!?")
        .exceptions(["Mr.", "Dr.", "e.g."])
        .word_chars("a-zA-Z")
        .build()
        .unwrap()
}

/// Text drawn from letters, digits, punctuation, quotes and spacing
fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z]{1,8}",
            "[0-9]{1,4}",
            Just(". ".to_string()),
            Just("!".to_string()),
            Just("? ".to_string()),
            Just("...".to_string()),
            Just("\"".to_string()),
            Just(" ".to_string()),
            Just("\n".to_string()),
            Just("\n\n".to_string()),
            Just("\r\n".to_string()),
            Just("Dr. ".to_string()),
            Just("日本。".to_string()),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn sentences_concatenate_to_input(text in text_strategy()) {
        let rules = english();
        let normalized = text.replace("\r\n", "\n");
        let joined: String = split(&text, &rules).into_iter().map(|s| s.text).collect();
        prop_assert_eq!(joined, normalized);
    }

    #[test]
    fn tokens_reconstruct_every_sentence(text in text_strategy()) {
        let rules = english();
        for sentence in split(&text, &rules) {
            let tokens = tokenize(&sentence.text, &rules);
            let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
            prop_assert_eq!(&joined, &sentence.text);
            prop_assert_eq!(reconstruct(&sentence.text, &tokens), sentence.text.clone());
        }
    }

    #[test]
    fn cjk_tokens_cover_sentence(text in "[日本語の 。、]{0,30}") {
        let rules = LanguageRules::preset("ja").unwrap();
        for sentence in split(&text, &rules) {
            let tokens = tokenize(&sentence.text, &rules);
            prop_assert_eq!(reconstruct(&sentence.text, &tokens), sentence.text.clone());
            for token in &tokens {
                prop_assert_eq!(token.text.chars().count(), 1);
            }
        }
    }

    #[test]
    fn overlay_is_lossless(text in text_strategy()) {
        let rules = english();
        let vocabulary = Vocabulary::from_entries([
            VocabularyEntry::new(1, "a", TermStatus::Learned),
            VocabularyEntry::new(2, "a b", TermStatus::Learning1),
            VocabularyEntry::new(3, "ab", TermStatus::Unknown),
        ])
        .unwrap();

        for sentence in split(&text, &rules) {
            let tokens = tokenize(&sentence.text, &rules);
            let count = tokens.len();
            let segments = overlay(tokens, &vocabulary);
            let joined: String = segments.iter().map(|s| s.text()).collect();
            prop_assert_eq!(&joined, &sentence.text);
            prop_assert_eq!(segments.iter().map(|s| s.tokens.len()).sum::<usize>(), count);
        }
    }

    #[test]
    fn rank_is_symmetric_and_bounded(a in "\\PC{1,12}", b in "\\PC{1,12}") {
        let ab = rank(&a, &b);
        prop_assert_eq!(ab, rank(&b, &a));
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert_eq!(rank(&a, &a), 1.0);
        prop_assert_eq!(rank("", &a), 0.0);
    }
}
