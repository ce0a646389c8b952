//! Annotation facade over the pipeline

use std::time::Instant;

use crate::api::{AnnotatedText, Config, Error, Input, Preview, TextStats};
use crate::domain::{
    external::parse_line_output,
    overlay::{LemmaLookup, NoLemmas},
    similarity::{find_similar, SimilarTerm},
    vocabulary::{normalize_key, Vocabulary},
    LanguageRules,
};
use crate::processing::{annotate_text, map_ordered, segment_text};

/// Annotates texts of one language.
///
/// Holds the compiled rules and the configuration; every call is otherwise
/// independent and the annotator can be shared between threads.
#[derive(Debug, Clone)]
pub struct Annotator {
    rules: LanguageRules,
    config: Config,
}

impl Annotator {
    /// Create an annotator with default configuration
    pub fn new(rules: LanguageRules) -> Self {
        Self {
            rules,
            config: Config::default(),
        }
    }

    /// Create an annotator with custom configuration
    pub fn with_config(rules: LanguageRules, config: Config) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self { rules, config })
    }

    /// Create an annotator for an embedded language preset
    pub fn with_language(code: &str) -> Result<Self, Error> {
        Ok(Self::new(LanguageRules::preset(code)?))
    }

    pub fn rules(&self) -> &LanguageRules {
        &self.rules
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Split and tokenize without any vocabulary
    pub fn preview(&self, input: Input) -> Result<Preview, Error> {
        let text = input.into_text(self.config.max_input_bytes)?;
        let segmentation = segment_text(&text, &self.rules);

        Ok(Preview {
            language: self.rules.code().to_string(),
            right_to_left: self.rules.right_to_left(),
            stats: TextStats::from_tokenized(&segmentation.sentences),
            sentences: segmentation.sentences,
            candidates: segmentation.candidates,
        })
    }

    /// Preview of a token stream produced by an external parser, one
    /// `surface[<TAB>reading]` line per token. No boundary candidates are
    /// reported since the parser already decided the sentence ends.
    pub fn preview_parsed(&self, input: Input) -> Result<Preview, Error> {
        let output = input.into_text(self.config.max_input_bytes)?;
        let sentences = parse_line_output(&output, &self.rules);

        Ok(Preview {
            language: self.rules.code().to_string(),
            right_to_left: self.rules.right_to_left(),
            stats: TextStats::from_tokenized(&sentences),
            sentences,
            candidates: Vec::new(),
        })
    }

    /// Run the full pipeline
    pub fn annotate<'v>(
        &self,
        input: Input,
        vocabulary: &'v Vocabulary,
    ) -> Result<AnnotatedText<'v>, Error> {
        self.annotate_with_lemmas(input, vocabulary, &NoLemmas)
    }

    /// Run the full pipeline, falling back to lemmas for single words
    pub fn annotate_with_lemmas<'v, L>(
        &self,
        input: Input,
        vocabulary: &'v Vocabulary,
        lemmas: &L,
    ) -> Result<AnnotatedText<'v>, Error>
    where
        L: LemmaLookup + ?Sized,
    {
        let start = Instant::now();
        let text = input.into_text(self.config.max_input_bytes)?;
        let sentences = annotate_text(&text, &self.rules, vocabulary, lemmas);
        let stats = TextStats::from_annotated(&sentences);

        tracing::debug!(
            language = self.rules.code(),
            sentences = stats.sentences,
            words = stats.words,
            elapsed_us = start.elapsed().as_micros() as u64,
            "annotated input"
        );

        Ok(AnnotatedText {
            language: self.rules.code().to_string(),
            right_to_left: self.rules.right_to_left(),
            sentences,
            stats,
        })
    }

    /// Annotate many documents; results keep input order and one failing
    /// input does not affect the others
    pub fn annotate_batch<'v>(
        &self,
        inputs: Vec<Input>,
        vocabulary: &'v Vocabulary,
    ) -> Result<Vec<Result<AnnotatedText<'v>, Error>>, Error> {
        self.annotate_batch_with_lemmas(inputs, vocabulary, &NoLemmas)
    }

    /// [`Annotator::annotate_batch`] with a lemma fallback
    pub fn annotate_batch_with_lemmas<'v, L>(
        &self,
        inputs: Vec<Input>,
        vocabulary: &'v Vocabulary,
        lemmas: &L,
    ) -> Result<Vec<Result<AnnotatedText<'v>, Error>>, Error>
    where
        L: LemmaLookup + Sync + ?Sized,
    {
        let results = map_ordered(inputs, self.config.threads, |input| {
            self.annotate_with_lemmas(input, vocabulary, lemmas)
        })?;
        Ok(results)
    }

    /// Known terms orthographically close to `term`, using the configured
    /// defaults
    pub fn similar<'v>(&self, term: &str, vocabulary: &'v Vocabulary) -> Vec<SimilarTerm<'v>> {
        self.similar_with(term, vocabulary, self.config.min_rank, self.config.max_similar)
    }

    /// Known terms orthographically close to `term`. The term is compared by
    /// its lowercase key and never suggests itself.
    pub fn similar_with<'v>(
        &self,
        term: &str,
        vocabulary: &'v Vocabulary,
        min_rank: f64,
        max_count: usize,
    ) -> Vec<SimilarTerm<'v>> {
        let key = normalize_key(term);
        find_similar(
            &key,
            vocabulary.entries().iter().filter(|e| e.key != key),
            min_rank,
            max_count,
        )
    }
}
