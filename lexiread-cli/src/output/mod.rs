//! Output formatting module

use anyhow::Result;
use lexiread_core::{
    domain::splitter::{BoundaryDecision, NonTerminal},
    AnnotatedText, Preview, SimilarTerm,
};
use serde::{Deserialize, Serialize};
use std::io::Write;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One sentence per line, terms marked inline as {text|status}
    #[default]
    Text,
    /// JSON array with one document per input
    Json,
    /// Markdown numbered lists with highlighted terms
    Markdown,
}

/// What a preview shows besides the sentences
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewOptions {
    /// List every token under its sentence
    pub tokens: bool,
    /// List every boundary candidate and the decision taken there
    pub explain: bool,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Sentences and tokens of one input
    fn format_preview(&mut self, source: &str, preview: &Preview, options: PreviewOptions)
        -> Result<()>;

    /// Overlay segments of one input
    fn format_annotated(&mut self, source: &str, text: &AnnotatedText<'_>) -> Result<()>;

    /// Suggestions for one term
    fn format_similar(&mut self, term: &str, similar: &[SimilarTerm<'_>]) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Formatter for `format` writing to `writer`
///
/// With `show_sources` the text and markdown formats put a heading with the
/// input name before each document; JSON always records it.
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    show_sources: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer).show_sources(show_sources)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => {
            Box::new(MarkdownFormatter::new(writer).show_sources(show_sources))
        }
    }
}

/// Human-readable boundary decision
pub fn decision_label(decision: BoundaryDecision) -> &'static str {
    match decision {
        BoundaryDecision::SentenceEnd => "sentence end",
        BoundaryDecision::SoftBreak => "abbreviation (soft break)",
        BoundaryDecision::NotBoundary(NonTerminal::Attached) => "no break: attached to next word",
        BoundaryDecision::NotBoundary(NonTerminal::Initial) => "no break: initial",
        BoundaryDecision::NotBoundary(NonTerminal::ShortNumber) => "no break: short number",
        BoundaryDecision::NotBoundary(NonTerminal::LowercaseFollows) => {
            "no break: lowercase follows"
        }
    }
}

/// Sentence text on a single line
pub(crate) fn one_line(text: &str) -> String {
    text.trim().replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_format_names() {
        let names: Vec<String> = OutputFormat::value_variants()
            .iter()
            .filter_map(|f| f.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        assert_eq!(names, vec!["text", "json", "markdown"]);
    }

    #[test]
    fn test_decision_labels() {
        assert_eq!(decision_label(BoundaryDecision::SentenceEnd), "sentence end");
        assert_eq!(
            decision_label(BoundaryDecision::NotBoundary(NonTerminal::Initial)),
            "no break: initial"
        );
    }

    #[test]
    fn test_one_line() {
        assert_eq!(one_line("First\nline. "), "First line.");
    }
}
