//! Markdown output formatter

use super::{decision_label, one_line, OutputFormatter, PreviewOptions};
use anyhow::Result;
use lexiread_core::{AnnotatedText, Preview, SimilarTerm};
use std::io::Write;

/// Markdown formatter - outputs sentences as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    show_sources: bool,
    sentence_count: usize,
    term_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            show_sources: false,
            sentence_count: 0,
            term_count: 0,
        }
    }

    /// Print a `## name` heading before each document
    pub fn show_sources(mut self, enabled: bool) -> Self {
        self.show_sources = enabled;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn heading(&mut self, source: &str) -> Result<()> {
        if self.show_sources {
            writeln!(self.writer, "## {source}")?;
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

/// Escape characters markdown would treat as emphasis
fn escape(text: &str) -> String {
    text.replace('*', "\\*").replace('_', "\\_")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_preview(
        &mut self,
        source: &str,
        preview: &Preview,
        options: PreviewOptions,
    ) -> Result<()> {
        self.heading(source)?;
        for tokenized in &preview.sentences {
            self.sentence_count += 1;
            let sentence = &tokenized.sentence;
            writeln!(
                self.writer,
                "{}. {}",
                self.sentence_count,
                escape(&one_line(&sentence.text))
            )?;

            if options.tokens {
                let words: Vec<String> = tokenized
                    .tokens
                    .iter()
                    .filter(|t| t.is_word())
                    .map(|t| format!("`{}`", t.text))
                    .collect();
                writeln!(self.writer, "   - words: {}", words.join(" "))?;
            }
            if options.explain {
                for candidate in preview
                    .candidates
                    .iter()
                    .filter(|c| c.sentence == sentence.index)
                {
                    writeln!(
                        self.writer,
                        "   - `{}` after `{}`: {}",
                        candidate.mark,
                        candidate.preceding_word,
                        decision_label(candidate.decision)
                    )?;
                }
            }
        }
        Ok(())
    }

    fn format_annotated(&mut self, source: &str, text: &AnnotatedText<'_>) -> Result<()> {
        self.heading(source)?;
        for annotated in &text.sentences {
            self.sentence_count += 1;
            let mut line = String::new();
            for segment in &annotated.segments {
                match segment.term {
                    Some(entry) => {
                        line.push_str(&format!(
                            "**{}** _({})_",
                            escape(&segment.text()),
                            entry.status.label()
                        ));
                    }
                    None => line.push_str(&escape(&segment.text())),
                }
            }
            writeln!(self.writer, "{}. {}", self.sentence_count, one_line(&line))?;
        }
        Ok(())
    }

    fn format_similar(&mut self, term: &str, similar: &[SimilarTerm<'_>]) -> Result<()> {
        writeln!(self.writer, "## Similar to `{term}`")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Score | Term | Status | Translation |")?;
        writeln!(self.writer, "|------:|------|--------|-------------|")?;
        for suggestion in similar {
            self.term_count += 1;
            let entry = suggestion.entry;
            writeln!(
                self.writer,
                "| {:.3} | {} | {} | {} |",
                suggestion.score,
                escape(&entry.text),
                entry.status.label(),
                entry.translation.as_deref().unwrap_or("")
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        if self.term_count > 0 || self.sentence_count == 0 {
            writeln!(self.writer, "*Total similar terms: {}*", self.term_count)?;
        } else {
            writeln!(self.writer, "*Total sentences: {}*", self.sentence_count)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexiread_core::{Annotator, Input, TermStatus, Vocabulary, VocabularyEntry};

    #[test]
    fn test_annotated_markdown() {
        let annotator = Annotator::with_language("en").unwrap();
        let vocabulary =
            Vocabulary::from_entries([VocabularyEntry::new(1, "hello", TermStatus::Learned)])
                .unwrap();
        let text = annotator
            .annotate(Input::from_text("Hello there. Bye."), &vocabulary)
            .unwrap();

        let mut formatter = MarkdownFormatter::new(Vec::new()).show_sources(true);
        formatter.format_annotated("greeting.txt", &text).unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(
            output,
            "## greeting.txt\n\n1. **Hello** _(learned)_ there.\n2. Bye.\n\n---\n*Total sentences: 2*\n"
        );
    }

    #[test]
    fn test_preview_escapes_emphasis() {
        let annotator = Annotator::with_language("en").unwrap();
        let preview = annotator.preview(Input::from_text("Use *bold* here.")).unwrap();

        let mut formatter = MarkdownFormatter::new(Vec::new());
        formatter
            .format_preview("doc", &preview, PreviewOptions::default())
            .unwrap();
        let output = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(output, "1. Use \\*bold\\* here.\n");
    }
}
