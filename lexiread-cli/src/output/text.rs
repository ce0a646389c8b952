//! Plain text output formatter

use super::{decision_label, one_line, OutputFormatter, PreviewOptions};
use anyhow::Result;
use lexiread_core::{AnnotatedText, Preview, SimilarTerm, Token};
use std::io::Write;

/// Plain text formatter - one sentence per line, a blank line after each
/// paragraph
pub struct TextFormatter<W: Write> {
    writer: W,
    show_sources: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            show_sources: false,
        }
    }

    /// Print a `==> name <==` heading before each document
    pub fn show_sources(mut self, enabled: bool) -> Self {
        self.show_sources = enabled;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn heading(&mut self, source: &str) -> Result<()> {
        if self.show_sources {
            writeln!(self.writer, "==> {source} <==")?;
        }
        Ok(())
    }
}

/// Tokens inline, OTHER tokens in brackets
fn token_line(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| {
            let text = token.text.replace('\n', "\\n");
            if token.is_word() {
                text
            } else {
                format!("[{text}]")
            }
        })
        .collect()
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_preview(
        &mut self,
        source: &str,
        preview: &Preview,
        options: PreviewOptions,
    ) -> Result<()> {
        self.heading(source)?;
        for tokenized in &preview.sentences {
            let sentence = &tokenized.sentence;
            writeln!(self.writer, "{}", one_line(&sentence.text))?;

            if options.tokens {
                writeln!(self.writer, "  tokens: {}", token_line(&tokenized.tokens))?;
            }
            if options.explain {
                for candidate in preview
                    .candidates
                    .iter()
                    .filter(|c| c.sentence == sentence.index)
                {
                    writeln!(
                        self.writer,
                        "  @{} '{}' after '{}': {}",
                        candidate.offset,
                        candidate.mark,
                        candidate.preceding_word,
                        decision_label(candidate.decision)
                    )?;
                }
            }
            if sentence.ends_paragraph {
                writeln!(self.writer)?;
            }
        }
        Ok(())
    }

    fn format_annotated(&mut self, source: &str, text: &AnnotatedText<'_>) -> Result<()> {
        self.heading(source)?;
        for annotated in &text.sentences {
            let mut line = String::new();
            for segment in &annotated.segments {
                match segment.term {
                    Some(entry) => {
                        line.push('{');
                        line.push_str(&segment.text());
                        line.push('|');
                        line.push_str(entry.status.label());
                        line.push('}');
                    }
                    None => line.push_str(&segment.text()),
                }
            }
            writeln!(self.writer, "{}", one_line(&line))?;
            if annotated.sentence.ends_paragraph {
                writeln!(self.writer)?;
            }
        }
        Ok(())
    }

    fn format_similar(&mut self, term: &str, similar: &[SimilarTerm<'_>]) -> Result<()> {
        if similar.is_empty() {
            writeln!(self.writer, "No similar terms for '{term}'")?;
            return Ok(());
        }
        for suggestion in similar {
            let entry = suggestion.entry;
            write!(
                self.writer,
                "{:.3}\t{}\t{}",
                suggestion.score,
                entry.text,
                entry.status.label()
            )?;
            if let Some(translation) = &entry.translation {
                write!(self.writer, "\t{translation}")?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
