//! JSON output formatter

use super::{OutputFormatter, PreviewOptions};
use anyhow::Result;
use lexiread_core::{AnnotatedText, Preview, SimilarTerm};
use serde::Serialize;
use serde_json::Value;
use std::io::Write;

/// JSON formatter - collects one document per input and writes them as a
/// single array on finish
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<Value>,
}

/// One suggestion as written to JSON
#[derive(Debug, Serialize)]
struct SimilarData<'a> {
    id: u64,
    text: &'a str,
    status: u8,
    score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    translation: Option<&'a str>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_preview(
        &mut self,
        source: &str,
        preview: &Preview,
        options: PreviewOptions,
    ) -> Result<()> {
        let mut document = serde_json::to_value(preview)?;
        if !options.explain {
            if let Some(fields) = document.as_object_mut() {
                fields.remove("candidates");
            }
        }
        self.documents
            .push(serde_json::json!({ "source": source, "preview": document }));
        Ok(())
    }

    fn format_annotated(&mut self, source: &str, text: &AnnotatedText<'_>) -> Result<()> {
        let annotated = serde_json::to_value(text)?;
        self.documents
            .push(serde_json::json!({ "source": source, "annotated": annotated }));
        Ok(())
    }

    fn format_similar(&mut self, term: &str, similar: &[SimilarTerm<'_>]) -> Result<()> {
        let suggestions: Vec<SimilarData<'_>> = similar
            .iter()
            .map(|s| SimilarData {
                id: s.entry.id,
                text: &s.entry.text,
                status: s.entry.status.code(),
                score: s.score,
                translation: s.entry.translation.as_deref(),
            })
            .collect();
        let suggestions = serde_json::to_value(suggestions)?;
        self.documents
            .push(serde_json::json!({ "term": term, "similar": suggestions }));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
