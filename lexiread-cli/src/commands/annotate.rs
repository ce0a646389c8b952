//! Annotate command: overlay a vocabulary snapshot on texts

use super::common::{LanguageArgs, OutputArgs, RunArgs};
use crate::{
    input::{collect_inputs, load_lemmas, load_vocabulary},
    CliError,
};
use anyhow::Result;
use clap::Args;
use std::collections::HashMap;
use std::path::PathBuf;

/// Arguments for the annotate command
#[derive(Debug, Args)]
pub struct AnnotateArgs {
    /// Input files or patterns (supports glob, `-` reads stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Vocabulary snapshot (JSON array of entries)
    #[arg(long, value_name = "FILE", required = true)]
    pub vocabulary: PathBuf,

    /// Surface-form to lemma table (JSON object) used when a word has no entry
    #[arg(long, value_name = "FILE")]
    pub lemmas: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub language: LanguageArgs,

    #[command(flatten)]
    pub run: RunArgs,
}

impl AnnotateArgs {
    /// Execute the annotate command
    pub fn execute(&self) -> Result<()> {
        let config = self.run.setup()?;
        log::debug!("Arguments: {:?}", self);

        let annotator = self.run.annotator(&config, &self.language)?;
        let vocabulary = load_vocabulary(&self.vocabulary, annotator.rules())?;
        let lemmas = match &self.lemmas {
            Some(path) => load_lemmas(path)?,
            None => HashMap::new(),
        };

        let inputs = collect_inputs(&self.input)?;
        let total = inputs.len();
        let (names, inputs): (Vec<String>, Vec<_>) =
            inputs.into_iter().map(|n| (n.name, n.input)).unzip();

        let results = annotator.annotate_batch_with_lemmas(inputs, &vocabulary, &lemmas)?;

        let mut formatter = self.output.formatter(&config, total > 1)?;
        let mut failed = 0;
        for (name, result) in names.iter().zip(results) {
            match result {
                Ok(text) => {
                    log::info!(
                        "{}: {} words, {} not recorded",
                        name,
                        text.stats.words,
                        text.stats.unrecorded_words
                    );
                    formatter.format_annotated(name, &text)?;
                }
                Err(e) => {
                    log::error!("{name}: {e}");
                    failed += 1;
                }
            }
        }
        formatter.finish()?;

        if failed > 0 {
            return Err(
                CliError::ProcessingError(format!("{failed} of {total} inputs failed")).into(),
            );
        }
        Ok(())
    }
}
