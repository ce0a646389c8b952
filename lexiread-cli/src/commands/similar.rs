//! Similar command: suggest recorded terms close to new words

use super::common::{LanguageArgs, OutputArgs, RunArgs};
use crate::{input::load_vocabulary, CliError};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the similar command
#[derive(Debug, Args)]
pub struct SimilarArgs {
    /// Terms to look up
    #[arg(value_name = "TERM", required = true)]
    pub terms: Vec<String>,

    /// Vocabulary snapshot (JSON array of entries)
    #[arg(long, value_name = "FILE", required = true)]
    pub vocabulary: PathBuf,

    /// Minimum similarity score in [0, 1] (default: from config, else 0.3)
    #[arg(long, value_name = "SCORE")]
    pub min_rank: Option<f64>,

    /// Maximum number of suggestions per term (default: from config, else 10)
    #[arg(long, value_name = "COUNT")]
    pub max: Option<usize>,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub run: RunArgs,
}

impl SimilarArgs {
    /// Execute the similar command
    pub fn execute(&self) -> Result<()> {
        let config = self.run.setup()?;
        log::debug!("Arguments: {:?}", self);

        let annotator = self.run.annotator(&config, &LanguageArgs::default())?;
        let vocabulary = load_vocabulary(&self.vocabulary, annotator.rules())?;
        let min_rank = self.min_rank.unwrap_or(annotator.config().min_rank());
        let max = self.max.unwrap_or(annotator.config().max_similar());
        if !(0.0..=1.0).contains(&min_rank) {
            return Err(CliError::ConfigError(format!(
                "min rank must be within [0, 1], got {min_rank}"
            ))
            .into());
        }

        let mut formatter = self.output.formatter(&config, false)?;
        for term in &self.terms {
            let similar = annotator.similar_with(term, &vocabulary, min_rank, max);
            log::info!("{}: {} suggestions", term, similar.len());
            formatter.format_similar(term, &similar)?;
        }
        formatter.finish()?;
        Ok(())
    }
}
