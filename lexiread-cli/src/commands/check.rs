//! Check command: preview sentence splitting and tokenization

use super::common::{LanguageArgs, OutputArgs, RunArgs};
use crate::{input::collect_inputs, output::PreviewOptions, CliError};
use anyhow::Result;
use clap::Args;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Input files or patterns (supports glob, `-` reads stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub language: LanguageArgs,

    #[command(flatten)]
    pub run: RunArgs,

    /// Show the tokens of every sentence
    #[arg(long)]
    pub tokens: bool,

    /// Show every boundary candidate and the rule that decided it
    #[arg(long)]
    pub explain: bool,

    /// Inputs are external parser output (`surface<TAB>reading` per line)
    #[arg(long)]
    pub parsed: bool,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> Result<()> {
        let config = self.run.setup()?;
        log::debug!("Arguments: {:?}", self);

        let annotator = self.run.annotator(&config, &self.language)?;
        let inputs = collect_inputs(&self.input)?;
        let mut formatter = self.output.formatter(&config, inputs.len() > 1)?;
        let options = PreviewOptions {
            tokens: self.tokens,
            explain: self.explain,
        };

        let total = inputs.len();
        let mut failed = 0;
        for named in inputs {
            let preview = if self.parsed {
                annotator.preview_parsed(named.input)
            } else {
                annotator.preview(named.input)
            };

            match preview {
                Ok(preview) => {
                    log::info!(
                        "{}: {} sentences, {} words",
                        named.name,
                        preview.stats.sentences,
                        preview.stats.words
                    );
                    formatter.format_preview(&named.name, &preview, options)?;
                }
                Err(e) => {
                    log::error!("{}: {}", named.name, e);
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
