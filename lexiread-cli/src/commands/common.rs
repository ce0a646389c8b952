//! Arguments and setup shared by the commands

use crate::{
    config::CliConfig,
    language_source::LanguageSource,
    output::{create_formatter, OutputFormat, OutputFormatter},
    CliError,
};
use anyhow::{Context, Result};
use clap::Args;
use lexiread_core::{Annotator, Config};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

/// Language selection
#[derive(Debug, Args, Default)]
pub struct LanguageArgs {
    /// Embedded language preset, by code or name (see `list languages`)
    #[arg(short, long, conflicts_with = "language_config")]
    pub language: Option<String>,

    /// External language configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,

    /// Language code overriding the one in the external configuration
    #[arg(long, value_name = "CODE", requires = "language_config")]
    pub language_code: Option<String>,
}

impl LanguageArgs {
    /// Rules source: external file, then `--language`, then the config default
    pub fn source(&self, config: &CliConfig) -> LanguageSource {
        match (&self.language_config, &self.language) {
            (Some(path), _) => LanguageSource::External {
                path: path.clone(),
                language_code: self.language_code.clone(),
            },
            (None, Some(code)) => LanguageSource::Preset(code.clone()),
            (None, None) => LanguageSource::Preset(config.defaults.language.clone()),
        }
    }
}

/// Output destination and format
#[derive(Debug, Args, Default)]
pub struct OutputArgs {
    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl OutputArgs {
    pub fn format(&self, config: &CliConfig) -> OutputFormat {
        self.format.unwrap_or(config.defaults.format)
    }

    /// Formatter writing to the output file or stdout
    pub fn formatter(
        &self,
        config: &CliConfig,
        show_sources: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };
        Ok(create_formatter(self.format(config), writer, show_sources))
    }
}

/// Logging and configuration flags
#[derive(Debug, Args, Default)]
pub struct RunArgs {
    /// CLI configuration file (TOML)
    #[arg(short, long, value_name = "FILE", env = "LEXIREAD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (default: all cores)
    #[arg(short, long, value_name = "COUNT")]
    pub threads: Option<usize>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl RunArgs {
    /// Initialize logging, then load the CLI configuration
    pub fn setup(&self) -> Result<CliConfig> {
        init_logging(self.verbose, self.quiet);
        let config = CliConfig::load_or_default(self.config.as_deref())?;
        log::debug!("Configuration: {config:?}");
        Ok(config)
    }

    /// Annotator for the selected language, tuned by the config and flags
    pub fn annotator(&self, config: &CliConfig, language: &LanguageArgs) -> Result<Annotator> {
        let source = language.source(config);
        let rules = source.load()?;
        log::info!("Using language rules: {}", source.display_name());

        let core_config = Config::builder()
            .threads(self.threads.or_else(|| config.performance.threads()))
            .max_input_bytes(config.performance.max_input_mb.saturating_mul(1024 * 1024))
            .min_rank(config.similar.min_rank)
            .max_similar(config.similar.max_count)
            .build()
            .map_err(|e| anyhow::Error::new(CliError::ConfigError(e.to_string())))?;

        Annotator::with_config(rules, core_config)
            .map_err(|e| anyhow::Error::new(CliError::ConfigError(e.to_string())))
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // Already initialized when several commands run in one process
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_source_precedence() {
        let config = CliConfig::default();

        let args = LanguageArgs::default();
        assert_eq!(args.source(&config), LanguageSource::Preset("en".to_string()));

        let args = LanguageArgs {
            language: Some("ja".to_string()),
            ..Default::default()
        };
        assert_eq!(args.source(&config), LanguageSource::Preset("ja".to_string()));

        let args = LanguageArgs {
            language_config: Some(PathBuf::from("custom.toml")),
            language_code: Some("xx".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            args.source(&config),
            LanguageSource::External { language_code: Some(code), .. } if code == "xx"
        ));
    }

    #[test]
    fn test_format_falls_back_to_config() {
        let mut config = CliConfig::default();
        config.defaults.format = OutputFormat::Json;

        assert_eq!(OutputArgs::default().format(&config), OutputFormat::Json);
        let args = OutputArgs {
            format: Some(OutputFormat::Markdown),
            ..Default::default()
        };
        assert_eq!(args.format(&config), OutputFormat::Markdown);
    }

    #[test]
    fn test_annotator_from_config() {
        let mut config = CliConfig::default();
        config.performance.worker_threads = 3;
        config.similar.max_count = 2;

        let run = RunArgs::default();
        let annotator = run.annotator(&config, &LanguageArgs::default()).unwrap();
        assert_eq!(annotator.config().threads(), Some(3));
        assert_eq!(annotator.config().max_similar(), 2);

        let run = RunArgs {
            threads: Some(0),
            ..Default::default()
        };
        let error = run.annotator(&config, &LanguageArgs::default()).unwrap_err();
        assert_eq!(crate::error::exit_code_for(&error), 2);
    }
}
