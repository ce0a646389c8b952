//! Validate command implementation

use crate::output::one_line;
use anyhow::Result;
use clap::Args;
use lexiread_core::{Annotator, Input, LanguageRules};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to language configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,

    /// Sample text to split with the rules once they load
    #[arg(short, long, value_name = "TEXT")]
    pub sample: Option<String>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating language configuration: {}",
            self.language_config.display()
        );

        let rules = match LanguageRules::from_file(&self.language_config, None) {
            Ok(rules) => rules,
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                return Err(anyhow::Error::new(crate::CliError::ConfigError(e.to_string()))
                    .context("Validation failed"));
            }
        };

        println!("✓ Configuration is valid!");
        println!("  Language code: {}", rules.code());
        println!("  Language name: {}", rules.name());
        let split_chars: String = rules.split_chars().sorted().into_iter().collect();
        println!("  Split characters: {split_chars}");
        println!("  Exceptions: {}", rules.exceptions().entries().len());
        println!("  Substitutions: {}", rules.substitutions().len());
        println!(
            "  Word characters: {}",
            rules.word_chars().source().unwrap_or("(default)")
        );
        if rules.right_to_left() {
            println!("  Right-to-left: yes");
        }

        if let Some(sample) = &self.sample {
            let preview = Annotator::new(rules).preview(Input::from_text(sample.as_str()))?;
            println!(
                "  Sample: {} sentence(s), {} word(s)",
                preview.stats.sentences, preview.stats.words
            );
            for tokenized in &preview.sentences {
                let sentence = &tokenized.sentence;
                println!("    {}. {}", sentence.index, one_line(&sentence.text));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            language_config: PathBuf::from("test.toml"),
            sample: None,
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("test.toml"));
    }

    #[test]
    fn test_validate_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[metadata]
code = "test"
name = "Test Language"

[sentences]
split_chars = ["."]
exceptions = ["approx."]

[words]
chars = "a-z"
"#
        )
        .unwrap();

        let args = ValidateArgs {
            language_config: file.path().to_path_buf(),
            sample: Some("approx. two. three.".to_string()),
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[metadata]
code = "test"
name = "Test Language"

[sentences]
split_chars = []

[words]
"#
        )
        .unwrap();

        let args = ValidateArgs {
            language_config: file.path().to_path_buf(),
            sample: None,
        };
        let error = args.execute().unwrap_err();
        assert_eq!(crate::error::exit_code_for(&error), 2);
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            language_config: PathBuf::from("/nonexistent/config.toml"),
            sample: None,
        };
        assert!(args.execute().is_err());
    }
}
