//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};

use crate::output::OutputFormat;

pub mod annotate;
pub mod check;
pub mod common;
pub mod similar;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Preview sentence splitting and tokenization
    Check(check::CheckArgs),

    /// Overlay a vocabulary snapshot on texts
    Annotate(annotate::AnnotateArgs),

    /// Suggest recorded terms similar to new words
    Similar(similar::SimilarArgs),

    /// Validate a language configuration file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List embedded language presets
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Check(args) => args.execute(),
            Commands::Annotate(args) => args.execute(),
            Commands::Similar(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    pub fn execute(&self) {
        match self {
            ListCommands::Languages => {
                println!("Available languages:");
                for (code, name) in lexiread_core::available_presets() {
                    println!("  {code:<4}{name}");
                }
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                for format in OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        let help = value.get_help().map(|h| h.to_string()).unwrap_or_default();
                        println!("  {:<10}{}", value.get_name(), help);
                    }
                }
            }
        }
    }
}
