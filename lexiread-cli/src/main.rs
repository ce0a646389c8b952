use clap::Parser;
use lexiread_cli::{commands::Commands, error::exit_code_for};
use std::process::ExitCode;

/// Sentence splitting, tokenization and vocabulary overlay for reading
/// foreign-language texts
#[derive(Debug, Parser)]
#[command(name = "lexiread", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::debug!("{error:?}");
            eprintln!("Error: {error:#}");
            ExitCode::from(exit_code_for(&error))
        }
    }
}
