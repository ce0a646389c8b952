//! lexiread CLI library
//!
//! Command-line front end for the lexiread pipeline: preview sentence
//! splitting and tokenization, annotate texts against a vocabulary snapshot
//! and look up similar terms.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod language_source;
pub mod output;

pub use error::{CliError, CliResult};
