//! Unified API for lexiread-core
//!
//! Wraps the pipeline behind an [`Annotator`] that owns the compiled
//! language rules, enforces input limits and decodes untrusted bytes.

mod config;
mod error;
mod input;
mod output;
mod processor;


pub use config::{defaults, Config, ConfigBuilder};
pub use error::{Error, Result};
pub use input::Input;
pub use output::{AnnotatedText, Preview, TextStats};
pub use processor::Annotator;
