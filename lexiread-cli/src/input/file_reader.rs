//! File reading utilities

use crate::CliError;
use anyhow::{Context, Result};
use lexiread_core::Input;
use std::fs;
use std::path::Path;

/// Opens files as core inputs. Decoding and the size limit are applied by
/// the core when the input is consumed.
pub struct FileReader;

impl FileReader {
    /// Input for a regular file
    pub fn open(path: &Path) -> Result<Input> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;
        if !metadata.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        log::debug!("Queued {} ({} bytes)", path.display(), metadata.len());
        Ok(Input::from_file(path))
    }

    /// Input reading standard input to its end
    pub fn stdin() -> Input {
        Input::from_reader(std::io::stdin())
    }
}
