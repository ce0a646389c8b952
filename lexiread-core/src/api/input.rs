//! Input abstraction for unified API

use crate::api::Error;
use crate::domain::preprocess::decode_lossy;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Unified input abstraction for various data sources
pub enum Input {
    /// Direct text input
    Text(String),
    /// File path input
    File(PathBuf),
    /// Raw bytes input, decoded lossily
    Bytes(Vec<u8>),
    /// Reader input (boxed for object safety)
    Reader(Box<dyn Read + Send + Sync>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("length", &text.len())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Bytes(bytes) => f
                .debug_struct("Input::Bytes")
                .field("length", &bytes.len())
                .finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from reader
    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read at most `limit` bytes
    pub(crate) fn into_bytes(self, limit: u64) -> Result<Vec<u8>, Error> {
        let check = |size: u64| {
            if size > limit {
                Err(Error::InputTooLarge { size, limit })
            } else {
                Ok(())
            }
        };

        match self {
            Input::Text(text) => {
                check(text.len() as u64)?;
                Ok(text.into_bytes())
            }
            Input::Bytes(bytes) => {
                check(bytes.len() as u64)?;
                Ok(bytes)
            }
            Input::File(path) => {
                let metadata = std::fs::metadata(&path).map_err(|e| {
                    Error::Infrastructure(format!("Failed to read file {}: {}", path.display(), e))
                })?;
                check(metadata.len())?;
                std::fs::read(&path).map_err(|e| {
                    Error::Infrastructure(format!("Failed to read file {}: {}", path.display(), e))
                })
            }
            Input::Reader(reader) => {
                let mut buffer = Vec::new();
                reader
                    .take(limit.saturating_add(1))
                    .read_to_end(&mut buffer)
                    .map_err(|e| {
                        Error::Infrastructure(format!("Failed to read from reader: {}", e))
                    })?;
                check(buffer.len() as u64)?;
                Ok(buffer)
            }
        }
    }

    /// Text content; invalid UTF-8 becomes U+FFFD instead of failing
    pub(crate) fn into_text(self, limit: u64) -> Result<String, Error> {
        match self {
            Input::Text(text) => {
                let size = text.len() as u64;
                if size > limit {
                    return Err(Error::InputTooLarge { size, limit });
                }
                Ok(text)
            }
            other => {
                let bytes = other.into_bytes(limit)?;
                Ok(decode_lossy(&bytes).into_owned())
            }
        }
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}
