//! Input handling: file patterns, standard input and vocabulary files

pub mod file_reader;
pub mod glob_resolver;
pub mod vocabulary;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;
pub use vocabulary::{load_lemmas, load_vocabulary, parse_vocabulary};

use anyhow::Result;
use lexiread_core::Input;

/// Pattern that reads standard input
pub const STDIN: &str = "-";

/// A core input with the name it is reported under
#[derive(Debug)]
pub struct NamedInput {
    pub name: String,
    pub input: Input,
}

/// Resolve `-i` arguments in order. `-` reads standard input; everything
/// else is a glob pattern.
pub fn collect_inputs(patterns: &[String]) -> Result<Vec<NamedInput>> {
    let (stdin, file_patterns): (Vec<&String>, Vec<&String>) =
        patterns.iter().partition(|p| p.as_str() == STDIN);

    let mut inputs = Vec::new();
    if !stdin.is_empty() {
        inputs.push(NamedInput {
            name: "<stdin>".to_string(),
            input: FileReader::stdin(),
        });
    }

    if !file_patterns.is_empty() {
        let file_patterns: Vec<String> = file_patterns.into_iter().cloned().collect();
        for path in resolve_patterns(&file_patterns)? {
            inputs.push(NamedInput {
                name: path.display().to_string(),
                input: FileReader::open(&path)?,
            });
        }
    }

    log::info!("Resolved {} input(s)", inputs.len());
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_collect_inputs_with_stdin() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "A.").unwrap();
        let pattern = dir.path().join("*.txt").to_string_lossy().into_owned();

        let inputs = collect_inputs(&[pattern, STDIN.to_string()]).unwrap();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].name, "<stdin>");
        assert!(inputs[1].name.ends_with("a.txt"));
    }
}
