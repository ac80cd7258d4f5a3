// ============================================================
// Layer 4 — Validation File Loader
// ============================================================
// Reads the labelled validation file into memory, one raw line
// per example:
//
//   sports ||| the team won the championship game
//   music ||| the band released a new album
//
// No parsing happens here; the encoder owns the line format.
// Lines are returned in file order with their 1-based line
// number so errors can point at the offending line.
//
// Reference: Rust Book §12 (Reading a File)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

/// One raw line of the validation file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// 1-based line number in the source file
    pub number: usize,
    pub text:   String,
}

pub struct ValidationLoader {
    path: PathBuf,
}

impl ValidationLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read every line of the file.
    /// A trailing newline at EOF does not produce an empty line.
    pub fn load_lines(&self) -> Result<Vec<RawLine>> {
        let content = fs::read_to_string(&self.path).with_context(|| {
            format!("Cannot read validation file '{}'", self.path.display())
        })?;

        let lines: Vec<RawLine> = content
            .lines()
            .enumerate()
            .map(|(i, text)| RawLine { number: i + 1, text: text.to_string() })
            .collect();

        tracing::info!(
            "Read {} lines from '{}'",
            lines.len(),
            self.path.display()
        );
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_lines_are_numbered_from_one() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "a ||| x\nb ||| y\n").unwrap();

        let lines = ValidationLoader::new(f.path()).load_lines().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], RawLine { number: 1, text: "a ||| x".into() });
        assert_eq!(lines[1].number, 2);
    }

    #[test]
    fn test_empty_file_has_no_lines() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let lines = ValidationLoader::new(f.path()).load_lines().unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = ValidationLoader::new("/no/such/valid.txt").load_lines().unwrap_err();
        assert!(err.to_string().contains("/no/such/valid.txt"));
    }
}
