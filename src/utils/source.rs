//! Where values to format come from.
//!
//! Positional arguments win; otherwise `--input` names a file (or `-` for stdin);
//! with neither, stdin is read. Input text is taken one value per line with
//! surrounding whitespace removed and blank lines skipped.

use crate::utils::error::TruncfmtError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    Args(Vec<String>),
    File(PathBuf),
    Stdin,
}

impl ValueSource {
    pub fn resolve(values: &[String], input: Option<&Path>) -> Self {
        if !values.is_empty() {
            return ValueSource::Args(values.to_vec());
        }
        match input {
            Some(path) if path != Path::new("-") => ValueSource::File(path.to_path_buf()),
            _ => ValueSource::Stdin,
        }
    }

    pub fn read(&self) -> Result<Vec<String>, TruncfmtError> {
        match self {
            ValueSource::Args(values) => Ok(values.clone()),
            ValueSource::File(path) => {
                tracing::debug!("Reading values from {}", path.display());
                let file = File::open(path)?;
                read_lines(BufReader::new(file))
            }
            ValueSource::Stdin => {
                tracing::debug!("Reading values from stdin");
                read_lines(std::io::stdin().lock())
            }
        }
    }
}

/// Collect non-blank, trimmed lines.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>, TruncfmtError> {
    let mut values = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            values.push(trimmed.to_string());
        }
    }
    Ok(values)
}
