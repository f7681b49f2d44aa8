// Copyright (c) 2025-2026 the truncfmt contributors
// SPDX-License-Identifier: Apache-2.0

use crate::format::Precision;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TruncfmtError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    #[error("Invalid precision: {precision} (maximum is {max})")]
    InvalidPrecision { precision: u32, max: u8 },

    #[error("Unknown locale: '{0}'")]
    UnknownLocale(String),

    #[error("Parse error: {message}")]
    ParseError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {message}\nSuggestion: {suggestion}")]
    ValidationError { message: String, suggestion: String },
}

impl TruncfmtError {
    pub fn invalid_precision(precision: u32) -> Self {
        TruncfmtError::InvalidPrecision {
            precision,
            max: Precision::MAX,
        }
    }

    pub fn invalid_style(style: &str) -> Self {
        TruncfmtError::ValidationError {
            message: format!("Invalid style: '{}'", style),
            suggestion: "Valid styles are: fixed, grouped".to_string(),
        }
    }

    pub fn unknown_locale(name: &str) -> Self {
        TruncfmtError::UnknownLocale(name.to_string())
    }

    /// Suggestion shown next to the error message, if any.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            TruncfmtError::InvalidPrecision { max, .. } => {
                Some(format!("Precision must be between 0 and {}", max))
            }
            TruncfmtError::UnknownLocale(_) => Some(
                "Use a locale name such as 'en', 'de', 'fr' or 'en-IN' (see num-format's Locale list)"
                    .to_string(),
            ),
            TruncfmtError::ValidationError { suggestion, .. } => Some(suggestion.clone()),
            TruncfmtError::Config(_)
            | TruncfmtError::FileSystem(_)
            | TruncfmtError::ParseError { .. } => None,
        }
    }
}

impl From<serde_json::Error> for TruncfmtError {
    fn from(err: serde_json::Error) -> Self {
        TruncfmtError::ParseError {
            message: "Failed to serialize JSON record".to_string(),
            source: Some(Box::new(err)),
        }
    }
}

/// Format an error for display on stderr.
///
/// In verbose mode the source chain is appended below the message.
pub fn format_error(error: &TruncfmtError, verbose: bool) -> String {
    let mut out = format!("\n\u{26a0} Error: {}", error);

    if let Some(suggestion) = error.suggestion() {
        if !matches!(error, TruncfmtError::ValidationError { .. }) {
            out.push_str(&format!("\nSuggestion: {}", suggestion));
        }
    }

    if verbose {
        let mut source = std::error::Error::source(error);
        while let Some(cause) = source {
            out.push_str(&format!("\n\u{2514}\u{2500} {}", cause));
            source = std::error::Error::source(cause);
        }
    }

    out
}
