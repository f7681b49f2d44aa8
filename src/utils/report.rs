//! Rendering formatted values for output.
//!
//! Each input value becomes a [`FormattedValue`]; a [`ReportFormatter`] turns the
//! list into text. Plain output is one formatted value per line. JSON output is
//! one object per line (`{"input": .., "value": .., "output": ..}`), with
//! non-finite values serialized as `null`.

use crate::format::{NumericInput, Precision, Style};
use crate::utils::error::TruncfmtError;
use num_format::Locale;
use serde::Serialize;

/// One input and its formatted text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedValue {
    /// Raw text as given
    pub input: String,
    /// Parsed value before truncation
    pub value: f64,
    /// Formatted text
    pub output: String,
}

/// Options shared by every value in a run.
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    pub style: Style,
    pub precision: Precision,
    pub locale: Locale,
}

pub fn format_values(values: &[String], options: &FormatOptions) -> Vec<FormattedValue> {
    values
        .iter()
        .map(|raw| {
            let input = NumericInput::from(raw);
            let value = input.to_f64();
            if value.is_nan() {
                tracing::debug!("'{}' is not numeric; formatting as NaN", raw);
            }
            FormattedValue {
                input: raw.clone(),
                value,
                output: options
                    .style
                    .render(input, options.precision, &options.locale),
            }
        })
        .collect()
}

pub trait ReportFormatter {
    fn format(&self, values: &[FormattedValue]) -> Result<String, TruncfmtError>;
}

pub struct PlainFormatter;

impl ReportFormatter for PlainFormatter {
    fn format(&self, values: &[FormattedValue]) -> Result<String, TruncfmtError> {
        let mut out = String::new();
        for value in values {
            out.push_str(&value.output);
            out.push('\n');
        }
        Ok(out)
    }
}

pub struct JsonLinesFormatter;

impl ReportFormatter for JsonLinesFormatter {
    fn format(&self, values: &[FormattedValue]) -> Result<String, TruncfmtError> {
        let mut out = String::new();
        for value in values {
            out.push_str(&serde_json::to_string(value)?);
            out.push('\n');
        }
        Ok(out)
    }
}

pub fn get_formatter(json: bool) -> Box<dyn ReportFormatter> {
    if json {
        Box::new(JsonLinesFormatter)
    } else {
        Box::new(PlainFormatter)
    }
}
