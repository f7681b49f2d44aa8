//! # truncfmt
//!
//! Floor-truncating number formatting. Values are truncated toward negative infinity
//! at a fixed number of decimal places and rendered either as fixed-point text or
//! with locale digit grouping:
//!
//! ```
//! use truncfmt::format::{Precision, format_fixed, format_grouped};
//!
//! assert_eq!(format_fixed(3.14159, Precision::default()), "3.14");
//! assert_eq!(format_grouped(1234567.891, Precision::default()), "1,234,567.89");
//! ```
//!
//! The `truncfmt` binary wraps the same functions. Its configuration follows
//! hierarchical precedence:
//! 1. User config (~/.config/truncfmt/config.toml)
//! 2. Git root (truncfmt.toml)
//! 3. Current directory (truncfmt.toml)
//! 4. Explicit --config path
//! 5. Environment variables (TRUNCFMT_*)
//! 6. CLI flags (highest precedence)
//!
//! The `MergedConfig` struct represents the final resolved configuration after
//! merging all sources.

pub mod cli;
pub mod format;
pub mod utils;

use anyhow::{Context, Result};
use format::{Precision, Style};
use num_format::Locale;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use utils::report::{FormatOptions, format_values, get_formatter};
use utils::source::ValueSource;

/// Final resolved configuration after merging all sources (CLI, env, config files).
#[derive(Debug, Clone)]
pub struct MergedConfig {
    /// Values given on the command line
    pub values: Vec<String>,
    /// File to read values from when none are given (`-` for stdin)
    pub input: Option<PathBuf>,
    /// Rendering style
    pub style: Style,
    /// Digits after the decimal separator
    pub precision: Precision,
    /// Locale for grouped output
    pub locale: Locale,
    /// Emit JSON lines instead of plain text
    pub json: bool,
    /// Verbosity level (0-2)
    pub verbose: u8,
    /// Quiet mode (warnings and errors only)
    pub quiet: bool,
}

/// Initialize the global tracing subscriber on stderr.
///
/// `RUST_LOG` takes precedence over the verbosity flags when set. Calling this
/// more than once is harmless.
pub fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        tracing::Level::WARN
    } else {
        match verbose {
            0 => tracing::Level::INFO,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Format every value named by `config` and write the report to stdout.
pub fn run(config: &MergedConfig) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    run_with_writer(config, &mut handle)
}

/// Format every value named by `config` and write the report to `out`.
pub fn run_with_writer<W: Write>(config: &MergedConfig, out: &mut W) -> Result<()> {
    tracing::debug!("truncfmt v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!(
        "Configuration: style={}, precision={}, locale={}, json={}",
        config.style.as_str(),
        config.precision,
        config.locale.name(),
        config.json
    );

    let source = ValueSource::resolve(&config.values, config.input.as_deref());
    let values = source.read().context("Failed to read input values")?;
    tracing::debug!("Formatting {} values", values.len());

    let options = FormatOptions {
        style: config.style,
        precision: config.precision,
        locale: config.locale,
    };
    let results = format_values(&values, &options);

    let report = get_formatter(config.json)
        .format(&results)
        .context("Failed to render output")?;
    out.write_all(report.as_bytes())
        .context("Failed to write output")?;
    out.flush().context("Failed to flush output")?;

    Ok(())
}
