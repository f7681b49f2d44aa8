use crate::format::Style;
use clap::Parser;
use std::path::PathBuf;

/// CLI argument parsing with environment variable support.
///
/// Environment variables follow the pattern `TRUNCFMT_*` and are overridden by CLI flags.
/// Example: `TRUNCFMT_PRECISION=4` is overridden by `--precision 1`.
///
/// Formatting options are optional here so that values from config files are only
/// replaced when a flag (or its environment variable) is actually present.
#[derive(Parser, Debug)]
#[command(name = "truncfmt")]
#[command(about = "Truncate numbers to a fixed number of decimals and format them")]
#[command(version)]
pub struct Args {
    /// Values to format; read from stdin when none are given
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Rendering style
    #[arg(short, long, env = "TRUNCFMT_STYLE")]
    pub style: Option<Style>,

    /// Digits after the decimal separator (0-100)
    #[arg(
        short,
        long,
        env = "TRUNCFMT_PRECISION",
        value_parser = clap::value_parser!(u32).range(0..=100)
    )]
    pub precision: Option<u32>,

    /// Locale used for digit grouping (e.g. en, de, en-IN)
    #[arg(short, long, env = "TRUNCFMT_LOCALE")]
    pub locale: Option<String>,

    /// Read values from a file, one per line ("-" for stdin)
    #[arg(short, long, env = "TRUNCFMT_INPUT")]
    pub input: Option<PathBuf>,

    /// Emit one JSON object per value
    #[arg(long, env = "TRUNCFMT_JSON", overrides_with = "no_json")]
    pub json: bool,

    /// Emit plain lines even if a config file enables JSON
    #[arg(long, overrides_with = "json")]
    pub no_json: bool,

    /// Config file path
    #[arg(short, long, default_value = "truncfmt.toml", env = "TRUNCFMT_CONFIG")]
    pub config: PathBuf,

    /// Increase verbosity (-v, -vv)
    #[arg(short, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short)]
    pub quiet: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
