//! Configuration management using the `config` crate for hierarchical discovery and merging.
//!
//! ## Configuration Sources (in precedence order, highest to lowest):
//! 1. **CLI flags** - Highest precedence (merged in [`merge_config`])
//! 2. **Environment variables** - Middle precedence (via `TRUNCFMT_*` prefix,
//!    e.g. `TRUNCFMT_FORMAT_PRECISION=3`)
//! 3. **Config files** - Lowest precedence
//!
//! ## Config File Discovery (in merge order, later overrides earlier):
//! 1. `~/.config/truncfmt/config.toml` (user config directory - lowest precedence)
//! 2. `truncfmt.toml` in git repository root (walking up from current directory)
//! 3. `./truncfmt.toml` in current directory
//! 4. Explicit `--config` path (must exist - overrides all above)
//!
//! ## Usage:
//! ```no_run
//! use truncfmt::cli::{args, config};
//!
//! let args = args::parse();
//! let file_config = config::load(&args)?;
//! let merged = config::merge_config(&args, file_config)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::MergedConfig;
use crate::cli::args::Args;
use crate::format::{Precision, Style, resolve_locale};
use crate::utils::error::TruncfmtError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "truncfmt.toml";
const DEFAULT_LOCALE: &str = "en";

/// Root configuration structure loaded from config files.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub format: FormatConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Formatting defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormatConfig {
    /// `fixed` or `grouped`
    pub style: Option<String>,
    /// Rejected at load time when above 100
    pub precision: Option<Precision>,
    pub locale: Option<String>,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    pub json: Option<bool>,
}

fn discover_config_paths(explicit_path: &Path) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // User config (lowest precedence)
    if let Some(user_config) = get_user_config_path() {
        paths.push(user_config);
    }

    // Git root config
    if let Some(git_root) = find_git_root() {
        let git_config = git_root.join(CONFIG_FILE_NAME);
        if git_config.exists() {
            paths.push(git_config);
        }
    }

    // Current directory config
    let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
    if current_dir_config.exists() && !paths.contains(&current_dir_config) {
        paths.push(current_dir_config);
    }

    // Explicit --config path (highest precedence)
    if explicit_path != Path::new(CONFIG_FILE_NAME) && explicit_path.exists() {
        paths.push(explicit_path.to_path_buf());
    }

    paths
}

fn find_git_root() -> Option<PathBuf> {
    git2::Repository::discover(".")
        .ok()
        .and_then(|repo| repo.workdir().map(|p| p.to_path_buf()))
}

fn get_user_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|config_dir| config_dir.join("truncfmt").join("config.toml"))
        .filter(|path| path.exists())
}

/// Load configuration from discovered config files and environment variables.
///
/// An explicit `--config` path that does not exist is an error.
pub fn load(args: &Args) -> Result<Config> {
    if args.config != Path::new(CONFIG_FILE_NAME) && !args.config.exists() {
        return Err(TruncfmtError::Config(format!(
            "Config file not found: {}",
            args.config.display()
        ))
        .into());
    }

    let paths = discover_config_paths(&args.config);
    tracing::debug!("Config files: {:?}", paths);
    load_from(&paths)
}

/// Load configuration from an explicit list of files (later files win) plus environment.
pub fn load_from(paths: &[PathBuf]) -> Result<Config> {
    let mut builder = config::Config::builder();

    for config_path in paths {
        builder = builder.add_source(config::File::from(config_path.as_path()));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("TRUNCFMT")
            .separator("_")
            .try_parsing(true),
    );

    let settings = builder.build().context("Failed to build configuration")?;

    settings
        .try_deserialize()
        .context("Failed to deserialize configuration")
}

/// Merge CLI arguments over file configuration into the final [`MergedConfig`].
///
/// A formatting flag replaces the file value only when it was given. Style and locale
/// are validated here so that a bad config file fails before any output.
pub fn merge_config(args: &Args, config: Config) -> Result<MergedConfig, TruncfmtError> {
    let style = match (args.style, config.format.style.as_deref()) {
        (Some(style), _) => style,
        (None, Some(name)) => name.parse::<Style>()?,
        (None, None) => Style::default(),
    };

    let precision = match args.precision {
        Some(digits) => Precision::new(digits)?,
        None => config.format.precision.unwrap_or_default(),
    };

    let locale_name = args
        .locale
        .clone()
        .or(config.format.locale)
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string());
    let locale = resolve_locale(&locale_name)?;

    Ok(MergedConfig {
        values: args.values.clone(),
        input: args.input.clone(),
        style,
        precision,
        locale,
        json: if args.no_json {
            false
        } else {
            args.json || config.output.json.unwrap_or(false)
        },
        verbose: args.verbose,
        quiet: args.quiet,
    })
}
