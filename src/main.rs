use anyhow::Result;
use truncfmt::cli;
use truncfmt::utils::error::{TruncfmtError, format_error};

fn main() {
    // Determine verbose mode early so config errors can show their cause chain
    let verbose = std::env::args().any(|arg| arg == "-v" || arg.starts_with("-vv"));

    if let Err(e) = run_main() {
        display_error(&e, verbose);
        std::process::exit(1);
    }
}

/// Display an error with contextual formatting.
///
/// Tries to downcast to `TruncfmtError` for rich formatting, falls back to
/// anyhow's error chain display for other errors.
fn display_error(error: &anyhow::Error, verbose: bool) {
    if let Some(truncfmt_error) = error.downcast_ref::<TruncfmtError>() {
        eprintln!("{}", format_error(truncfmt_error, verbose));
        return;
    }

    eprintln!("\n\u{26a0} Error: {}", error);

    let causes: Vec<_> = error.chain().skip(1).collect();
    if !causes.is_empty() {
        eprintln!("\nCaused by:");
        for (i, cause) in causes.iter().enumerate() {
            let prefix = if i == causes.len() - 1 {
                "\u{2514}\u{2500}"
            } else {
                "\u{251c}\u{2500}"
            };
            eprintln!("{} {}", prefix, cause);
        }
    }

    if verbose {
        let backtrace = error.backtrace();
        if backtrace.status() == std::backtrace::BacktraceStatus::Captured {
            eprintln!("\nBacktrace:\n{}", backtrace);
        }
    }
}

fn run_main() -> Result<()> {
    let args = cli::args::parse();

    // Config files + TRUNCFMT_* env vars, then CLI flags on top
    let config = cli::config::load(&args)?;
    let merged_config = cli::config::merge_config(&args, config)?;

    truncfmt::init_logging(merged_config.verbose, merged_config.quiet);

    truncfmt::run(&merged_config)
}
