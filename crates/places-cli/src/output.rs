//! Output formatting and logging utilities
//!
//! Results go to stdout. Messages, progress and diagnostics go to stderr so
//! that `places search ... > results.json` stays clean.

use owo_colors::OwoColorize;
use places_core::PlacesError;
use std::env;
use tracing_subscriber::EnvFilter;

/// Output level for controlling what gets displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLevel {
    /// Show all output (normal mode)
    Normal,
    /// Show only errors (quiet mode)
    Quiet,
    /// Show extra debug information (verbose mode)
    Verbose,
}

impl OutputLevel {
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if user-facing messages should be shown (excludes errors/hints which always show)
    pub fn show_user(&self) -> bool {
        matches!(self, Self::Normal | Self::Verbose)
    }

    /// Default filter directive when `RUST_LOG` is unset
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "places_core=debug,places=debug,warn",
        }
    }
}

/// Install the stderr tracing subscriber. `log` records emitted by
/// `places_core` are bridged through `tracing-log`.
pub fn init_logging(output_level: OutputLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(output_level.filter_directive()));

    // A second init (tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!colors_disabled())
        .try_init();
}

/// Check if colored output should be disabled
fn colors_disabled() -> bool {
    env::var("NO_COLOR").is_ok()
        || env::var("TERM").is_ok_and(|t| t == "dumb")
        || !atty::is(atty::Stream::Stderr)
}

fn print_colored<T>(msg: &str, styled_msg: T, output_level: OutputLevel, always_show: bool)
where
    T: std::fmt::Display,
{
    if always_show || output_level.show_user() {
        if !colors_disabled() {
            eprintln!("{styled_msg}");
        } else {
            eprintln!("{msg}");
        }
    }
}

/// Print a heading with bold formatting
pub fn heading(msg: &str, output_level: OutputLevel) {
    print_colored(msg, msg.bold(), output_level, false);
}

/// Print a note message with default formatting (no prefix)
pub fn note(msg: &str, output_level: OutputLevel) {
    if output_level.show_user() {
        eprintln!("{msg}");
    }
}

/// Print a success message in green
pub fn success(msg: &str, output_level: OutputLevel) {
    print_colored(msg, msg.green(), output_level, false);
}

/// Print an error message with "Error:" prefix in red (always shown)
pub fn error(msg: &str) {
    if !colors_disabled() {
        eprintln!("{} {}", "Error:".red().bold(), msg.red());
    } else {
        eprintln!("Error: {msg}");
    }
}

/// Print a hint message with "Hint:" prefix in blue (always shown)
pub fn hint(msg: &str) {
    if !colors_disabled() {
        eprintln!("{} {}", "Hint:".blue().bold(), msg.blue());
    } else {
        eprintln!("Hint: {msg}");
    }
}

/// Follow-up advice for a failed command, if any applies
pub fn error_hint(err: &anyhow::Error) -> Option<String> {
    let err = err.downcast_ref::<PlacesError>()?;
    match err {
        PlacesError::Authentication { .. } => Some(format!(
            "Check which key is in use with {}",
            format_command("places key status")
        )),
        PlacesError::RateLimit { .. } => {
            Some("The key's quota is exhausted; wait or raise the quota".to_string())
        }
        err if err.is_local() => Some(format!(
            "Nothing was sent; see {} for the accepted arguments",
            format_command("places <COMMAND> --help")
        )),
        _ => None,
    }
}

/// Print a JSON value to stdout
pub fn json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format a key source or similar label with colors
pub fn format_label(label: &str) -> String {
    if colors_disabled() {
        label.to_string()
    } else {
        label.magenta().bold().to_string()
    }
}

/// Format a command or option with colors
pub fn format_command(cmd: &str) -> String {
    if colors_disabled() {
        format!("`{cmd}`")
    } else {
        format!("`{}`", cmd.yellow().bold())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_level_from_flags() {
        assert_eq!(OutputLevel::from_flags(false, false), OutputLevel::Normal);
        assert_eq!(OutputLevel::from_flags(false, true), OutputLevel::Verbose);
        // quiet wins
        assert_eq!(OutputLevel::from_flags(true, true), OutputLevel::Quiet);
    }

    #[test]
    fn test_error_hint() {
        let local = anyhow::Error::from(PlacesError::invalid_argument(
            "a max_width or max_height arg is required",
        ));
        assert!(error_hint(&local).unwrap().contains("Nothing was sent"));

        let auth = anyhow::Error::from(PlacesError::authentication("denied"));
        assert!(error_hint(&auth).unwrap().contains("places key status"));

        let network = anyhow::Error::from(PlacesError::network("reset"));
        assert!(error_hint(&network).is_none());
        assert!(error_hint(&anyhow::anyhow!("plain failure")).is_none());
    }

    #[test]
    fn test_filter_directive() {
        assert_eq!(OutputLevel::Quiet.filter_directive(), "error");
        assert_eq!(OutputLevel::Normal.filter_directive(), "warn");
        assert!(OutputLevel::Verbose.filter_directive().contains("places_core=debug"));
        assert!(!OutputLevel::Quiet.show_user());
    }
}
