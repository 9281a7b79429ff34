//! Tracing subscriber setup

use anyhow::{Context, Result};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "THRIDLE_LOG";

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// No subscriber at all; the TUI owns the terminal
    Off,
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "thridle=debug" } else { "thridle=warn" }
}

/// Install the global subscriber
///
/// `THRIDLE_LOG` wins over `verbose` when set.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a subscriber is
/// already installed.
pub fn init_tracing(verbose: bool, target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let registry = tracing_subscriber::registry().with(filter);

    match target {
        LogTarget::Off => {}
        LogTarget::Stderr => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()?,
        LogTarget::File(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            registry
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_level() {
        assert_eq!(default_directive(false), "thridle=warn");
        assert_eq!(default_directive(true), "thridle=debug");
    }

    #[test]
    fn off_installs_nothing() {
        assert!(init_tracing(false, LogTarget::Off).is_ok());
    }

    #[test]
    fn unwritable_log_file_is_an_error() {
        let target = LogTarget::File(PathBuf::from("/definitely/not/here/thridle.log"));
        assert!(init_tracing(false, target).is_err());
    }
}
