//! Logging setup for fleetquery.
//!
//! The library only emits `tracing` events; binaries decide where they go by
//! calling [`init_logging`] once at startup.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Crate targets that receive the verbosity-derived level.
const LOG_TARGETS: [&str; 2] = ["fleetquery", "fleetq"];

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings and above. Query results go to stdout, not the log.
    #[default]
    Normal,
    /// Debug and above; shows which aircraft was selected and why.
    Verbose,
    /// Everything, including each rejected candidate.
    Trace,
}

impl Verbosity {
    /// Derive a verbosity from `-q` and the number of `-v` flags.
    ///
    /// `quiet` wins over any number of `-v` flags.
    #[must_use]
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Trace,
        }
    }

    /// The tracing level for this verbosity.
    #[must_use]
    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Default `EnvFilter` directives, used when `RUST_LOG` is unset.
    #[must_use]
    pub fn filter_directives(self) -> String {
        let level = self.level();
        LOG_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over `verbosity` when set. Logs are written
/// to stderr so they never mix with query output. Calling this more than
/// once is harmless; only the first call installs a subscriber.
///
/// # Examples
///
/// ```no_run
/// use fleetquery::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::Verbose);
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directives()));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false),
    );

    let _ = subscriber.try_init();
}

/// Initialize logging for tests at warn level, captured by the test harness.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}
