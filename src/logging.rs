//! Log verbosity selection and the subscriber handed to the driver.
//!
//! Nothing here installs a global subscriber; callers scope one around the
//! work they run with [`with_logging`].

use std::io::IsTerminal;

use clap::ValueEnum;
use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::prelude::*;

/// Verbosity names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, ValueEnum)]
pub enum LogLevel {
    #[default]
    #[value(name = "DEBUG")]
    #[display(fmt = "DEBUG")]
    Debug,
    #[value(name = "INFO")]
    #[display(fmt = "INFO")]
    Info,
    #[value(name = "WARNING")]
    #[display(fmt = "WARNING")]
    Warning,
    #[value(name = "ERROR")]
    #[display(fmt = "ERROR")]
    Error,
    /// tracing has nothing above ERROR, so this filters the same way.
    #[value(name = "CRITICAL")]
    #[display(fmt = "CRITICAL")]
    Critical,
}

impl LogLevel {
    pub const fn level_filter(self) -> LevelFilter {
        match self {
            Self::Debug => LevelFilter::DEBUG,
            Self::Info => LevelFilter::INFO,
            Self::Warning => LevelFilter::WARN,
            Self::Error | Self::Critical => LevelFilter::ERROR,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        level.level_filter()
    }
}

/// Builds the stderr subscriber for `level`.
///
/// Events carry a timestamp, target, source file and line, keeping stdout free
/// for the rendered table. Colour is only used when stderr is a terminal.
pub fn subscriber(level: LogLevel) -> impl Subscriber + Send + Sync + 'static {
    subscriber_with_writer(level, std::io::stderr, std::io::stderr().is_terminal())
}

/// Same layout as [`subscriber`], writing to `writer`.
pub fn subscriber_with_writer<W>(
    level: LogLevel,
    writer: W,
    ansi: bool,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_max_level(level.level_filter())
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .finish()
}

/// Runs `f` with the subscriber for `level` as the current default.
pub fn with_logging<T>(level: LogLevel, f: impl FnOnce() -> T) -> T {
    tracing::subscriber::with_default(subscriber(level), f)
}
