//! Logging setup for enkf binaries and tests
//!
//! Library code only emits `tracing` events. Whoever owns the process calls
//! [`init`] once to install a formatting subscriber:
//!
//! ```rust,ignore
//! use enkf_common::logging::{self, LogLevel, LogOptions};
//!
//! logging::init(LogOptions {
//!     level: LogLevel::parse("debug"),
//!     ..LogOptions::default()
//! });
//! ```

use tracing::Level;

/// Log levels accepted in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    /// Parse log level from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "TRACE" => Some(LogLevel::Trace),
            "DEBUG" => Some(LogLevel::Debug),
            "INFO" => Some(LogLevel::Info),
            "WARN" | "WARNING" => Some(LogLevel::Warn),
            "ERROR" => Some(LogLevel::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    fn as_tracing_level(self) -> Level {
        match self {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

/// Logging configuration options
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Minimum log level, `Info` when unset
    pub level: Option<LogLevel>,
    /// Include module targets, thread ids and source locations
    pub verbose: bool,
}

/// Install the global tracing subscriber.
///
/// Returns `false` if a subscriber was already installed, which is the
/// normal case when several tests in one binary call this.
pub fn init(options: LogOptions) -> bool {
    let level = options.level.unwrap_or(LogLevel::Info).as_tracing_level();

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(options.verbose)
        .with_thread_ids(options.verbose)
        .with_file(options.verbose)
        .with_line_number(options.verbose)
        .try_init()
        .is_ok()
}

/// Format an error with its cause chain
pub fn format_error(error: &dyn std::error::Error) -> String {
    format_error_recursive(error, 0)
}

fn format_error_recursive(error: &dyn std::error::Error, depth: usize) -> String {
    const MAX_DEPTH: usize = 10;

    if depth >= MAX_DEPTH {
        return error.to_string();
    }

    let base = error.to_string();

    if let Some(source) = error.source() {
        format!(
            "{} Caused by: {}",
            base,
            format_error_recursive(source, depth + 1)
        )
    } else {
        base
    }
}
