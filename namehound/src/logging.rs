//! Logging infrastructure for the namehound library.
//!
//! This module provides a simple stdout-based logging system with
//! configurable log levels. Messages carry the house `[Xxx ~]::` prefixes
//! and go to stdout, which is the stream the tool's message contract fixes
//! for warnings, errors, and diagnostics.

use std::env;
use std::fmt;

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Normal) to most verbose
/// (Debug). Warnings and errors print at every level.
///
/// # Examples
///
/// ```
/// use namehound::LogLevel;
///
/// let normal = LogLevel::Normal;
/// let verbose = LogLevel::Verbose;
/// let debug = LogLevel::Debug;
///
/// assert!(normal < verbose);
/// assert!(verbose < debug);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Normal output level (errors and warnings).
    Normal,
    /// Verbose output (errors, warnings, and info messages).
    Verbose,
    /// Debug output (everything, including debug messages).
    Debug,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
            Self::Debug => write!(f, "debug"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "normal", "verbose", "debug" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use namehound::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("normal").unwrap(), LogLevel::Normal);
    /// assert_eq!(LogLevel::parse("DEBUG").unwrap(), LogLevel::Debug);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            "debug" => Ok(Self::Debug),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// A simple stdout-based logger using the house message prefixes.
///
/// The logger respects the configured log level and only outputs messages
/// at or above that level.
///
/// # Examples
///
/// ```
/// use namehound::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("this prints with a [Warn ~]:: prefix");
/// logger.info("this will not be printed (requires Verbose)");
/// ```
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    ///
    /// # Examples
    ///
    /// ```
    /// use namehound::{LogLevel, Logger};
    ///
    /// let logger = Logger::new(LogLevel::Verbose);
    /// ```
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Logs an error message.
    ///
    /// Error messages are displayed at every level.
    ///
    /// # Examples
    ///
    /// ```
    /// use namehound::{LogLevel, Logger};
    ///
    /// let logger = Logger::new(LogLevel::Normal);
    /// logger.error("Must provide at least one username");
    /// ```
    pub fn error(&self, message: &str) {
        println!("[Err ~]:: {message}");
    }

    /// Logs a warning message.
    ///
    /// Warning messages are displayed at every level.
    ///
    /// # Examples
    ///
    /// ```
    /// use namehound::{LogLevel, Logger};
    ///
    /// let logger = Logger::new(LogLevel::Normal);
    /// logger.warn("File 'names.txt' not found");
    /// ```
    pub fn warn(&self, message: &str) {
        println!("[Warn ~]:: {message}");
    }

    /// Logs an informational message.
    ///
    /// Info messages are displayed at Verbose level and above.
    ///
    /// # Examples
    ///
    /// ```
    /// use namehound::{LogLevel, Logger};
    ///
    /// let logger = Logger::new(LogLevel::Verbose);
    /// logger.info("resolution started");
    /// ```
    pub fn info(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            println!("[Info ~]:: {message}");
        }
    }

    /// Logs a debug message.
    ///
    /// Debug messages are only displayed at Debug level.
    ///
    /// # Examples
    ///
    /// ```
    /// use namehound::{LogLevel, Logger};
    ///
    /// let logger = Logger::new(LogLevel::Debug);
    /// logger.debug("3 usernames aggregated");
    /// ```
    pub fn debug(&self, message: &str) {
        if self.level >= LogLevel::Debug {
            println!("[Debug ~]:: {message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Initializes a logger from the resolved configuration flags.
///
/// The priority order is:
/// 1. Resolved flags (debug/verbose)
/// 2. `NAMEHOUND_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// # Arguments
///
/// * `verbose` - If true, sets level to Verbose
/// * `debug` - If true, sets level to Debug
///
/// If both `verbose` and `debug` are true, `debug` takes precedence.
///
/// # Examples
///
/// ```
/// use namehound::init_logger;
///
/// // Use default (Normal) level
/// let logger = init_logger(false, false);
///
/// // Force verbose
/// let logger = init_logger(true, false);
///
/// // Force debug
/// let logger = init_logger(false, true);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, debug: bool) -> Logger {
    // Resolved flags take precedence
    if debug {
        return Logger::new(LogLevel::Debug);
    }
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }

    // Check environment variable
    if let Ok(env_value) = env::var("NAMEHOUND_LOG_MODE") {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    // Default to Normal
    Logger::new(LogLevel::Normal)
}
