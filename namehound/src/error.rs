//! Error types for the namehound library.
//!
//! This module provides the error hierarchy for configuration resolution,
//! using `thiserror` for ergonomic error handling. Fatal conditions are
//! returned to the caller as values; the library never terminates the
//! process itself.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a namehound error.
///
/// # Examples
///
/// ```
/// use namehound::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(1)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the namehound library.
///
/// This enum encompasses every terminal condition of the resolution
/// pipeline, including the help request, which short-circuits resolution
/// without being a failure in the usual sense.
#[derive(Debug, Error)]
pub enum Error {
    /// The static configuration document could not be read.
    #[error("cannot read configuration file {}: {reason}", path.display())]
    ConfigRead {
        /// The path that could not be read.
        path: PathBuf,
        /// The reason the read failed.
        reason: String,
    },

    /// The static configuration document could not be parsed.
    #[error("invalid configuration file {}: {reason}", path.display())]
    ConfigParse {
        /// The path of the malformed document.
        path: PathBuf,
        /// The reason parsing failed.
        reason: String,
    },

    /// The default configuration location could not be determined.
    #[error("cannot determine configuration location: {reason}")]
    ConfigLocation {
        /// The reason the location is unavailable.
        reason: String,
    },

    /// No usernames were collected from any source.
    #[error("Must provide at least one username")]
    NoUsernames,

    /// A help request was encountered; all further processing stops.
    #[error("help requested")]
    HelpRequested,
}

impl Error {
    /// Check if this error is the help short-circuit rather than a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use namehound::Error;
    ///
    /// assert!(Error::HelpRequested.is_help());
    /// assert!(!Error::NoUsernames.is_help());
    /// ```
    #[must_use]
    pub fn is_help(&self) -> bool {
        matches!(self, Self::HelpRequested)
    }

    /// Check if this error concerns the static configuration document.
    ///
    /// # Examples
    ///
    /// ```
    /// use namehound::Error;
    ///
    /// let err = Error::ConfigLocation { reason: "no executable path".into() };
    /// assert!(err.is_config());
    /// ```
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::ConfigRead { .. } | Self::ConfigParse { .. } | Self::ConfigLocation { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_read_error() {
        let err = Error::ConfigRead {
            path: PathBuf::from("/missing/config.yaml"),
            reason: "No such file or directory".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("cannot read configuration file"));
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/missing/config.yaml"));
        assert!(display.contains("No such file or directory"));
    }

    #[test]
    fn test_config_parse_error() {
        let err = Error::ConfigParse {
            path: PathBuf::from("/etc/config.yaml"),
            reason: "expected a mapping".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid configuration file"));
        assert!(display.contains("expected a mapping"));
    }

    #[test]
    fn test_config_location_error() {
        let err = Error::ConfigLocation {
            reason: "executable path unavailable".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("cannot determine configuration location"));
        assert!(display.contains("executable path unavailable"));
    }

    #[test]
    fn test_no_usernames_error_wording() {
        // The display form is printed verbatim behind the [Err ~]:: prefix,
        // so the exact wording matters.
        let display = format!("{}", Error::NoUsernames);
        assert_eq!(display, "Must provide at least one username");
    }

    #[test]
    fn test_help_predicate() {
        assert!(Error::HelpRequested.is_help());
        assert!(!Error::NoUsernames.is_help());
        assert!(!Error::ConfigLocation {
            reason: String::new()
        }
        .is_help());
    }

    #[test]
    fn test_config_predicate() {
        assert!(Error::ConfigRead {
            path: PathBuf::new(),
            reason: String::new()
        }
        .is_config());
        assert!(Error::ConfigParse {
            path: PathBuf::new(),
            reason: String::new()
        }
        .is_config());
        assert!(!Error::NoUsernames.is_config());
        assert!(!Error::HelpRequested.is_config());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<()> {
            Err(Error::NoUsernames)
        }

        assert!(returns_result().is_err());
    }
}
