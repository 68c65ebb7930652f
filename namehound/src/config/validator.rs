//! Resolved-configuration validation.

use crate::config::schema::ResolvedConfig;
use crate::error::{Error, Result};

/// Validates a resolved configuration before hand-off.
///
/// # Examples
///
/// ```
/// use namehound::config::{ConfigValidator, ResolvedConfig};
///
/// let mut config = ResolvedConfig::default();
/// assert!(ConfigValidator::validate(&config).is_err());
///
/// config.usernames.push("alice".to_string());
/// assert!(ConfigValidator::validate(&config).is_ok());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a resolved configuration.
    ///
    /// The one hard rule of the pipeline: at least one username must have
    /// been collected across every source. Everything else is an open
    /// mapping with no schema to enforce.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoUsernames`] when the username list is empty.
    pub fn validate(config: &ResolvedConfig) -> Result<()> {
        if config.usernames.is_empty() {
            return Err(Error::NoUsernames);
        }

        Ok(())
    }
}
