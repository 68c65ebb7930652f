//! Static configuration document loading.
//!
//! The static document is mandatory infrastructure: resolution cannot
//! proceed without it, so a missing or malformed file is a fatal error
//! rather than a fallback to defaults. The document location is always an
//! explicit parameter; the install-relative default lives here but is only
//! consulted at the outermost composition point.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::StaticConfig;
use crate::error::{Error, Result};

/// Environment variable overriding the static document location.
pub const CONFIG_PATH_ENV: &str = "NAMEHOUND_CONFIG";

/// Loads the static configuration document.
///
/// # Examples
///
/// ```no_run
/// use namehound::config::ConfigLoader;
/// use std::path::Path;
///
/// let config = ConfigLoader::load_file(Path::new("resources/config.yaml")).unwrap();
/// println!("base section present: {}", config.base.is_some());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and parse the static YAML document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigRead`] if the file cannot be read and
    /// [`Error::ConfigParse`] if its contents are not a valid document.
    pub fn load_file(path: &Path) -> Result<StaticConfig> {
        log::debug!("loading static configuration from {}", path.display());

        let contents = fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// The default document location.
    ///
    /// A non-empty `NAMEHOUND_CONFIG` environment variable wins; otherwise
    /// the document is expected at `resources/config.yaml` beside the
    /// running executable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigLocation`] if no override is set and the
    /// executable path cannot be determined.
    pub fn default_location() -> Result<PathBuf> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        Self::install_location()
    }

    /// `resources/config.yaml` relative to the executable's directory.
    fn install_location() -> Result<PathBuf> {
        let exe = env::current_exe().map_err(|e| Error::ConfigLocation {
            reason: format!("executable path unavailable: {e}"),
        })?;

        let install_dir = exe.parent().ok_or_else(|| Error::ConfigLocation {
            reason: "executable has no parent directory".to_string(),
        })?;

        Ok(install_dir.join("resources").join("config.yaml"))
    }
}
