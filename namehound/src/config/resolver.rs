//! Resolution pipeline composition.
//!
//! This module wires the individual stages into the single pipeline that
//! produces a [`ResolvedConfig`]: built-in defaults, then the static
//! document, then the command-line options, then the plugin grammar, then
//! username aggregation, then validation. Each stage lives in its own
//! module; this one only decides order and source precedence.

use std::path::PathBuf;

use crate::args::parse_tokens;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::plugins::PluginSpecParser;
use crate::config::schema::{ResolvedConfig, StaticConfig};
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};
use crate::usernames::UsernameAggregator;

/// A successful resolution outcome.
///
/// Warnings carry the recoverable conditions encountered along the way
/// (see [`crate::usernames`]); the caller decides how to surface them.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// The merged, validated configuration.
    pub config: ResolvedConfig,

    /// Recoverable conditions to report to the user, in occurrence order.
    pub warnings: Vec<String>,
}

/// Builder for a full configuration resolution.
///
/// The static document source is chosen by precedence: an in-memory
/// [`StaticConfig`] beats an explicit path, which beats the default
/// location (the `NAMEHOUND_CONFIG` environment variable, then
/// `resources/config.yaml` beside the executable).
///
/// # Examples
///
/// ```
/// use namehound::config::{ConfigResolver, StaticConfig};
///
/// let resolution = ConfigResolver::new(["alice", "-stdout:json"])
///     .with_static_config(StaticConfig::default())
///     .resolve()
///     .unwrap();
///
/// assert_eq!(resolution.config.usernames, vec!["alice"]);
/// assert_eq!(resolution.config.output_format, "json");
/// ```
#[derive(Debug)]
pub struct ConfigResolver {
    args: Vec<String>,
    config_path: Option<PathBuf>,
    static_config: Option<StaticConfig>,
}

impl ConfigResolver {
    /// Creates a resolver over the raw command-line tokens (program name
    /// excluded).
    #[must_use]
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            config_path: None,
            static_config: None,
        }
    }

    /// Sets an explicit path for the static document, bypassing the
    /// default location.
    #[must_use]
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Sets an in-memory static document, bypassing the filesystem
    /// entirely. Takes precedence over [`Self::with_config_path`].
    #[must_use]
    pub fn with_static_config(mut self, config: StaticConfig) -> Self {
        self.static_config = Some(config);
        self
    }

    /// Run the pipeline and produce the resolved configuration.
    ///
    /// An empty token list and a `help` option both short-circuit as
    /// [`Error::HelpRequested`] before any other source is consulted, so a
    /// help request succeeds even when the static document is broken.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HelpRequested`] for the short-circuit above,
    /// [`Error::ConfigRead`] / [`Error::ConfigParse`] /
    /// [`Error::ConfigLocation`] when the static document cannot be
    /// obtained, and [`Error::NoUsernames`] when every source together
    /// yields no usernames.
    pub fn resolve(self) -> Result<Resolution> {
        if self.args.is_empty() {
            return Err(Error::HelpRequested);
        }

        log::debug!("resolving configuration from {} tokens", self.args.len());
        let parsed = parse_tokens(&self.args)?;

        let statics = self.load_static()?;
        let draft = ConfigMerger::merge(statics.base.as_ref(), &parsed.options);

        let mut plugin_config = PluginSpecParser::parse(&draft.plugin_spec);
        PluginSpecParser::apply_overrides(&mut plugin_config, statics.plugins.as_ref());

        let aggregated =
            UsernameAggregator::aggregate(&parsed.usernames, draft.extras.get("stdin"));

        let config = ResolvedConfig {
            usernames: aggregated.usernames,
            output_format: draft.output_format,
            output_path: draft.output_path,
            verbose: draft.verbose,
            debug: draft.debug,
            plugin_config,
            extras: draft.extras,
        };

        ConfigValidator::validate(&config)?;

        Ok(Resolution {
            config,
            warnings: aggregated.warnings,
        })
    }

    /// Obtain the static document from the highest-precedence source.
    fn load_static(&self) -> Result<StaticConfig> {
        if let Some(config) = &self.static_config {
            return Ok(config.clone());
        }

        let path = match &self.config_path {
            Some(path) => path.clone(),
            None => ConfigLoader::default_location()?,
        };

        ConfigLoader::load_file(&path)
    }
}
