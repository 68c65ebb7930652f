//! Configuration resolution for namehound.
//!
//! This module turns raw command-line tokens and the static configuration
//! document into a single validated [`ResolvedConfig`]:
//! - YAML static document with `BaseConfig` and `PluginConfig` sections
//! - the `-`/`/`-prefixed option token grammar
//! - the `+`/`=`/`,` plugin-config shorthand
//! - username aggregation from positionals and an optional file
//!
//! # Precedence
//!
//! Scalar options are merged from multiple sources with the following
//! precedence (highest to lowest):
//!
//! 1. Command-line options (left to right; later tokens win)
//! 2. Static document `BaseConfig` entries
//! 3. Built-in defaults
//!
//! Plugin settings run the other way at the end: a static `PluginConfig`
//! entry replaces the whole inline-parsed list for its plugin name.
//!
//! # Examples
//!
//! Resolving with an in-memory static document:
//!
//! ```
//! use namehound::config::{ConfigResolver, StaticConfig};
//!
//! let resolution = ConfigResolver::new(["alice", "-verbose"])
//!     .with_static_config(StaticConfig::default())
//!     .resolve()
//!     .unwrap();
//!
//! assert_eq!(resolution.config.usernames, vec!["alice"]);
//! assert!(resolution.config.verbose);
//! ```
//!
//! Resolving against an installed document:
//!
//! ```no_run
//! use namehound::config::ConfigResolver;
//!
//! let resolution = ConfigResolver::new(["alice"])
//!     .with_config_path("/etc/namehound/config.yaml")
//!     .resolve()
//!     .unwrap();
//! ```

pub mod loader;
pub mod merger;
pub mod plugins;
pub mod resolver;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use loader::{ConfigLoader, CONFIG_PATH_ENV};
pub use merger::ConfigMerger;
pub use plugins::PluginSpecParser;
pub use resolver::{ConfigResolver, Resolution};
pub use schema::{DraftConfig, OptionValue, ResolvedConfig, StaticConfig, DEFAULT_OUTPUT_FORMAT};
pub use validator::ConfigValidator;
