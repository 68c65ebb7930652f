#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # namehound
//!
//! A library for resolving the run-time configuration of a username-lookup
//! tool.
//!
//! This library merges three independent sources into one validated
//! configuration: a static YAML document, `-`/`/`-prefixed command-line
//! option tokens, and an optional external file of usernames. A fixed
//! precedence order applies (defaults, then the static document, then the
//! command line), plugin settings use a small `+`/`=`/`,` shorthand grammar,
//! and resolution fails unless at least one username was collected.
//!
//! ## Core Types
//!
//! - [`ConfigResolver`] and [`Resolution`]: the resolution pipeline
//! - [`ResolvedConfig`] and [`OptionValue`]: the merged configuration
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use namehound::{ConfigResolver, StaticConfig};
//!
//! let resolution = ConfigResolver::new([
//!     "alice",
//!     "-stdout:json",
//!     "-plugin-config:sherlock=fast,deep",
//! ])
//! .with_static_config(StaticConfig::default())
//! .resolve()
//! .unwrap();
//!
//! assert_eq!(resolution.config.usernames, vec!["alice"]);
//! assert_eq!(resolution.config.output_format, "json");
//! assert_eq!(resolution.config.plugin_config["sherlock"], vec!["fast", "deep"]);
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod usernames;

// Re-export key types at crate root for convenience
pub use args::{ArgToken, OptionToken, ParsedArgs};
pub use config::{
    ConfigLoader, ConfigMerger, ConfigResolver, ConfigValidator, DraftConfig, OptionValue,
    Resolution, ResolvedConfig, StaticConfig,
};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use usernames::{AggregatedUsernames, UsernameAggregator};
