//! Configuration merging and precedence handling.
//!
//! This module applies the three option sources in fixed precedence order:
//! built-in defaults, then the static document's base section, then the
//! decoded command-line options in left-to-right order. Later sources
//! overwrite earlier ones key by key.

use std::collections::BTreeMap;

use crate::args::OptionToken;
use crate::config::schema::{DraftConfig, OptionValue};

/// Merges option sources into the draft configuration.
///
/// # Examples
///
/// ```
/// use namehound::args::parse_tokens;
/// use namehound::config::ConfigMerger;
///
/// let parsed = parse_tokens(&["-stdout:txt"]).unwrap();
/// let draft = ConfigMerger::merge(None, &parsed.options);
/// assert_eq!(draft.output_format, "txt");
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge the option sources into a draft, lowest to highest precedence.
    ///
    /// The draft starts from the built-in defaults; the static base section
    /// (if present) is applied next, then every command-line option in
    /// encounter order.
    #[must_use]
    pub fn merge(
        base: Option<&BTreeMap<String, OptionValue>>,
        options: &[OptionToken],
    ) -> DraftConfig {
        let mut draft = DraftConfig::default();

        if let Some(base) = base {
            for (key, value) in base {
                Self::apply(&mut draft, key, value.clone());
            }
        }

        for option in options {
            Self::apply(&mut draft, &option.key, option.value.clone());
        }

        draft
    }

    /// Apply one key/value pair to the draft.
    ///
    /// # Routing Rules
    ///
    /// - `stdout` -> `output_format`, `output_path` -> `output_path`;
    ///   switch values render as their text form
    /// - `verbose`, `debug` -> boolean fields via flag interpretation
    /// - `plugin-config` -> the raw spec string, parsed later
    /// - everything else -> the extras map, verbatim
    pub fn apply(draft: &mut DraftConfig, key: &str, value: OptionValue) {
        match key {
            "stdout" => draft.output_format = value.to_string(),
            "output_path" => draft.output_path = Some(value.to_string()),
            "verbose" => draft.verbose = value.is_enabled(),
            "debug" => draft.debug = value.is_enabled(),
            "plugin-config" => draft.plugin_spec = value.to_string(),
            _ => {
                draft.extras.insert(key.to_string(), value);
            }
        }
    }
}
