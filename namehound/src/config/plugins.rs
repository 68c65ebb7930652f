//! Plugin-configuration grammar parsing.
//!
//! Per-plugin settings arrive as a single string in a three-level delimiter
//! grammar: plugin clauses separated by `+`, the plugin name separated from
//! its settings by the first `=`, and individual settings separated by `,`.
//! `sherlock=fast,deep+maigret=slow` names two plugins. After the inline
//! form is parsed, the static document's plugin section is applied on top
//! with full overwrite precedence per plugin name.

use std::collections::BTreeMap;

/// Parses the inline plugin-config grammar.
///
/// # Examples
///
/// ```
/// use namehound::config::PluginSpecParser;
///
/// let plugins = PluginSpecParser::parse("sherlock=fast,deep+maigret=slow");
/// assert_eq!(plugins["sherlock"], vec!["fast", "deep"]);
/// assert_eq!(plugins["maigret"], vec!["slow"]);
/// ```
pub struct PluginSpecParser;

impl PluginSpecParser {
    /// Parse an inline plugin spec into per-plugin setting lists.
    ///
    /// A clause lacking an `=` contributes nothing; that is a silent-skip
    /// policy, not an error. The name is everything before the first `=`,
    /// so later `=` characters belong to the settings portion. A repeated
    /// plugin name keeps the last clause. Duplicate settings within one
    /// clause are preserved in order, not deduplicated.
    #[must_use]
    pub fn parse(spec: &str) -> BTreeMap<String, Vec<String>> {
        let mut plugins = BTreeMap::new();

        for clause in spec.split('+') {
            // Clauses without an '=' are dropped without diagnostic.
            if let Some((name, settings)) = clause.split_once('=') {
                plugins.insert(
                    name.to_string(),
                    settings.split(',').map(str::to_string).collect(),
                );
            }
        }

        plugins
    }

    /// Apply the static document's plugin section over the parsed map.
    ///
    /// Each static entry replaces the entire setting list for its plugin
    /// name; lists are never merged element-wise. Plugins only present in
    /// the parsed map are left alone.
    pub fn apply_overrides(
        plugins: &mut BTreeMap<String, Vec<String>>,
        overrides: Option<&BTreeMap<String, Vec<String>>>,
    ) {
        if let Some(overrides) = overrides {
            for (name, settings) in overrides {
                plugins.insert(name.clone(), settings.clone());
            }
        }
    }
}
