//! Configuration schema definitions.
//!
//! This module defines the data shapes flowing through the resolution
//! pipeline: the static configuration document, the open option-value type,
//! the intermediate merge draft, and the final resolved configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// The built-in default output format identifier.
pub const DEFAULT_OUTPUT_FORMAT: &str = "default";

/// Value of a configuration option in the open mapping.
///
/// Options carry either a boolean switch (a bare `-verbose` token, or a YAML
/// boolean in the static document) or free text (everything after the first
/// colon of a `-key:value` token, or a YAML string).
///
/// # Examples
///
/// ```
/// use namehound::config::OptionValue;
///
/// let switch = OptionValue::Switch(true);
/// let text = OptionValue::Text("json".to_string());
///
/// assert!(switch.is_enabled());
/// assert_eq!(text.as_text(), Some("json"));
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum OptionValue {
    /// A boolean switch.
    Switch(bool),
    /// A textual value.
    Text(String),
}

impl OptionValue {
    /// Interprets the value as an on/off flag.
    ///
    /// A switch applies directly; text counts as enabled when non-empty,
    /// mirroring the permissive truthiness the open mapping has always had.
    ///
    /// # Examples
    ///
    /// ```
    /// use namehound::config::OptionValue;
    ///
    /// assert!(OptionValue::Switch(true).is_enabled());
    /// assert!(OptionValue::Text("yes".into()).is_enabled());
    /// assert!(!OptionValue::Text(String::new()).is_enabled());
    /// ```
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Switch(enabled) => *enabled,
            Self::Text(text) => !text.is_empty(),
        }
    }

    /// Returns the textual payload, if the value carries one.
    ///
    /// # Examples
    ///
    /// ```
    /// use namehound::config::OptionValue;
    ///
    /// assert_eq!(OptionValue::Text("names.txt".into()).as_text(), Some("names.txt"));
    /// assert_eq!(OptionValue::Switch(true).as_text(), None);
    /// ```
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Switch(_) => None,
        }
    }
}

impl std::fmt::Display for OptionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Switch(enabled) => write!(f, "{enabled}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

impl<'de> Deserialize<'de> for OptionValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Helper {
            Bool(bool),
            Int(i64),
            Float(f64),
            Text(String),
        }

        // Bare numbers in the static document coerce to their text
        // rendering; the base section performs no schema validation.
        match Helper::deserialize(deserializer)? {
            Helper::Bool(enabled) => Ok(OptionValue::Switch(enabled)),
            Helper::Int(number) => Ok(OptionValue::Text(number.to_string())),
            Helper::Float(number) => Ok(OptionValue::Text(number.to_string())),
            Helper::Text(text) => Ok(OptionValue::Text(text)),
        }
    }
}

/// The static configuration document.
///
/// An install-bundled YAML file with two recognized top-level sections,
/// both optional: `BaseConfig` (flat option mapping applied before the
/// command line) and `PluginConfig` (per-plugin setting lists applied after
/// the inline plugin grammar). Sections that are absent or explicitly null
/// read as empty; unrecognized extra sections are ignored.
///
/// # Examples
///
/// ```
/// use namehound::config::StaticConfig;
///
/// let doc = "BaseConfig:\n  stdout: json\nPluginConfig:\n  sherlock:\n    - fast\n";
/// let config: StaticConfig = serde_yaml::from_str(doc).unwrap();
/// assert!(config.base.is_some());
/// assert!(config.plugins.is_some());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct StaticConfig {
    /// Base option mapping merged over the built-in defaults.
    #[serde(rename = "BaseConfig", default)]
    pub base: Option<BTreeMap<String, OptionValue>>,

    /// Per-plugin setting lists with highest plugin precedence.
    #[serde(rename = "PluginConfig", default)]
    pub plugins: Option<BTreeMap<String, Vec<String>>>,
}

/// Intermediate merge product of the option sources.
///
/// Holds the typed fields after defaults, static base entries, and
/// command-line options have been applied, with the plugin configuration
/// still in its raw, unparsed spec form. Produced by the merger, consumed
/// by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftConfig {
    /// Output format identifier (open set, no enumeration enforced).
    pub output_format: String,

    /// Output file path; absent unless explicitly set.
    pub output_path: Option<String>,

    /// Verbose diagnostics flag.
    pub verbose: bool,

    /// Debug diagnostics flag.
    pub debug: bool,

    /// Raw plugin-config spec string, pre-parse form.
    pub plugin_spec: String,

    /// Passthrough keys with no built-in routing.
    pub extras: BTreeMap<String, OptionValue>,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
            output_path: None,
            verbose: false,
            debug: false,
            plugin_spec: String::new(),
            extras: BTreeMap::new(),
        }
    }
}

/// The final merged, validated configuration object.
///
/// Built once per invocation and handed unmodified to downstream
/// collaborators after validation. The known fields are typed; everything
/// else rides in the `extras` side mapping, keeping the configuration an
/// open mapping rather than a closed record.
///
/// # Examples
///
/// ```
/// use namehound::config::ResolvedConfig;
///
/// let config = ResolvedConfig {
///     usernames: vec!["alice".to_string()],
///     ..Default::default()
/// };
/// assert_eq!(config.output_format, "default");
/// assert!(config.plugin_config.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Usernames to look up, command-line order then file order.
    pub usernames: Vec<String>,

    /// Output format identifier (open set, no enumeration enforced).
    pub output_format: String,

    /// Output file path; absent unless explicitly set.
    pub output_path: Option<String>,

    /// Verbose diagnostics flag.
    pub verbose: bool,

    /// Debug diagnostics flag.
    pub debug: bool,

    /// Per-plugin setting lists, fully resolved.
    pub plugin_config: BTreeMap<String, Vec<String>>,

    /// Passthrough keys stored verbatim for downstream collaborators.
    pub extras: BTreeMap<String, OptionValue>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            usernames: Vec::new(),
            output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
            output_path: None,
            verbose: false,
            debug: false,
            plugin_config: BTreeMap::new(),
            extras: BTreeMap::new(),
        }
    }
}
