//! Command-line token classification and option decoding.
//!
//! The tool's argument grammar is deliberately tiny: a token beginning with
//! `-` or `/` is an option of the form `key` or `key:value`; every other
//! token is a positional username. This module walks the raw argument list
//! once, classifies each token, and produces the decoded option stream and
//! the positional username list in encounter order.

use crate::config::OptionValue;
use crate::error::{Error, Result};

/// A decoded option token: a key with its switch or text value.
///
/// # Examples
///
/// ```
/// use namehound::args::decode_option;
/// use namehound::config::OptionValue;
///
/// let option = decode_option("stdout:json");
/// assert_eq!(option.key, "stdout");
/// assert_eq!(option.value, OptionValue::Text("json".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionToken {
    /// The option key, prefix characters already stripped.
    pub key: String,
    /// The decoded value: `Switch(true)` for a bare key, text otherwise.
    pub value: OptionValue,
}

/// Classification of a single raw command-line token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgToken {
    /// An option token, prefix-stripped and decoded.
    Option(OptionToken),
    /// A positional token: a username, already trimmed.
    Username(String),
}

/// The classified argument list: options and usernames, each in
/// left-to-right encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    /// Decoded option tokens, in encounter order.
    pub options: Vec<OptionToken>,
    /// Positional usernames, trimmed, empty entries discarded.
    pub usernames: Vec<String>,
}

/// Returns true if the raw token is an option token.
#[must_use]
pub fn is_option_token(raw: &str) -> bool {
    raw.starts_with('-') || raw.starts_with('/')
}

/// Strips the leading run of option prefix characters.
///
/// Both prefix characters are treated alike, so `--verbose`, `/verbose`,
/// and `-/verbose` all yield `verbose`.
#[must_use]
pub fn strip_prefix_chars(raw: &str) -> &str {
    raw.trim_start_matches(['-', '/'])
}

/// Decodes a prefix-stripped option token into key and value.
///
/// The token splits on the first `:`; the value is the literal remainder,
/// so later colons (Windows paths, URLs) survive intact. A token without a
/// colon is a boolean switch.
///
/// # Examples
///
/// ```
/// use namehound::args::decode_option;
/// use namehound::config::OptionValue;
///
/// let bare = decode_option("verbose");
/// assert_eq!(bare.value, OptionValue::Switch(true));
///
/// let path = decode_option(r"stdin:C:\users.txt");
/// assert_eq!(path.value, OptionValue::Text(r"C:\users.txt".to_string()));
/// ```
#[must_use]
pub fn decode_option(stripped: &str) -> OptionToken {
    match stripped.split_once(':') {
        Some((key, value)) => OptionToken {
            key: key.to_string(),
            value: OptionValue::Text(value.to_string()),
        },
        None => OptionToken {
            key: stripped.to_string(),
            value: OptionValue::Switch(true),
        },
    }
}

/// Classifies one raw token as an option or a username.
///
/// Positional tokens are trimmed here; the caller decides what to do with
/// a token that trims to nothing.
#[must_use]
pub fn classify_token(raw: &str) -> ArgToken {
    if is_option_token(raw) {
        ArgToken::Option(decode_option(strip_prefix_chars(raw)))
    } else {
        ArgToken::Username(raw.trim().to_string())
    }
}

/// Walks the raw argument list and produces the classified result.
///
/// Two keys receive special treatment during the walk:
///
/// - `help` short-circuits everything, before any later token is looked
///   at, by returning [`Error::HelpRequested`].
/// - `unames` is silently dropped, so the aggregated username list can
///   never be overwritten through an option token.
///
/// Positional tokens that trim to the empty string are discarded;
/// usernames are always non-empty.
///
/// # Errors
///
/// Returns [`Error::HelpRequested`] when a help token is present.
///
/// # Examples
///
/// ```
/// use namehound::args::parse_tokens;
///
/// let parsed = parse_tokens(&["alice", "-verbose", "/stdout:json", "bob"]).unwrap();
/// assert_eq!(parsed.usernames, vec!["alice", "bob"]);
/// assert_eq!(parsed.options.len(), 2);
/// ```
pub fn parse_tokens<S: AsRef<str>>(raw: &[S]) -> Result<ParsedArgs> {
    let mut parsed = ParsedArgs::default();

    for raw_token in raw {
        match classify_token(raw_token.as_ref()) {
            ArgToken::Option(option) => {
                if option.key == "help" {
                    return Err(Error::HelpRequested);
                }
                // The aggregated username list is built only from
                // positionals and the external file.
                if option.key == "unames" {
                    continue;
                }
                parsed.options.push(option);
            }
            ArgToken::Username(name) => {
                if !name.is_empty() {
                    parsed.usernames.push(name);
                }
            }
        }
    }

    Ok(parsed)
}
