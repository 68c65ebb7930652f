//! Username aggregation from command-line and file sources.
//!
//! Usernames arrive positionally on the command line and, optionally, from
//! an external file named by the `stdin` option. File names are appended
//! after the command-line names; blank lines and comment lines are dropped.
//! A file that cannot be read is a recoverable condition reported as a
//! warning, never a failure.

use crate::config::schema::OptionValue;

/// The outcome of username aggregation.
///
/// Warnings carry the recoverable conditions (a missing username file, a
/// pathless `stdin` option) for the caller to report; they never block
/// resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedUsernames {
    /// Collected usernames, command-line order then file order.
    pub usernames: Vec<String>,

    /// Recoverable conditions encountered while aggregating.
    pub warnings: Vec<String>,
}

/// Combines positional usernames with the optional external file.
///
/// # Examples
///
/// ```
/// use namehound::usernames::UsernameAggregator;
///
/// let names = UsernameAggregator::parse_lines("alice\n# comment\n\nbob");
/// assert_eq!(names, vec!["alice", "bob"]);
/// ```
pub struct UsernameAggregator;

impl UsernameAggregator {
    /// Aggregate usernames from the positional tokens and, when the `stdin`
    /// option names one, an external file.
    ///
    /// Positional names are taken as given, in order. A text-valued `stdin`
    /// names a file whose filtered lines (see [`Self::parse_lines`]) are
    /// appended after them. An unreadable file and a pathless `stdin` switch
    /// each record a warning and contribute no names; a disabled switch asks
    /// for nothing.
    #[must_use]
    pub fn aggregate(positionals: &[String], stdin: Option<&OptionValue>) -> AggregatedUsernames {
        let mut aggregated = AggregatedUsernames {
            usernames: positionals.to_vec(),
            warnings: Vec::new(),
        };

        match stdin {
            Some(OptionValue::Text(path)) => {
                log::debug!("reading usernames from {path}");
                match std::fs::read_to_string(path) {
                    Ok(content) => aggregated.usernames.extend(Self::parse_lines(&content)),
                    Err(_) => aggregated.warnings.push(format!(
                        "File '{path}' not found, please provide a valid file path, \
                         defaulting to unames from command line arguments"
                    )),
                }
            }
            Some(OptionValue::Switch(true)) => {
                aggregated.warnings.push(
                    "No file path given for 'stdin', defaulting to unames from \
                     command line arguments"
                        .to_string(),
                );
            }
            Some(OptionValue::Switch(false)) | None => {}
        }

        aggregated
    }

    /// Parse file content into username lines.
    ///
    /// Each line is trimmed; empty lines and lines whose trimmed form starts
    /// with `#` are dropped. Order is preserved and duplicates are kept.
    #[must_use]
    pub fn parse_lines(content: &str) -> Vec<String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect()
    }
}
