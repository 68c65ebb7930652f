//! Exit-code policy for the binary.
//!
//! The library reports every terminal condition as a tagged error; this
//! module maps each onto the process exit contract.

use namehound::Error;

/// Get the appropriate exit code for a resolution failure.
///
/// Exit codes:
/// - 0: Help requested (not a failure)
/// - 1: No usernames provided
/// - 2: Static configuration document missing, unreadable, or malformed
pub fn exit_code(error: &Error) -> i32 {
    match error {
        Error::HelpRequested => 0,
        Error::NoUsernames => 1,
        Error::ConfigRead { .. } | Error::ConfigParse { .. } | Error::ConfigLocation { .. } => 2,
    }
}
