//! Main entry point for the namehound CLI.
//!
//! The binary hands the raw command-line tokens to the resolution pipeline
//! and maps the outcome onto the process exit contract:
//! - `0`: help displayed (explicitly requested or no arguments) or
//!   successful resolution
//! - `1`: no usernames provided by any source
//! - `2`: static configuration document missing, unreadable, or malformed

mod error;
mod help;

use std::env;

use namehound::{init_logger, ConfigResolver, Error, Logger, ResolvedConfig};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    std::process::exit(run(args));
}

fn run(args: Vec<String>) -> i32 {
    match ConfigResolver::new(args).resolve() {
        Ok(resolution) => {
            let logger = init_logger(resolution.config.verbose, resolution.config.debug);

            for warning in &resolution.warnings {
                logger.warn(warning);
            }

            if resolution.config.debug {
                dump_config(&logger, &resolution.config);
            }

            0
        }
        Err(Error::HelpRequested) => {
            help::print_help();
            0
        }
        Err(e) => {
            Logger::default().error(&e.to_string());
            error::exit_code(&e)
        }
    }
}

/// Print the resolved configuration as pretty JSON, for plugin authors
/// inspecting what their settings resolve to.
fn dump_config(logger: &Logger, config: &ResolvedConfig) {
    match serde_json::to_string_pretty(config) {
        Ok(dump) => {
            logger.debug("resolved configuration:");
            println!("{dump}");
        }
        Err(e) => logger.error(&format!("cannot render configuration: {e}")),
    }
}
