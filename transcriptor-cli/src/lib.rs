//! Transcriptor CLI library
//!
//! This library provides the command-line interface for the Ukrainian
//! phonetic transcription engine: word batches, the recent-history store
//! and rule table tooling.

pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod output;

pub use error::{CliError, CliResult};

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` still wins over the verbosity count when set.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A second initialization (e.g. from tests) is not an error worth failing on
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .try_init();
}
