//! Output formatting module

use anyhow::Result;
use std::io;

use crate::error::CliError;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `word<TAB>transcription` line per word
    Text,
    /// JSON array of entries
    Json,
}

impl OutputFormat {
    /// Parse the `default_format` value of a config file
    pub fn from_config(value: &str) -> Result<Self> {
        <Self as clap::ValueEnum>::from_str(value, true)
            .map_err(|e| CliError::ConfigError(format!("output format: {e}")).into())
    }

    /// Flag value if given, otherwise the configured default
    pub fn resolve(flag: Option<Self>, configured: &str) -> Result<Self> {
        match flag {
            Some(format) => Ok(format),
            None => Self::from_config(configured),
        }
    }
}

/// Create a formatter writing to stdout
pub fn create_formatter(format: OutputFormat, pretty_json: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::stdout()),
        OutputFormat::Json => Box::new(JsonFormatter::new(io::stdout(), pretty_json)),
    }
}

/// What happened to one word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// Word was transcribed
    Transcribed {
        /// Bracketed transcription
        transcription: &'a str,
        /// Stressed vowel offset, when one was marked
        stress: Option<usize>,
    },
    /// Word was rejected; `message` replaces the transcription
    Rejected {
        /// User-facing message
        message: &'a str,
    },
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single word
    fn format_entry(&mut self, word: &str, outcome: Outcome<'_>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_config() {
        assert_eq!(OutputFormat::from_config("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_config("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_config("markdown").is_err());
    }

    #[test]
    fn test_flag_overrides_config() {
        let format = OutputFormat::resolve(Some(OutputFormat::Json), "text").unwrap();
        assert_eq!(format, OutputFormat::Json);
        let format = OutputFormat::resolve(None, "json").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }
}
