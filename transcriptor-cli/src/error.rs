//! Error handling for the CLI application

use std::fmt;

/// Message shown in place of a transcription when a word is rejected
pub const INVALID_CHARSET_MESSAGE: &str =
    "Введене слова містить символи які відсутні в українській абетці";

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No words were given on the command line or in the input file
    NoInput,
    /// Configuration error
    ConfigError(String),
    /// Output file exists and overwriting was not requested
    OutputExists(String),
    /// History file could not be parsed
    CorruptHistory(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoInput => write!(f, "No words to transcribe"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::OutputExists(path) => {
                write!(f, "Output file already exists: {path} (use --force)")
            }
            CliError::CorruptHistory(msg) => write!(f, "History file is corrupt: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_input_display() {
        assert_eq!(CliError::NoInput.to_string(), "No words to transcribe");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("capacity must be at least 1".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: capacity must be at least 1"
        );
    }

    #[test]
    fn test_output_exists_display() {
        let error = CliError::OutputExists("rules.toml".to_string());
        assert_eq!(
            error.to_string(),
            "Output file already exists: rules.toml (use --force)"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::CorruptHistory("expected value at line 1".to_string());
        let _: &dyn std::error::Error = &error;

        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("CorruptHistory"));
    }

    #[test]
    fn test_cli_result_wraps_cli_error() {
        let failure: CliResult<()> = Err(CliError::NoInput.into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
