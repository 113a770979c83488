//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CliError;
use crate::history::History;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// History configuration
    #[serde(default)]
    pub history: HistoryConfig,

    /// Transcription configuration
    #[serde(default)]
    pub transcription: TranscriptionConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// History-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// File holding recent transcriptions
    pub path: PathBuf,

    /// Number of entries kept
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("transcriptor_history.json"),
            capacity: History::DEFAULT_CAPACITY,
        }
    }
}

/// Transcription-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct TranscriptionConfig {
    /// Accept combining acute accents in input
    pub accept_stress_marks: bool,

    /// Rule table to use instead of the built-in one
    pub rules_file: Option<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load from a TOML file, or defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.history.capacity == 0 {
            return Err(CliError::ConfigError(
                "history capacity must be at least 1".to_string(),
            )
            .into());
        }
        OutputFormat::from_config(&self.output.default_format)?;
        Ok(())
    }
}
