//! History command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::history_path;
use crate::config::CliConfig;
use crate::history::History;
use crate::output::{create_formatter, Outcome, OutputFormat};

/// Arguments for the history command
#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// History file
    #[arg(long, value_name = "FILE", env = "TRANSCRIPTOR_HISTORY")]
    pub history: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl HistoryArgs {
    /// Execute the history command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let path = history_path(self.history.as_deref(), config);
        let history = History::load(&path, config.history.capacity)?;
        log::info!(
            "Loaded {} history entries from {}",
            history.len(),
            path.display()
        );

        let format = OutputFormat::resolve(self.format, &config.output.default_format)?;
        let mut formatter = create_formatter(format, config.output.pretty_json);
        for entry in history.recent() {
            formatter.format_entry(
                &entry.word,
                Outcome::Transcribed {
                    transcription: &entry.transcription,
                    stress: None,
                },
            )?;
        }
        formatter.finish()
    }
}
