//! Transcribe command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::path::PathBuf;
use transcriptor_core::{Transcriber, Transcription, TranscriptionError};

use super::{history_path, load_table};
use crate::config::CliConfig;
use crate::error::{CliError, INVALID_CHARSET_MESSAGE};
use crate::history::History;
use crate::output::{create_formatter, Outcome, OutputFormat};

/// Arguments for the transcribe command
#[derive(Debug, Args)]
pub struct TranscribeArgs {
    /// Words to transcribe
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,

    /// Read words from a file, one per line
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Phoneme rule table to use instead of the built-in one
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// History file
    #[arg(long, value_name = "FILE", env = "TRANSCRIPTOR_HISTORY")]
    pub history: Option<PathBuf>,

    /// Do not record successful transcriptions
    #[arg(long)]
    pub no_history: bool,

    /// Accept combining acute accents as stress marks
    #[arg(long)]
    pub accept_stress: bool,

    /// Transcribe the batch in parallel
    #[arg(short, long)]
    pub parallel: bool,
}

/// Counts reported back to `main` for the exit status
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TranscribeSummary {
    pub transcribed: usize,
    pub rejected: usize,
}

impl TranscribeArgs {
    /// Execute the transcribe command
    pub fn execute(&self, config: &CliConfig) -> Result<TranscribeSummary> {
        log::info!("Starting transcription");
        log::debug!("Arguments: {:?}", self);

        let words = self.collect_words()?;
        if words.is_empty() {
            return Err(CliError::NoInput.into());
        }

        let rules = self
            .rules
            .as_deref()
            .or(config.transcription.rules_file.as_deref());
        let transcriber = Transcriber::builder()
            .table(load_table(rules)?)
            .accept_stress_marks(self.accept_stress || config.transcription.accept_stress_marks)
            .build()?;

        let results = self.transcribe_all(&transcriber, &words);

        let mut history = if self.no_history {
            None
        } else {
            let path = history_path(self.history.as_deref(), config);
            Some(History::load(path, config.history.capacity)?)
        };

        let format = OutputFormat::resolve(self.format, &config.output.default_format)?;
        let mut formatter = create_formatter(format, config.output.pretty_json);
        let mut summary = TranscribeSummary::default();

        for (word, result) in words.iter().zip(results) {
            match result {
                Ok(transcription) => {
                    let rendered = transcription.to_string();
                    formatter.format_entry(
                        word,
                        Outcome::Transcribed {
                            transcription: &rendered,
                            stress: transcription.stress_offset(),
                        },
                    )?;

                    if let Some(history) = history.as_mut() {
                        history.push(word.as_str(), rendered);
                        history.save()?;
                    }
                    summary.transcribed += 1;
                }
                Err(e) if e.is_internal() => {
                    return Err(e).with_context(|| format!("Failed to transcribe '{word}'"));
                }
                Err(e) => {
                    log::warn!("{e}");
                    formatter.format_entry(
                        word,
                        Outcome::Rejected {
                            message: INVALID_CHARSET_MESSAGE,
                        },
                    )?;
                    summary.rejected += 1;
                }
            }
        }

        formatter.finish()?;
        Ok(summary)
    }

    /// Words from the command line followed by those from `--input`
    fn collect_words(&self) -> Result<Vec<String>> {
        let mut words = self.words.clone();

        if let Some(path) = &self.input {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?;
            words.extend(
                content
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(String::from),
            );
        }

        Ok(words)
    }

    /// Results in input order
    fn transcribe_all(
        &self,
        transcriber: &Transcriber,
        words: &[String],
    ) -> Vec<Result<Transcription, TranscriptionError>> {
        if self.parallel {
            log::debug!("Transcribing {} words in parallel", words.len());
            words
                .par_iter()
                .map(|word| transcriber.transcribe(word))
                .collect()
        } else {
            words
                .iter()
                .map(|word| transcriber.transcribe(word))
                .collect()
        }
    }
}
