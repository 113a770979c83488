//! CLI command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use transcriptor_core::PhonemeTable;

use crate::config::CliConfig;

pub mod generate_rules;
pub mod history;
pub mod list;
pub mod transcribe;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Transcribe Ukrainian words into IPA
    Transcribe(transcribe::TranscribeArgs),

    /// Show the most recent transcriptions
    History(history::HistoryArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a phoneme rule table file
    Validate(validate::ValidateArgs),

    /// Write the built-in rule table as a template
    GenerateRules(generate_rules::GenerateRulesArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List alphabet letters with their classes and IPA readings
    Letters(list::ListArgs),

    /// List phoneme rules with their codes
    Rules(list::ListArgs),
}

/// Load a custom rule table, or the built-in one when no path is given
pub fn load_table(rules: Option<&Path>) -> Result<Arc<PhonemeTable>> {
    let table = match rules {
        Some(path) => {
            log::info!("Loading rule table from {}", path.display());
            PhonemeTable::from_file(path)
                .with_context(|| format!("Failed to load rule table: {}", path.display()))?
        }
        None => PhonemeTable::ukrainian().context("Built-in rule table is invalid")?,
    };
    Ok(Arc::new(table))
}

/// History file from the flag (or environment), else from the config
pub fn history_path(flag: Option<&Path>, config: &CliConfig) -> PathBuf {
    flag.map(Path::to_path_buf)
        .unwrap_or_else(|| config.history.path.clone())
}
