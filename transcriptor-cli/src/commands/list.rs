//! List command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use transcriptor_core::alphabet::{self, Consonant, Letter, Vowel};

use super::load_table;
use crate::config::CliConfig;

/// Arguments shared by the list subcommands
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Phoneme rule table to use instead of the built-in one
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,
}

impl ListArgs {
    fn rules_file<'a>(&'a self, config: &'a CliConfig) -> Option<&'a std::path::Path> {
        self.rules
            .as_deref()
            .or(config.transcription.rules_file.as_deref())
    }

    /// Print every alphabet letter with its class and IPA reading
    pub fn execute_letters(&self, config: &CliConfig) -> Result<()> {
        let table = load_table(self.rules_file(config))?;

        println!("Ukrainian letters:");
        for letter in alphabet::letters() {
            let ipa = letter
                .to_ipa(&table)
                .map(|ipa| format!("[{ipa}]"))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "  {}  {:<18} {}",
                letter.letter(),
                class_name(&letter),
                ipa
            );
        }
        Ok(())
    }

    /// Print the rule table in priority order with assigned codes
    pub fn execute_rules(&self, config: &CliConfig) -> Result<()> {
        let table = load_table(self.rules_file(config))?;

        println!(
            "Phoneme rules for {} ({}), {} total:",
            table.language_name(),
            table.language_code(),
            table.len()
        );
        for rule in table.rules() {
            println!(
                "  {}  {:<14} {:<4} {}",
                rule.code(),
                rule.kind(),
                rule.pattern(),
                rule.ipa()
            );
        }
        Ok(())
    }
}

fn class_name(letter: &Letter) -> &'static str {
    match letter {
        Letter::Vowel(Vowel::Simple(_)) => "simple vowel",
        Letter::Vowel(Vowel::Complex(_)) => "complex vowel",
        Letter::Consonant(Consonant::Simple(_)) => "simple consonant",
        Letter::Consonant(Consonant::Complex(_)) => "complex consonant",
        Letter::Glide => "glide",
        Letter::SoftSign => "soft sign",
        Letter::Marker => "apostrophe",
    }
}
