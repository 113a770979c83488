//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use transcriptor_core::{PhonemeTable, RuleKind};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the rule table file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub rules: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating rule table: {}", self.rules.display());

        match PhonemeTable::from_file(&self.rules) {
            Ok(table) => {
                println!("✓ Rule table is valid!");
                println!("  Language code: {}", table.language_code());
                println!("  Language name: {}", table.language_name());
                println!("  Rules: {}", table.len());
                for kind in [
                    RuleKind::SoftGeminate,
                    RuleKind::Affricate,
                    RuleKind::Palatalized,
                    RuleKind::Consonant,
                    RuleKind::Vowel,
                ] {
                    let count = table.rules().iter().filter(|r| r.kind() == kind).count();
                    if count > 0 {
                        println!("    {kind}: {count}");
                    }
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Rule table is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
