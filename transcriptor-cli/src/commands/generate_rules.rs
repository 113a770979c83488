//! Generate rules command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use transcriptor_core::phoneme::UKRAINIAN_RULES;

use crate::error::CliError;

/// Arguments for the generate-rules command
#[derive(Debug, Args)]
pub struct GenerateRulesArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateRulesArgs {
    /// Execute the generate-rules command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            return Err(CliError::OutputExists(self.output.display().to_string()).into());
        }

        println!("Generating rule table template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, UKRAINIAN_RULES)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Rule table template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the rule groups to adjust patterns or IPA symbols");
        println!("2. Validate your table:");
        println!("   transcriptor validate --rules {}", self.output.display());
        println!("3. Use it for transcription:");
        println!(
            "   transcriptor transcribe --rules {} <WORD>",
            self.output.display()
        );

        Ok(())
    }
}
