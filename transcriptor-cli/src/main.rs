//! Command-line front end for Ukrainian phonetic transcription

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use transcriptor_cli::commands::{Commands, ListCommands};
use transcriptor_cli::config::CliConfig;

/// Transcribe Ukrainian words into IPA
#[derive(Debug, Parser)]
#[command(name = "transcriptor", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,
}

fn run(cli: Cli) -> Result<ExitCode> {
    transcriptor_cli::init_logging(cli.verbose, cli.quiet);

    let config = CliConfig::load(cli.config.as_deref())?;
    log::debug!("Configuration: {:?}", config);

    match &cli.command {
        Commands::Transcribe(args) => {
            let summary = args.execute(&config)?;
            log::info!(
                "Transcribed {} word(s), rejected {}",
                summary.transcribed,
                summary.rejected
            );
            if summary.rejected > 0 {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::History(args) => args.execute(&config)?,
        Commands::List { subcommand } => match subcommand {
            ListCommands::Letters(args) => args.execute_letters(&config)?,
            ListCommands::Rules(args) => args.execute_rules(&config)?,
        },
        Commands::Validate(args) => args.execute()?,
        Commands::GenerateRules(args) => args.execute()?,
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}
