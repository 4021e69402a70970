//! CLI for checking content records and player embeds offline.

mod commands;

use anyhow::Result;
use cinecat_core::config::{self, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::Path;
use std::process::ExitCode;

use commands::{run_cards, run_embed, run_normalize, run_watch};

/// Top-level CLI for cinecat.
#[derive(Debug, Parser)]
#[command(name = "cinecat")]
#[command(about = "cinecat: normalize CMS content records and validate player embeds", long_about = None)]
pub struct Cli {
    /// Print JSON instead of text (overrides the configured output format).
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print normalized display fields for every record in a JSON file.
    Normalize {
        /// Path to a record (or list of records) as returned by the CMS API.
        path: String,
    },

    /// Validate a player embed snippet; exits with status 2 if it is rejected.
    Embed {
        /// File holding the snippet. Reads stdin when omitted.
        path: Option<String>,
    },

    /// Show what each record's watch section would render.
    Watch {
        /// Path to a record (or list of records) as returned by the CMS API.
        path: String,
    },

    /// Print catalog cards for a list of records.
    Cards {
        /// Path to a list of records as returned by the CMS API.
        path: String,
    },
}

/// Exit status for a rejected embed, distinct from general failure (1).
pub const EXIT_REJECTED: u8 = 2;

impl Cli {
    pub fn run_from_args() -> Result<ExitCode> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let format = if cli.json { OutputFormat::Json } else { cfg.output };

        match cli.command {
            CliCommand::Normalize { path } => run_normalize(Path::new(&path), &cfg, format)?,
            CliCommand::Embed { path } => {
                let accepted = run_embed(path.as_deref().map(Path::new), format)?;
                if !accepted {
                    return Ok(ExitCode::from(EXIT_REJECTED));
                }
            }
            CliCommand::Watch { path } => run_watch(Path::new(&path), format)?,
            CliCommand::Cards { path } => run_cards(Path::new(&path), &cfg, format)?,
        }

        Ok(ExitCode::SUCCESS)
    }
}
