//! `cinecat embed` – validate a player snippet the way the detail page does.

use anyhow::{Context, Result};
use cinecat_core::config::OutputFormat;
use cinecat_core::embed::{validate_embed, EmbedValidationResult};
use cinecat_core::watch::FallbackReason;
use std::fs;
use std::io;
use std::path::Path;

use super::print_json;

/// Returns whether the snippet was accepted.
pub fn run_embed(path: Option<&Path>, format: OutputFormat) -> Result<bool> {
    let raw = match path {
        Some(p) => fs::read_to_string(p)
            .with_context(|| format!("reading snippet from {}", p.display()))?,
        None => io::read_to_string(io::stdin()).context("reading snippet from stdin")?,
    };

    let result = validate_embed(&raw);
    match format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Text => println!("{}", format_result(&result)),
    }
    Ok(result.is_accepted())
}

fn format_result(result: &EmbedValidationResult) -> &str {
    match result {
        EmbedValidationResult::Accepted { safe_markup } => safe_markup.as_str(),
        EmbedValidationResult::Rejected => FallbackReason::EmbedNotAllowed.message(),
    }
}
