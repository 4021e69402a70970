//! CLI command handlers. Each command is in its own file.

mod cards;
mod embed;
mod normalize;
mod watch;

pub use cards::run_cards;
pub use embed::run_embed;
pub use normalize::run_normalize;
pub use watch::run_watch;

use anyhow::{Context, Result};
use cinecat_core::record::{self, ContentRecord};
use serde::Serialize;
use std::path::Path;

fn load_records(path: &Path) -> Result<Vec<ContentRecord>> {
    record::load_records(path).with_context(|| format!("loading records from {}", path.display()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `-` for missing values.
fn or_dash<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn join_limited(items: &[String], limit: usize) -> String {
    items
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
