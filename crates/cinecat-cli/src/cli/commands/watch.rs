//! `cinecat watch` – show each record's watch section.

use anyhow::Result;
use cinecat_core::config::OutputFormat;
use cinecat_core::normalize::{current_year, normalize_at};
use cinecat_core::watch::{plan_watch, WatchSection};
use serde::Serialize;
use std::path::Path;

use super::{load_records, print_json};

#[derive(Debug, Serialize)]
struct WatchRow {
    slug: String,
    #[serde(flatten)]
    section: WatchSection,
}

pub fn run_watch(path: &Path, format: OutputFormat) -> Result<()> {
    let year = current_year();
    let rows: Vec<WatchRow> = load_records(path)?
        .iter()
        .map(|r| WatchRow {
            slug: r.slug.clone(),
            section: plan_watch(&normalize_at(r, year)),
        })
        .collect();

    match format {
        OutputFormat::Json => print_json(&rows)?,
        OutputFormat::Text => {
            println!("{:<28} {:<16} {}", "SLUG", "WATCH", "DETAIL");
            for row in &rows {
                println!(
                    "{:<28} {:<16} {}",
                    row.slug,
                    row.section.label(),
                    section_detail(&row.section)
                );
            }
        }
    }
    Ok(())
}

fn section_detail(section: &WatchSection) -> &str {
    match section {
        WatchSection::Player { safe_markup } => safe_markup.as_str(),
        WatchSection::ExternalLink { url } => url.as_str(),
        WatchSection::Unavailable { reason } => reason.message(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinecat_core::watch::FallbackReason;

    #[test]
    fn detail_for_each_section() {
        assert_eq!(
            section_detail(&WatchSection::ExternalLink {
                url: "https://watch.example/t".into()
            }),
            "https://watch.example/t"
        );
        assert_eq!(
            section_detail(&WatchSection::Unavailable {
                reason: FallbackReason::NotStreamable
            }),
            "No streaming available for this title."
        );
    }

    #[test]
    fn json_row_is_flat() {
        let row = WatchRow {
            slug: "northbound".into(),
            section: WatchSection::Unavailable {
                reason: FallbackReason::LinkMissing,
            },
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["slug"], "northbound");
        assert_eq!(json["kind"], "unavailable");
        assert_eq!(json["reason"], "link_missing");
    }
}
