//! `cinecat normalize` – print normalized display fields.

use anyhow::Result;
use cinecat_core::config::{CinecatConfig, OutputFormat};
use cinecat_core::normalize::{current_year, normalize_at, NormalizedDisplayFields};
use std::path::Path;

use super::{join_limited, load_records, or_dash, print_json};

pub fn run_normalize(path: &Path, cfg: &CinecatConfig, format: OutputFormat) -> Result<()> {
    let year = current_year();
    let fields: Vec<NormalizedDisplayFields> = load_records(path)?
        .iter()
        .map(|r| normalize_at(r, year))
        .collect();

    match format {
        OutputFormat::Json => print_json(&fields)?,
        OutputFormat::Text => {
            for (i, f) in fields.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print!("{}", format_fields(f, cfg.detail_genre_limit));
            }
        }
    }
    Ok(())
}

fn format_fields(f: &NormalizedDisplayFields, genre_limit: usize) -> String {
    let rating = f.rating.map(|r| format!("{r:.1}"));
    // 0 and negative runtimes are placeholders in the CMS.
    let runtime = f.runtime_minutes.filter(|m| *m > 0.0).map(|m| format!("{m} min"));
    let genres = if f.genres.is_empty() {
        "-".to_string()
    } else {
        join_limited(&f.genres, genre_limit)
    };
    let mut out = String::new();
    let mut line = |label: &str, value: String| {
        out.push_str(&format!("{:<10} {}\n", label, value));
    };
    line("ID", f.id.to_string());
    line("SLUG", f.slug.clone());
    line("TITLE", f.title.clone());
    line("YEAR", f.release_year.to_string());
    line("RATING", or_dash(rating));
    line("RUNTIME", or_dash(runtime));
    line("GENRES", genres);
    line("POSTER", or_dash(f.poster_url.as_deref()));
    line("TRAILER", or_dash(f.trailer_url.as_deref()));
    line("STREAM", f.stream_type.as_str().to_string());
    line("PROVIDER", or_dash(f.stream_provider.as_deref()));
    out
}
