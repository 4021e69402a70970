//! `cinecat cards` – catalog grid rows.

use anyhow::Result;
use cinecat_core::card::MovieCard;
use cinecat_core::config::{CinecatConfig, OutputFormat};
use cinecat_core::normalize::current_year;
use std::path::Path;

use super::{join_limited, load_records, or_dash, print_json};

pub fn run_cards(path: &Path, cfg: &CinecatConfig, format: OutputFormat) -> Result<()> {
    let year = current_year();
    let cards: Vec<MovieCard> = load_records(path)?
        .iter()
        .map(|r| MovieCard::from_record(r, year))
        .collect();

    match format {
        OutputFormat::Json => print_json(&cards)?,
        OutputFormat::Text => {
            if cards.is_empty() {
                println!("No titles.");
                return Ok(());
            }
            println!(
                "{:<6} {:<32} {:<6} {:<7} {}",
                "ID", "TITLE", "YEAR", "RATING", "GENRES"
            );
            for card in &cards {
                println!("{}", format_row(card, cfg.card_genre_limit));
            }
        }
    }
    Ok(())
}

fn format_row(card: &MovieCard, genre_limit: usize) -> String {
    format!(
        "{:<6} {:<32} {:<6} {:<7} {}",
        card.id,
        card.title,
        card.year,
        or_dash(card.rating.map(|r| format!("{r:.1}"))),
        join_limited(&card.genres, genre_limit)
    )
}
