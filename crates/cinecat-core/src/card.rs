//! Compact per-title projection for catalog grids.

use serde::Serialize;

use crate::normalize::{genres, poster_url, rating, release_year_or, title};
use crate::record::ContentRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieCard {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub year: i32,
    pub rating: Option<f64>,
    pub poster_url: Option<String>,
    pub genres: Vec<String>,
}

impl MovieCard {
    /// Build a card; `current_year` is the release-year fallback.
    pub fn from_record(record: &ContentRecord, current_year: i32) -> Self {
        Self {
            id: record.id,
            slug: record.slug.clone(),
            title: title(record),
            year: release_year_or(record, current_year),
            rating: rating(record),
            poster_url: poster_url(record),
            genres: genres(record),
        }
    }

    /// Detail page path for this card.
    pub fn href(&self) -> String {
        format!("/movies/{}", self.slug)
    }
}
