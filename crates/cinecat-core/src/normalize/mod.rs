//! Field normalizer: typed, defaulted display values from a content record.
//!
//! Every function here is pure and total. A malformed or missing custom
//! field resolves to a default or to `None`; it never fails the record.
//! Values are recomputed on each call and nothing is cached.

mod media;
mod numeric;
mod stream;
mod taxonomy;
mod text;

use serde::Serialize;

use crate::record::ContentRecord;

pub use media::poster_url;
pub use numeric::{current_year, rating, release_year, release_year_or, runtime_minutes};
pub use stream::{stream_type, StreamType};
pub use taxonomy::genres;
pub use text::{
    excerpt_text, stream_iframe, stream_provider, stream_url, title, trailer_url,
};

/// Display values for one content record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedDisplayFields {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub excerpt_text: String,
    pub release_year: i32,
    pub rating: Option<f64>,
    pub runtime_minutes: Option<f64>,
    pub genres: Vec<String>,
    pub trailer_url: Option<String>,
    pub poster_url: Option<String>,
    pub stream_type: StreamType,
    pub stream_url: Option<String>,
    /// Untrusted player markup; never serialized or rendered as-is.
    #[serde(skip)]
    pub stream_iframe: Option<String>,
    pub stream_provider: Option<String>,
}

/// Normalize a record, using the current year as the release-year fallback.
pub fn normalize(record: &ContentRecord) -> NormalizedDisplayFields {
    normalize_at(record, current_year())
}

/// Normalize a record with an explicit release-year fallback.
pub fn normalize_at(record: &ContentRecord, fallback_year: i32) -> NormalizedDisplayFields {
    NormalizedDisplayFields {
        id: record.id,
        slug: record.slug.clone(),
        title: title(record),
        excerpt_text: excerpt_text(record),
        release_year: release_year_or(record, fallback_year),
        rating: rating(record),
        runtime_minutes: runtime_minutes(record),
        genres: genres(record),
        trailer_url: trailer_url(record),
        poster_url: poster_url(record),
        stream_type: stream_type(record),
        stream_url: stream_url(record),
        stream_iframe: stream_iframe(record),
        stream_provider: stream_provider(record),
    }
}
