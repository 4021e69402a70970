//! Content records as delivered by the CMS.
//!
//! These types mirror the CMS REST shape closely enough to deserialize it
//! and no further. Everything editor-controlled stays loosely typed here;
//! turning it into display values is the normalizer's job.

mod error;
pub mod fields;
mod load;

use std::collections::BTreeMap;

use serde::Deserialize;

pub use error::RecordError;
pub use fields::{CustomFields, FieldValue};
pub use load::{load_records, parse_records};

/// One catalog item (movie or series), already fetched with terms and media embedded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentRecord {
    pub id: i64,
    pub slug: String,
    #[serde(default)]
    pub title: Option<Rendered>,
    #[serde(default)]
    pub excerpt: Option<Rendered>,
    #[serde(default)]
    pub content: Option<Rendered>,
    #[serde(default)]
    pub acf: CustomFields,
    #[serde(default, rename = "_embedded")]
    pub embedded: Option<Embedded>,
}

/// CMS-rendered HTML fragment (`{"rendered": "..."}`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Embedded {
    /// Taxonomy terms, grouped per taxonomy by the CMS.
    #[serde(default, rename = "wp:term")]
    pub terms: Vec<Vec<Term>>,
    #[serde(default, rename = "wp:featuredmedia")]
    pub featured_media: Vec<FeaturedMedia>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Term {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub taxonomy: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeaturedMedia {
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub media_details: Option<MediaDetails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaDetails {
    /// Sized variants keyed by size name (`medium`, `large`, ...).
    #[serde(default)]
    pub sizes: BTreeMap<String, MediaSize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaSize {
    pub source_url: String,
}

impl ContentRecord {
    /// Start a record with just its identity; handy for fixtures.
    pub fn new(id: i64, slug: impl Into<String>) -> Self {
        Self {
            id,
            slug: slug.into(),
            ..Self::default()
        }
    }

    /// All embedded taxonomy terms, groups flattened in source order.
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.embedded
            .iter()
            .flat_map(|e| e.terms.iter())
            .flatten()
    }

    /// The featured media entry the catalog uses (the first one).
    pub fn featured_media(&self) -> Option<&FeaturedMedia> {
        self.embedded.as_ref()?.featured_media.first()
    }
}
