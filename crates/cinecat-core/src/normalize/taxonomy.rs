use crate::record::ContentRecord;

const GENRE_TAXONOMY: &str = "genre";

/// Genre names in source order. Duplicates are kept; callers that need a
/// set deduplicate themselves.
pub fn genres(record: &ContentRecord) -> Vec<String> {
    record
        .terms()
        .filter(|t| t.taxonomy == GENRE_TAXONOMY)
        .map(|t| t.name.clone())
        .collect()
}
