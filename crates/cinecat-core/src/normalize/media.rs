use crate::record::ContentRecord;

/// Size variants tried in order before falling back to the original upload.
const POSTER_SIZES: [&str; 3] = ["medium_large", "large", "medium"];

/// Poster image for the first featured media entry.
pub fn poster_url(record: &ContentRecord) -> Option<String> {
    let media = record.featured_media()?;
    let sized = media.media_details.as_ref().and_then(|details| {
        POSTER_SIZES
            .iter()
            .find_map(|size| details.sizes.get(*size))
            .map(|s| s.source_url.clone())
    });
    sized.or_else(|| media.source_url.clone())
}
