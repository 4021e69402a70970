//! Free-text fields: title, excerpt, outbound links, provider.

use std::sync::OnceLock;

use regex::Regex;

use crate::record::fields::{STREAM_IFRAME, STREAM_PROVIDER, STREAM_URL, TRAILER_URL};
use crate::record::ContentRecord;

const UNTITLED: &str = "Untitled";

pub fn title(record: &ContentRecord) -> String {
    record
        .title
        .as_ref()
        .map(|t| t.rendered.clone())
        .unwrap_or_else(|| UNTITLED.to_string())
}

/// Excerpt with markup tags removed. The text is still entity-encoded and
/// must be escaped by whatever renders it.
pub fn excerpt_text(record: &ContentRecord) -> String {
    record
        .excerpt
        .as_ref()
        .map(|e| strip_tags(&e.rendered))
        .unwrap_or_default()
}

/// Trailer link. Rendered as a plain outbound anchor, so its shape is not checked.
pub fn trailer_url(record: &ContentRecord) -> Option<String> {
    owned(record, TRAILER_URL)
}

pub fn stream_url(record: &ContentRecord) -> Option<String> {
    owned(record, STREAM_URL)
}

/// Raw, untrusted player markup. Only ever handed to [`crate::embed::validate_embed`].
pub fn stream_iframe(record: &ContentRecord) -> Option<String> {
    owned(record, STREAM_IFRAME)
}

pub fn stream_provider(record: &ContentRecord) -> Option<String> {
    owned(record, STREAM_PROVIDER)
}

fn owned(record: &ContentRecord, field: &str) -> Option<String> {
    record.acf.trimmed_text(field).map(str::to_string)
}

fn strip_tags(html: &str) -> String {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    let re = TAG_RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag regex should compile"));
    re.replace_all(html, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{CustomFields, Rendered};

    #[test]
    fn title_defaults_to_untitled() {
        assert_eq!(title(&ContentRecord::new(1, "x")), "Untitled");
        let record = ContentRecord {
            title: Some(Rendered {
                rendered: "Northbound".into(),
            }),
            ..ContentRecord::new(1, "x")
        };
        assert_eq!(title(&record), "Northbound");
    }

    #[test]
    fn excerpt_strips_markup() {
        let record = ContentRecord {
            excerpt: Some(Rendered {
                rendered: "<p>A <em>quiet</em> drama.</p>\n".into(),
            }),
            ..ContentRecord::new(1, "x")
        };
        assert_eq!(excerpt_text(&record), "A quiet drama.");
        assert_eq!(excerpt_text(&ContentRecord::new(1, "x")), "");
    }

    #[test]
    fn blank_trailer_is_absent() {
        let record = ContentRecord {
            acf: CustomFields::new().with(TRAILER_URL, "   "),
            ..ContentRecord::new(1, "x")
        };
        assert_eq!(trailer_url(&record), None);
    }

    #[test]
    fn trailer_is_trimmed_not_validated() {
        let record = ContentRecord {
            acf: CustomFields::new().with(TRAILER_URL, "  not a url  "),
            ..ContentRecord::new(1, "x")
        };
        assert_eq!(trailer_url(&record).as_deref(), Some("not a url"));
    }

    #[test]
    fn stream_fields_are_trimmed() {
        let record = ContentRecord {
            acf: CustomFields::new()
                .with(STREAM_URL, " https://watch.example/x ")
                .with(STREAM_IFRAME, "\n<iframe></iframe>\n")
                .with(STREAM_PROVIDER, " Vimeo "),
            ..ContentRecord::new(1, "x")
        };
        assert_eq!(stream_url(&record).as_deref(), Some("https://watch.example/x"));
        assert_eq!(stream_iframe(&record).as_deref(), Some("<iframe></iframe>"));
        assert_eq!(stream_provider(&record).as_deref(), Some("Vimeo"));
    }
}
