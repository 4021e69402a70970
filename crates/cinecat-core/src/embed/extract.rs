//! Single-element iframe matcher.
//!
//! Accepts exactly one `<iframe ... src="URL" ...></iframe>` element and
//! nothing around it. This is not an HTML parser and does not try to be one:
//! anything outside that shape is refused rather than repaired. If more
//! providers or richer snippets ever need to be accepted, replace this with
//! a restricted parser that keeps the same contract (one element, only
//! `src` survives) instead of widening the pattern.

use std::sync::OnceLock;

use regex::Regex;

fn iframe_re() -> &'static Regex {
    static IFRAME_RE: OnceLock<Regex> = OnceLock::new();
    IFRAME_RE.get_or_init(|| {
        Regex::new(r#"(?i)\A<iframe\b[^>]*?\ssrc\s*=\s*["']([^"']+)["'][^>]*>\s*</iframe>\z"#)
            .expect("iframe regex should compile")
    })
}

/// Captured `src` of the single iframe in `snippet`, if the snippet is
/// exactly that element (surrounding whitespace aside).
pub(super) fn extract_src(snippet: &str) -> Option<&str> {
    let caps = iframe_re().captures(snippet.trim())?;
    caps.get(1).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_element() {
        assert_eq!(
            extract_src(r#"<iframe src="https://player.vimeo.com/video/1"></iframe>"#),
            Some("https://player.vimeo.com/video/1")
        );
    }

    #[test]
    fn provider_share_snippet() {
        let snippet = r#"<iframe width="560" height="315"
            src="https://www.youtube.com/embed/dQw4w9WgXcQ?si=abc"
            title="YouTube video player" frameborder="0"
            allow="accelerometer; autoplay" referrerpolicy="strict-origin-when-cross-origin"
            allowfullscreen></iframe>"#;
        assert_eq!(
            extract_src(snippet),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ?si=abc")
        );
    }

    #[test]
    fn single_quotes_and_case() {
        assert_eq!(
            extract_src("<IFRAME SRC='https://vimeo.com/2'></IFRAME>"),
            Some("https://vimeo.com/2")
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(
            extract_src("\n  <iframe src=\"https://vimeo.com/3\"></iframe>  \n"),
            Some("https://vimeo.com/3")
        );
    }

    #[test]
    fn wrapped_element_refused() {
        assert_eq!(
            extract_src(r#"<div><iframe src="https://vimeo.com/1"></iframe></div>"#),
            None
        );
        assert_eq!(
            extract_src(r#"text <iframe src="https://vimeo.com/1"></iframe>"#),
            None
        );
    }

    #[test]
    fn two_elements_refused() {
        assert_eq!(
            extract_src(
                r#"<iframe src="https://vimeo.com/1"></iframe><iframe src="https://vimeo.com/2"></iframe>"#
            ),
            None
        );
    }

    #[test]
    fn trailing_payload_refused() {
        assert_eq!(
            extract_src(r#"<iframe src="https://vimeo.com/1"></iframe><script>x()</script>"#),
            None
        );
    }

    #[test]
    fn other_tags_refused() {
        assert_eq!(extract_src(r#"<img src="https://vimeo.com/1">"#), None);
        assert_eq!(extract_src(r#"<iframes src="https://vimeo.com/1"></iframes>"#), None);
        assert_eq!(extract_src(r#"<iframe src="https://vimeo.com/1">"#), None);
    }

    #[test]
    fn prefixed_src_attribute_does_not_count() {
        assert_eq!(
            extract_src(r#"<iframe data-src="https://vimeo.com/1"></iframe>"#),
            None
        );
    }

    #[test]
    fn missing_or_empty_src_refused() {
        assert_eq!(extract_src("<iframe></iframe>"), None);
        assert_eq!(extract_src(r#"<iframe src=""></iframe>"#), None);
        assert_eq!(extract_src(""), None);
    }
}
