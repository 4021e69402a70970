//! Re-synthesis of an authorized player element.
//!
//! Output attribute set and order are fixed. Only the validated URL comes
//! from the input.

use url::Url;

pub const PLAYER_TITLE: &str = "Video player";
pub const PLAYER_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";
pub const PLAYER_REFERRER_POLICY: &str = "strict-origin-when-cross-origin";

pub(super) fn player_markup(src: &Url) -> String {
    format!(
        r#"<iframe src="{src}" title="{PLAYER_TITLE}" frameborder="0" allow="{PLAYER_ALLOW}" allowfullscreen referrerpolicy="{PLAYER_REFERRER_POLICY}"></iframe>"#,
        src = escape_attr(src.as_str()),
    )
}

/// Escape for a double-quoted attribute value.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
