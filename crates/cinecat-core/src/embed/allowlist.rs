//! Embed host allowlist.

use url::Url;

/// Hosts an embedded player may point at. Compared by exact string
/// equality; subdomains and suffixes of these do not match.
pub const ALLOWED_EMBED_HOSTS: [&str; 4] = [
    "www.youtube.com",
    "youtube.com",
    "player.vimeo.com",
    "vimeo.com",
];

/// Host as used for authorization: `host_str()`, with `:port` appended
/// when the URL carries a non-default port.
pub(super) fn authority_host(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

pub fn is_allowed_host(host: &str) -> bool {
    ALLOWED_EMBED_HOSTS.contains(&host)
}
