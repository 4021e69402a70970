//! Embed trust validator.
//!
//! The only place where editor-supplied markup is authorized for injection
//! into a page. A snippet goes through four steps, and a failure at any of
//! them yields [`EmbedValidationResult::Rejected`]:
//!
//! 1. extract the `src` of exactly one iframe element;
//! 2. parse it as an absolute URL;
//! 3. require its host to be exactly one of [`ALLOWED_EMBED_HOSTS`];
//! 4. build a brand-new element around that URL with a fixed attribute set.
//!
//! Nothing from the input besides the validated URL reaches the output.
//! Validation is string-based: no DNS lookups and no requests to the
//! provider.

mod allowlist;
mod extract;
mod markup;
mod reject;

use serde::Serialize;
use url::Url;

pub use allowlist::{is_allowed_host, ALLOWED_EMBED_HOSTS};
pub use markup::{PLAYER_ALLOW, PLAYER_REFERRER_POLICY, PLAYER_TITLE};

use reject::RejectReason;

/// Outcome of validating an embed snippet.
///
/// `Rejected` carries no reason on purpose: every rejection must render the
/// same fallback, whatever rule the snippet broke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum EmbedValidationResult {
    Accepted { safe_markup: String },
    Rejected,
}

impl EmbedValidationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, EmbedValidationResult::Accepted { .. })
    }

    pub fn safe_markup(&self) -> Option<&str> {
        match self {
            EmbedValidationResult::Accepted { safe_markup } => Some(safe_markup),
            EmbedValidationResult::Rejected => None,
        }
    }
}

/// Validate an untrusted player snippet. Never panics and never fails;
/// `raw` itself must not be rendered whatever the outcome.
pub fn validate_embed(raw: &str) -> EmbedValidationResult {
    match authorize(raw) {
        Ok(url) => EmbedValidationResult::Accepted {
            safe_markup: markup::player_markup(&url),
        },
        Err(reason) => {
            tracing::debug!(%reason, "embed rejected");
            EmbedValidationResult::Rejected
        }
    }
}

fn authorize(raw: &str) -> Result<Url, RejectReason> {
    let src = extract::extract_src(raw).ok_or(RejectReason::Shape)?;
    let url = Url::parse(src).map_err(|_| RejectReason::Url)?;
    let host = allowlist::authority_host(&url).ok_or(RejectReason::Host)?;
    if !is_allowed_host(&host) {
        return Err(RejectReason::Host);
    }
    Ok(url)
}
