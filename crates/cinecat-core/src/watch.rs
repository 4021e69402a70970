//! Watch section of a title's detail page.
//!
//! Decides what the player area shows given the normalized fields: a
//! validated player, an outbound link, or a fixed explanatory message. The
//! section is never left empty, so a refused embed cannot be mistaken for a
//! player that is still loading.

use serde::Serialize;

use crate::embed::{validate_embed, EmbedValidationResult};
use crate::normalize::{NormalizedDisplayFields, StreamType};

/// Why the player area shows a message instead of a player or link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// Stream type is `iframe` but the snippet is missing or was rejected.
    EmbedNotAllowed,
    /// Stream type is `link` but no URL was entered.
    LinkMissing,
    NotStreamable,
}

impl FallbackReason {
    pub fn message(&self) -> &'static str {
        match self {
            FallbackReason::EmbedNotAllowed => {
                "This embed is missing or not allowed. Add a YouTube/Vimeo iframe in the CMS."
            }
            FallbackReason::LinkMissing => {
                "Streaming link is missing. Add stream_url in the CMS."
            }
            FallbackReason::NotStreamable => "No streaming available for this title.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WatchSection {
    Player { safe_markup: String },
    ExternalLink { url: String },
    Unavailable { reason: FallbackReason },
}

impl WatchSection {
    /// Short label shown under the section heading.
    pub fn label(&self) -> &'static str {
        match self {
            WatchSection::Player { .. } => "Embedded player",
            WatchSection::ExternalLink { .. } => "External link",
            WatchSection::Unavailable { .. } => "Not available",
        }
    }
}

pub fn plan_watch(fields: &NormalizedDisplayFields) -> WatchSection {
    match fields.stream_type {
        StreamType::Iframe => {
            let result = fields
                .stream_iframe
                .as_deref()
                .map(validate_embed)
                .unwrap_or(EmbedValidationResult::Rejected);
            match result {
                EmbedValidationResult::Accepted { safe_markup } => {
                    WatchSection::Player { safe_markup }
                }
                EmbedValidationResult::Rejected => WatchSection::Unavailable {
                    reason: FallbackReason::EmbedNotAllowed,
                },
            }
        }
        StreamType::Link => match &fields.stream_url {
            Some(url) => WatchSection::ExternalLink { url: url.clone() },
            None => WatchSection::Unavailable {
                reason: FallbackReason::LinkMissing,
            },
        },
        StreamType::None => WatchSection::Unavailable {
            reason: FallbackReason::NotStreamable,
        },
    }
}
