use serde::Serialize;

use crate::record::fields::STREAM_TYPE;
use crate::record::{ContentRecord, FieldValue};

/// How a title can be watched, as chosen by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamType {
    /// Embedded third-party player (`stream_iframe`).
    Iframe,
    /// Outbound link (`stream_url`).
    Link,
    #[default]
    None,
}

impl StreamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamType::Iframe => "iframe",
            StreamType::Link => "link",
            StreamType::None => "none",
        }
    }
}

/// Unset, blank, or unknown values all mean no streaming.
pub fn stream_type(record: &ContentRecord) -> StreamType {
    match record.acf.get(STREAM_TYPE) {
        FieldValue::Text("iframe") => StreamType::Iframe,
        FieldValue::Text("link") => StreamType::Link,
        _ => StreamType::None,
    }
}
