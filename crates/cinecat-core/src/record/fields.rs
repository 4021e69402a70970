//! Open custom-field map (`acf`) and its tagged per-field view.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

pub const RELEASE_YEAR: &str = "release_year";
pub const IMDB_RATING: &str = "imdb_rating";
pub const RUNTIME_MINUTES: &str = "runtime_minutes";
pub const TRAILER_URL: &str = "trailer_url";
pub const STREAM_TYPE: &str = "stream_type";
pub const STREAM_URL: &str = "stream_url";
pub const STREAM_IFRAME: &str = "stream_iframe";
pub const STREAM_PROVIDER: &str = "stream_provider";

/// What a single custom field holds, as far as the normalizer cares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Key not present in the record.
    Absent,
    Text(&'a str),
    Number(f64),
    /// Present but neither text nor a number (bool, null, array, object).
    Other,
}

/// Editor-authored custom fields, keyed by field name.
///
/// The CMS sends an object when the field group has values and `[]` (or
/// nothing at all) when it does not; every non-object shape is treated as
/// an empty map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomFields {
    map: Map<String, Value>,
}

impl CustomFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value. Mostly used to build fixtures.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.map.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> FieldValue<'_> {
        match self.map.get(name) {
            None => FieldValue::Absent,
            Some(Value::String(s)) => FieldValue::Text(s.as_str()),
            Some(Value::Number(n)) => n.as_f64().map(FieldValue::Number).unwrap_or(FieldValue::Other),
            Some(_) => FieldValue::Other,
        }
    }

    /// Trimmed text of a string field; `None` when absent, not a string, or blank.
    pub fn trimmed_text(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            FieldValue::Text(s) => Some(s.trim()).filter(|s| !s.is_empty()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<'de> Deserialize<'de> for CustomFields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Object(map) => CustomFields { map },
            _ => CustomFields::default(),
        })
    }
}
