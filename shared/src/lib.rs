use log::debug;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod form;
pub mod forms;
pub mod submission;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

pub use form::{FieldRule, FieldSpec, Form, FormSpec, SuccessMessage};
pub use submission::{
    FieldSource, FieldStore, FormSubmitter, Notice, NoticeKind, Notifier, PageFields,
    RequestError, SubmissionOutcome, SubmitTransport,
};
pub use validation::ValidationError;

/// Field values collected from a form, keyed by the JSON property name.
///
/// Entries keep the order in which the form declares its fields, so the
/// serialized request body reads the same way the form does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMapping {
    entries: Vec<(String, String)>,
}

impl FieldMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any earlier value for the same key in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = FieldMapping::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}

impl Serialize for FieldMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Body returned by every form endpoint.
///
/// Servers answer either `{"message": ...}` or `{"error": ...}`; the
/// reference server also adds `"status": "success"` to accepted requests.
/// Non-string values are kept as their JSON text, so `{"error": 42}` still
/// reads as an error of `42`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResponse {
    #[serde(default, deserialize_with = "as_text", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "as_text", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "as_text", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

fn as_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

impl SubmissionResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }

    /// Parse a reply body. The HTTP status does not decide the outcome:
    /// servers report rejections as a 4xx carrying `{"error": ...}`.
    pub fn from_reply(status: u16, body: &str) -> Result<Self, RequestError> {
        if !(200..300).contains(&status) {
            debug!(target: "api", "Reply carried status {}", status);
        }
        serde_json::from_str(body).map_err(|e| RequestError::MalformedResponse(e.to_string()))
    }
}
