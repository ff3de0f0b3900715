//! Log document type for the search index.
//!
//! This module defines the document structure that is indexed in the search backend.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wire-level property name used for [`Log::id`], both in the HTTP API and in
/// the search backend.
pub const LOG_ID_FIELD: &str = "id";

/// A log record as it is stored in the search backend.
///
/// The `id` is assigned by the caller and doubles as the backend document id.
/// Every other field is free-form and persisted exactly as submitted.
///
/// # Example
///
/// ```
/// use log_gateway_shared::Log;
/// use serde_json::json;
///
/// let log: Log = serde_json::from_value(json!({
///     "id": "A1",
///     "message": "disk almost full",
///     "level": "warn"
/// }))
/// .unwrap();
///
/// assert_eq!(log.id, "A1");
/// assert_eq!(log.fields["level"], "warn");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Log {
    /// Caller-supplied identifier. Missing ids deserialize as empty strings.
    #[serde(rename = "id", default)]
    pub id: String,
    /// Free-form fields, flattened next to `id`.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Log {
    /// Create a log with the given id and no additional fields.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Add a free-form field, replacing any previous value under the same key.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}
