use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key under which the fetch date is stored in a snapshot.
pub const DATE_KEY: &str = "date";

/// The interface description served by the API (Swagger style).
///
/// Only `paths` is interpreted; everything else is carried along untouched.
/// Any JSON body is accepted: a document that is not an object, or whose
/// `paths` is not an object, simply has no paths.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct InterfaceDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl From<Value> for InterfaceDocument {
    fn from(value: Value) -> Self {
        let Value::Object(mut other) = value else {
            return Self::default();
        };

        let paths = match other.remove("paths") {
            Some(Value::Object(paths)) => Some(paths),
            Some(unusable) => {
                other.insert("paths".to_string(), unusable);
                None
            }
            None => None,
        };

        Self { paths, other }
    }
}

/// Selected "list all" paths with their path-level descriptions, in
/// document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EndpointSet {
    endpoints: Map<String, Value>,
}

impl EndpointSet {
    pub fn insert(&mut self, path: String, description: Value) {
        self.endpoints.insert(path, description);
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.endpoints.keys().map(String::as_str)
    }

    pub fn get(&self, path: &str) -> Option<&Value> {
        self.endpoints.get(path)
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

/// Fetched endpoint payloads keyed by their transformed names.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EndpointDataStore {
    entries: Map<String, Value>,
}

impl EndpointDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, returning whatever was there before.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.entries.insert(key, value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut Value)> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds (or replaces) the `date` entry as `YYYY-MM-DD`.
    pub fn stamp_date(&mut self, date: NaiveDate) {
        self.entries.insert(
            DATE_KEY.to_string(),
            Value::String(date.format("%Y-%m-%d").to_string()),
        );
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.entries)
    }
}
