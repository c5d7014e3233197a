use std::cmp::Ordering;

use serde_json::{Number, Value};
use tracing::{debug, error};

use crate::error::SortError;
use crate::models::EndpointDataStore;

/// Field used to order a list of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Label,
    Name,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Label => "label",
            SortField::Name => "name",
        }
    }

    /// `label` wins over `name`; anything else is left unsorted.
    pub fn detect(sample: &Value) -> Option<Self> {
        let record = sample.as_object()?;
        if record.contains_key("label") {
            Some(SortField::Label)
        } else if record.contains_key("name") {
            Some(SortField::Name)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyKind {
    String,
    Number,
    Bool,
}

fn kind_of(value: &Value) -> Option<KeyKind> {
    match value {
        Value::String(_) => Some(KeyKind::String),
        Value::Number(_) => Some(KeyKind::Number),
        Value::Bool(_) => Some(KeyKind::Bool),
        _ => None,
    }
}

fn compare_keys(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => compare_numbers(a, b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

/// Integers compare exactly; floats go through `f64`.
fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a.cmp(&b);
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a.cmp(&b);
    }
    if a.is_f64() || b.is_f64() {
        // JSON numbers are never NaN
        let a = a.as_f64().unwrap_or_default();
        let b = b.as_f64().unwrap_or_default();
        return a.partial_cmp(&b).unwrap_or(Ordering::Equal);
    }
    // One negative i64 against a u64 above i64::MAX.
    if a.is_i64() { Ordering::Less } else { Ordering::Greater }
}

/// Sorts a list of records in place by `label` or `name`.
///
/// The first record picks the field. Every record must then carry that
/// field with a string, number or boolean of the same kind; otherwise the
/// list is left untouched and an error names the offending element.
/// Returns the field used, or `None` when the list was not sortable.
pub fn sort_records(records: &mut [Value]) -> Result<Option<SortField>, SortError> {
    let Some(field) = records.first().and_then(SortField::detect) else {
        return Ok(None);
    };
    let name = field.as_str();

    let mut expected = None;
    for (index, record) in records.iter().enumerate() {
        let value = record
            .get(name)
            .ok_or(SortError::MissingField { field: name, index })?;
        let kind = kind_of(value).ok_or(SortError::UnsortableValue { field: name, index })?;
        match expected {
            None => expected = Some(kind),
            Some(first) if first != kind => {
                return Err(SortError::IncomparableValues { field: name, index });
            }
            Some(_) => {}
        }
    }

    // Stable: ties keep fetch order.
    records.sort_by(|a, b| compare_keys(&a[name], &b[name]));
    Ok(Some(field))
}

/// Sorts every non-empty list in the store. Scalars and objects are
/// untouched. A list that cannot be sorted is logged and kept in fetch
/// order.
pub fn sort_store(store: &mut EndpointDataStore) {
    for (key, value) in store.iter_mut() {
        let Value::Array(records) = value else {
            continue;
        };

        match sort_records(records) {
            Ok(Some(field)) => debug!(key = %key, field = field.as_str(), "Sorted records"),
            Ok(None) => {}
            Err(err) => error!(key = %key, error = %err, "Leaving records in fetch order"),
        }
    }
}
