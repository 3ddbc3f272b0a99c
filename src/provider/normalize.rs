use serde_json::Value;

use crate::grid_data::types::RawRecord;
use crate::provider::error::ProviderError;

// Keys under which the provider nests its series, by endpoint:
// past-range answers with `data`, power-breakdown/history with `history`.
const SERIES_KEYS: [&str; 2] = ["data", "history"];

/// Turns a provider response body into the record sequence the aggregator
/// consumes. Accepts a bare array or an object wrapping one.
pub fn normalize_records(body: &Value) -> Result<Vec<RawRecord>, ProviderError> {
    let series = match body {
        Value::Array(items) => items,
        Value::Object(obj) => SERIES_KEYS
            .iter()
            .find_map(|key| obj.get(*key).and_then(Value::as_array))
            .ok_or_else(|| {
                ProviderError::UnexpectedShape(format!(
                    "object without a 'data' or 'history' array (keys: {})",
                    obj.keys().cloned().collect::<Vec<_>>().join(", ")
                ))
            })?,
        other => {
            return Err(ProviderError::UnexpectedShape(format!(
                "expected array or object, got {}",
                json_kind(other)
            )));
        }
    };

    let mut records = Vec::with_capacity(series.len());
    for (index, item) in series.iter().enumerate() {
        if !item.is_object() {
            tracing::warn!("Skipping provider entry {} ({} is not an object)", index, json_kind(item));
            continue;
        }
        match serde_json::from_value::<RawRecord>(item.clone()) {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!("Skipping provider entry {}: {}", index, e),
        }
    }

    Ok(records)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
