//! Firestore REST value encoding.
//!
//! Every field in a Firestore REST document is a one-key object naming its
//! kind, e.g. `{"stringValue": "LU"}`. Integers are string-encoded int64s and
//! timestamps are RFC 3339 strings in UTC.

use serde_json::{Map, json};
use time::format_description::well_known::Rfc3339;

use crate::document::{Fields, Value};
use crate::errors::StoreError;

/// Encodes a field map into the JSON object expected under `"fields"` in a
/// Firestore document body.
pub(crate) fn fields_to_json(fields: &Fields) -> Result<serde_json::Value, StoreError> {
    let mut object = Map::with_capacity(fields.len());
    for (name, value) in fields {
        object.insert(name.clone(), value_to_json(value)?);
    }
    Ok(serde_json::Value::Object(object))
}

fn value_to_json(value: &Value) -> Result<serde_json::Value, StoreError> {
    let encoded = match value {
        Value::String(s) => json!({ "stringValue": s }),
        Value::Integer(n) => json!({ "integerValue": n.to_string() }),
        Value::Boolean(b) => json!({ "booleanValue": b }),
        Value::Timestamp(ts) => {
            json!({ "timestampValue": ts.format(&Rfc3339)? })
        }
        Value::Array(values) => {
            let encoded: Vec<serde_json::Value> = values
                .iter()
                .map(value_to_json)
                .collect::<Result<_, _>>()?;
            json!({ "arrayValue": { "values": encoded } })
        }
        Value::Map(fields) => json!({ "mapValue": { "fields": fields_to_json(fields)? } }),
    };
    Ok(encoded)
}
