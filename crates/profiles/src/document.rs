//! Typed document values.
//!
//! Firestore documents are maps of named fields, where every field carries an
//! explicit value kind on the wire. [`Value`] models the kinds the Bandly
//! schema uses; the REST encoding lives in [`crate::firestore`].

use std::collections::BTreeMap;

use time::OffsetDateTime;

/// Field map of a single document. Ordered so that encoded output and log
/// output are stable across runs.
pub type Fields = BTreeMap<String, Value>;

/// A single document field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Boolean(bool),
    Timestamp(OffsetDateTime),
    Array(Vec<Value>),
    Map(Fields),
}

impl Value {
    /// Returns the string content, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean content, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the element list, if this is an array value.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Returns the nested fields, if this is a map value.
    pub fn as_map(&self) -> Option<&Fields> {
        match self {
            Value::Map(fields) => Some(fields),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<OffsetDateTime> for Value {
    fn from(ts: OffsetDateTime) -> Self {
        Value::Timestamp(ts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_match_kind() {
        assert_eq!(Value::from("LU").as_str(), Some("LU"));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from("LU").as_bool(), None);

        let array = Value::Array(vec![Value::from("Rock"), Value::from("Jazz")]);
        assert_eq!(array.as_array().map(<[Value]>::len), Some(2));

        let mut fields = Fields::new();
        fields.insert("name".to_string(), Value::from("testmusiker 1"));
        let map = Value::Map(fields);
        assert_eq!(
            map.as_map().and_then(|f| f.get("name")).and_then(Value::as_str),
            Some("testmusiker 1")
        );
    }
}
