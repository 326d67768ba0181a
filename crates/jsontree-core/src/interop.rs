//! Bridges to the serde ecosystem.
//!
//! `Value` serializes through any serde `Serializer`, streaming objects in insertion
//! order. Conversions to and from `serde_json::Value` rely on the workspace enabling
//! serde_json's `preserve_order` feature, so key order survives both directions.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::value::{Kind, Map, Number, Value};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map.iter() {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.kind() {
            Kind::Int => serializer.serialize_i64(self.as_i64()),
            _ => serializer.serialize_f64(self.as_f64()),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::int(i),
                None => Value::number(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => items.into_iter().map(Value::from).collect(),
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Map>(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    /// Non-finite doubles become `null`, matching the text serializer.
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => match n.kind() {
                Kind::Int => serde_json::Value::from(n.as_i64()),
                _ => serde_json::Number::from_f64(n.as_f64())
                    .map_or(serde_json::Value::Null, serde_json::Value::Number),
            },
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serde_json_round_trip_keeps_order() {
        let original = json!({"z": 1, "a": [true, null, 2.5], "m": "s"});
        let value = Value::from(original.clone());
        assert_eq!(value.to_string(), r#"{"z":1,"a":[true,null,2.5],"m":"s"}"#);
        let back: serde_json::Value = value.into();
        assert_eq!(back, original);
    }

    #[test]
    fn serialize_through_serde_json() {
        let value = Value::object_from([("n", Value::number(1.5)), ("i", Value::int(2))]);
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"n":1.5,"i":2}"#);
    }
}
