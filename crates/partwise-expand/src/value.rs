//! The value tree that expansion reads and produces.

use core::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

pub use serde_json::Number;

/// A nestable data value: scalars at the leaves, mappings and sequences as
/// interior nodes.
///
/// Mappings keep insertion order, which is also their enumeration order
/// during expansion. Containers are reference-counted and copied on write,
/// so cloning a subtree is cheap and a produced combination can never share
/// mutable structure with the input or with another combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(Rc<str>),

    /// Fixed ordered group, reserved for future directive semantics.
    /// Never expanded: opaque as a child, rejected as an expansion root.
    Tuple(Rc<Vec<Value>>),

    Seq(Rc<Vec<Value>>),
    Map(Rc<IndexMap<String, Value>>),
}

impl Value {
    pub fn new_seq() -> Value {
        Value::from(Vec::new())
    }

    pub fn new_map() -> Value {
        Value::from(IndexMap::new())
    }

    /// Builds a tuple value. Tuples have no literal JSON form; this is the
    /// only way to create one.
    pub fn tuple(items: Vec<Value>) -> Value {
        Value::Tuple(Rc::new(items))
    }

    pub fn from_json_str(json: &str) -> serde_json::Result<Value> {
        serde_json::from_str(json)
    }

    pub fn to_json_str(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Short name of this value's kind, for error messages and display.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Tuple(_) => "tuple",
            Value::Seq(_) => "sequence",
            Value::Map(_) => "mapping",
        }
    }

    /// The structural test behind expansion: only mappings and sequences
    /// have children worth enumerating. Text and tuples are iterable in
    /// spirit but stay opaque: text is never exploded character-wise, and
    /// tuples are reserved.
    pub fn is_expandable(&self) -> bool {
        matches!(self, Value::Seq(_) | Value::Map(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_seq_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Seq(items) => Some(Rc::make_mut(items)),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Map(fields) => Some(fields.as_ref()),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut IndexMap<String, Value>> {
        match self {
            Value::Map(fields) => Some(Rc::make_mut(fields)),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n.into())
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        // non-finite floats have no JSON form
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Seq(Rc::new(items))
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(fields: IndexMap<String, Value>) -> Self {
        Value::Map(Rc::new(fields))
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s.into()),
            serde_json::Value::Array(items) => {
                Value::Seq(Rc::new(items.into_iter().map(Value::from).collect()))
            }
            serde_json::Value::Object(fields) => Value::Map(Rc::new(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            )),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            // tuples are opaque to expansion but still plain data on the wire
            Value::Tuple(items) | Value::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for element in items.iter() {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Map(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (key, value) in fields.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a value")
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Null)
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::from(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::from(v))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::from(v))
    }

    fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::String(s.into()))
    }

    fn visit_string<E>(self, s: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::String(s.into()))
    }

    fn visit_seq<V>(self, mut visitor: V) -> Result<Self::Value, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let mut items = Vec::new();
        while let Some(element) = visitor.next_element()? {
            items.push(element);
        }
        Ok(Value::from(items))
    }

    fn visit_map<V>(self, mut visitor: V) -> Result<Self::Value, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut fields = IndexMap::new();
        while let Some((key, value)) = visitor.next_entry()? {
            fields.insert(key, value);
        }
        Ok(Value::from(fields))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(s) => write!(f, "{s}"),
            Err(_e) => Err(fmt::Error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Null.kind(), "null");
        assert_eq!(Value::from(true).kind(), "boolean");
        assert_eq!(Value::from(3).kind(), "number");
        assert_eq!(Value::from("text").kind(), "string");
        assert_eq!(Value::tuple(vec![]).kind(), "tuple");
        assert_eq!(Value::new_seq().kind(), "sequence");
        assert_eq!(Value::new_map().kind(), "mapping");
    }

    #[test]
    fn test_expandable_is_structural() {
        assert!(Value::new_seq().is_expandable());
        assert!(Value::new_map().is_expandable());
        assert!(Value::from_json_str(r#"["a", "b"]"#).unwrap().is_expandable());

        // iterable in other type systems, still opaque here
        assert!(!Value::from("a string").is_expandable());
        assert!(!Value::tuple(vec![Value::from(0), Value::from(1)]).is_expandable());

        assert!(!Value::Null.is_expandable());
        assert!(!Value::from(false).is_expandable());
        assert!(!Value::from(3.1416).is_expandable());
    }

    #[test]
    fn test_json_round_trip_keeps_key_order() {
        let source = r#"{"zeta":"z","alpha":["a","b"],"mid":{"k":1}}"#;
        let value = Value::from_json_str(source).unwrap();
        let keys: Vec<&str> = value.as_map().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(value.to_string(), source);
    }

    #[test]
    fn test_tuple_serializes_as_array() {
        let pair = Value::tuple(vec![Value::from("flag"), Value::from("here")]);
        assert_eq!(pair.to_string(), r#"["flag","here"]"#);
        // but never comes back as a tuple
        let reread = Value::from_json_str(&pair.to_string()).unwrap();
        assert_eq!(reread.kind(), "sequence");
    }

    #[test]
    fn test_from_serde_json() {
        let value = Value::from(json!({
            "key1": "constant value",
            "key2": ["option 1", "option 2"],
            "count": 5,
            "flag": null
        }));
        let fields = value.as_map().unwrap();
        let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["key1", "key2", "count", "flag"]);
        assert_eq!(fields["key2"].as_seq().unwrap().len(), 2);
        assert_eq!(fields["flag"], Value::Null);
    }

    #[test]
    fn test_copy_on_write_isolation() {
        let original = Value::from_json_str(r#"{"key":"value"}"#).unwrap();
        let mut copy = original.clone();
        copy.as_map_mut()
            .unwrap()
            .insert("key".to_string(), Value::from("changed"));
        assert_eq!(original.as_map().unwrap()["key"], Value::from("value"));
        assert_eq!(copy.as_map().unwrap()["key"], Value::from("changed"));
    }
}
