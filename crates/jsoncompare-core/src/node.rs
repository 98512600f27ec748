// SPDX-License-Identifier: MIT OR Apache-2.0
//! Canonical node tree
//!
//! Every input, whether JSON text or a structured value, is decoded into a
//! [`Node`] before comparison. Objects keep the key order of the decoded text,
//! so the order of field-level diagnostics follows the source document.

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Number;
use std::fmt;

/// A decoded JSON value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Mapping from key to node, in decoding order
    Object(IndexMap<String, Self>),
    /// Sequence of nodes
    Array(Vec<Self>),
    /// String scalar
    String(String),
    /// Number scalar, as produced by the decoder
    Number(Number),
    /// Boolean scalar
    Bool(bool),
    /// Null
    Null,
}

/// Dynamic type of a [`Node`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Object node
    Object,
    /// Array node
    Array,
    /// String node
    String,
    /// Number node
    Number,
    /// Boolean node
    Bool,
    /// Null node
    Null,
}

impl NodeKind {
    /// JSON type name used in diagnostic messages
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Number => "number",
            Self::Bool => "boolean",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Node {
    /// Dynamic type of this node
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Object(_) => NodeKind::Object,
            Self::Array(_) => NodeKind::Array,
            Self::String(_) => NodeKind::String,
            Self::Number(_) => NodeKind::Number,
            Self::Bool(_) => NodeKind::Bool,
            Self::Null => NodeKind::Null,
        }
    }

    /// Whether this node is an object or an array
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Object(_) | Self::Array(_))
    }

    /// Object entries, if this node is an object
    #[must_use]
    pub const fn as_object(&self) -> Option<&IndexMap<String, Self>> {
        match self {
            Self::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Array items, if this node is an array
    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(entries) => {
                Self::Object(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Number(n) => Self::Number(n),
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Null => Self::Null,
        }
    }
}

/// Renders the node as compact JSON
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&encoded)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::String(s) => serializer.serialize_str(s),
            Self::Number(n) => n.serialize(serializer),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Null => serializer.serialize_unit(),
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Node, E> {
        Ok(Node::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Node, E> {
        Ok(Node::Number(v.into()))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Node, E> {
        Ok(Node::Number(v.into()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Node, E> {
        Number::from_f64(v)
            .map(Node::Number)
            .ok_or_else(|| E::custom("non-finite number"))
    }

    fn visit_str<E>(self, v: &str) -> Result<Node, E> {
        Ok(Node::String(v.to_owned()))
    }

    fn visit_string<E>(self, v: String) -> Result<Node, E> {
        Ok(Node::String(v))
    }

    fn visit_unit<E>(self) -> Result<Node, E> {
        Ok(Node::Null)
    }

    fn visit_none<E>(self) -> Result<Node, E> {
        Ok(Node::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Node, D::Error> {
        Node::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Node, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Node::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Node, A::Error> {
        let mut entries = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
        // Duplicate keys: last value wins, first position is kept.
        while let Some((key, value)) = map.next_entry::<String, Node>()? {
            entries.insert(key, value);
        }
        Ok(Node::Object(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Node {
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn test_decode_scalars() {
        assert_eq!(parse("null"), Node::Null);
        assert_eq!(parse("true"), Node::Bool(true));
        assert_eq!(parse("\"x\""), Node::String("x".to_string()));
        assert_eq!(parse("42"), Node::Number(42.into()));
        assert_eq!(parse("-7"), Node::Number((-7).into()));
    }

    #[test]
    fn test_decode_keeps_key_order() {
        let node = parse(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#);
        let keys: Vec<&str> = node
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_integer_and_float_differ() {
        assert_eq!(parse("1").kind(), parse("1.0").kind());
        assert_ne!(parse("1"), parse("1.0"));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(parse("{}").kind().to_string(), "object");
        assert_eq!(parse("[]").kind().to_string(), "array");
        assert_eq!(parse("\"\"").kind().to_string(), "string");
        assert_eq!(parse("0").kind().to_string(), "number");
        assert_eq!(parse("false").kind().to_string(), "boolean");
        assert_eq!(parse("null").kind().to_string(), "null");
    }

    #[test]
    fn test_display_is_compact_json() {
        assert_eq!(parse(r#" { "a" : [1, "two", null] } "#).to_string(), r#"{"a":[1,"two",null]}"#);
        assert_eq!(parse(r#""quote\"d""#).to_string(), r#""quote\"d""#);
        assert_eq!(parse("2.5").to_string(), "2.5");
    }

    #[test]
    fn test_from_value_matches_decoding() {
        let value = serde_json::json!({"a": [1, {"b": null}], "c": "d"});
        let node = Node::from(value.clone());
        assert_eq!(node, parse(&value.to_string()));
    }

    #[test]
    fn test_container_accessors() {
        let node = parse(r#"{"list": [1, 2]}"#);
        assert!(node.is_container());
        assert!(node.as_array().is_none());
        let list = &node.as_object().unwrap()["list"];
        assert_eq!(list.as_array().map(<[Node]>::len), Some(2));
        assert!(!Node::Null.is_container());
    }
}
