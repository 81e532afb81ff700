//! Ordered settings document with typed accessors

use crate::{Error, Result};
use serde_json::{Map, Value};
use std::fmt;

/// Shape of a JSON value, used in type-mismatch reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Integer,
    Number,
    String,
    List,
    Object,
}

impl ValueKind {
    /// Classify a value. Numbers that fit in `i64` are reported as integers.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(n) if n.is_i64() => Self::Integer,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::List,
            Value::Object(_) => Self::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::List => "list",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed configuration layer.
///
/// Keys keep the order in which they appear in the source text. The
/// `get_*` accessors fail with [`Error::MissingKey`] for absent keys, the
/// `opt_*` and `*_or` accessors treat absent keys (and explicit `null`) as
/// "not set". Every accessor fails with [`Error::TypeMismatch`] when the
/// stored value has a different shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    root: Map<String, Value>,
}

impl Document {
    /// Create a document with no keys.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a document from JSON text.
    ///
    /// # Example
    ///
    /// ```
    /// use lexis_doc::Document;
    ///
    /// let doc = Document::parse(r#"{"systemDict": "system.dic", "cost": 12000}"#).unwrap();
    /// assert_eq!(doc.get_string("systemDict").unwrap(), "system.dic");
    /// assert_eq!(doc.get_int("cost").unwrap(), 12000);
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::try_from(value)
    }

    /// Wrap an existing JSON object.
    pub fn from_map(root: Map<String, Value>) -> Self {
        Self { root }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.root
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.root.contains_key(key)
    }

    /// Keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Serialize back to pretty-printed JSON.
    pub fn to_json_string(&self) -> String {
        // Serializing a map of JSON values cannot fail.
        serde_json::to_string_pretty(&self.root).unwrap_or_default()
    }

    fn require(&self, key: &str) -> Result<&Value> {
        self.optional(key).ok_or_else(|| Error::MissingKey {
            key: key.to_string(),
        })
    }

    fn optional(&self, key: &str) -> Option<&Value> {
        match self.root.get(key) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    // Strings

    pub fn get_string(&self, key: &str) -> Result<&str> {
        as_str(key, self.require(key)?)
    }

    pub fn opt_string(&self, key: &str) -> Result<Option<&str>> {
        self.optional(key).map(|v| as_str(key, v)).transpose()
    }

    pub fn get_string_or<'a>(&'a self, key: &str, default: &'a str) -> Result<&'a str> {
        Ok(self.opt_string(key)?.unwrap_or(default))
    }

    // Integers

    pub fn get_int(&self, key: &str) -> Result<i64> {
        as_int(key, self.require(key)?)
    }

    pub fn opt_int(&self, key: &str) -> Result<Option<i64>> {
        self.optional(key).map(|v| as_int(key, v)).transpose()
    }

    pub fn get_int_or(&self, key: &str, default: i64) -> Result<i64> {
        Ok(self.opt_int(key)?.unwrap_or(default))
    }

    // Booleans

    pub fn get_bool(&self, key: &str) -> Result<bool> {
        as_bool(key, self.require(key)?)
    }

    pub fn opt_bool(&self, key: &str) -> Result<Option<bool>> {
        self.optional(key).map(|v| as_bool(key, v)).transpose()
    }

    pub fn get_bool_or(&self, key: &str, default: bool) -> Result<bool> {
        Ok(self.opt_bool(key)?.unwrap_or(default))
    }

    // Lists

    pub fn get_list(&self, key: &str) -> Result<&[Value]> {
        as_list(key, self.require(key)?)
    }

    pub fn opt_list(&self, key: &str) -> Result<Option<&[Value]>> {
        self.optional(key).map(|v| as_list(key, v)).transpose()
    }

    /// A list whose elements must all be strings.
    pub fn get_string_list(&self, key: &str) -> Result<Vec<String>> {
        string_list(key, self.get_list(key)?)
    }

    /// Like [`Document::get_string_list`], but an absent key yields an empty list.
    pub fn opt_string_list(&self, key: &str) -> Result<Vec<String>> {
        match self.opt_list(key)? {
            Some(items) => string_list(key, items),
            None => Ok(Vec::new()),
        }
    }

    // Objects

    pub fn get_object(&self, key: &str) -> Result<Document> {
        as_object(key, self.require(key)?)
    }

    pub fn opt_object(&self, key: &str) -> Result<Option<Document>> {
        self.optional(key).map(|v| as_object(key, v)).transpose()
    }
}

impl TryFrom<Value> for Document {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(Error::NotAnObject {
                found: ValueKind::of(&other),
            }),
        }
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        Value::Object(doc.root)
    }
}

fn as_str<'a>(key: &str, value: &'a Value) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| Error::mismatch(key, ValueKind::String, ValueKind::of(value)))
}

fn as_int(key: &str, value: &Value) -> Result<i64> {
    value
        .as_i64()
        .ok_or_else(|| Error::mismatch(key, ValueKind::Integer, ValueKind::of(value)))
}

fn as_bool(key: &str, value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| Error::mismatch(key, ValueKind::Bool, ValueKind::of(value)))
}

fn as_list<'a>(key: &str, value: &'a Value) -> Result<&'a [Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| Error::mismatch(key, ValueKind::List, ValueKind::of(value)))
}

fn as_object(key: &str, value: &Value) -> Result<Document> {
    value
        .as_object()
        .map(|map| Document::from_map(map.clone()))
        .ok_or_else(|| Error::mismatch(key, ValueKind::Object, ValueKind::of(value)))
}

fn string_list(key: &str, items: &[Value]) -> Result<Vec<String>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| as_str(&format!("{key}[{index}]"), item).map(str::to_string))
        .collect()
}
