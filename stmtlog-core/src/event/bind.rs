use chrono::{NaiveDate, NaiveDateTime};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;

/// A bound parameter value, already cast by the notification source.
///
/// Serializes to the natural JSON value: numbers as numbers, text as strings,
/// dates as ISO-8601 strings. The `Debug` rendering is the inspect style used
/// by the text log format (`1`, `"Name"`, `2024-01-31`).
#[derive(Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BindValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    Binary(Vec<u8>),
}

impl BindValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            BindValue::Null => "null",
            BindValue::Bool(_) => "boolean",
            BindValue::Integer(_) => "integer",
            BindValue::Float(_) => "float",
            BindValue::Text(_) => "string",
            BindValue::Date(_) => "date",
            BindValue::Timestamp(_) => "datetime",
            BindValue::Binary(_) => "binary",
        }
    }
}

impl fmt::Debug for BindValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindValue::Null => f.write_str("NULL"),
            BindValue::Bool(v) => write!(f, "{v}"),
            BindValue::Integer(v) => write!(f, "{v}"),
            BindValue::Float(v) => write!(f, "{v:?}"),
            BindValue::Text(v) => write!(f, "{v:?}"),
            BindValue::Date(v) => write!(f, "{v}"),
            BindValue::Timestamp(v) => write!(f, "{v}"),
            BindValue::Binary(v) => write!(f, "<{} bytes of binary data>", v.len()),
        }
    }
}

impl From<bool> for BindValue {
    fn from(v: bool) -> Self {
        BindValue::Bool(v)
    }
}

impl From<i32> for BindValue {
    fn from(v: i32) -> Self {
        BindValue::Integer(v.into())
    }
}

impl From<i64> for BindValue {
    fn from(v: i64) -> Self {
        BindValue::Integer(v)
    }
}

impl From<f64> for BindValue {
    fn from(v: f64) -> Self {
        BindValue::Float(v)
    }
}

impl From<&str> for BindValue {
    fn from(v: &str) -> Self {
        BindValue::Text(v.to_string())
    }
}

impl From<String> for BindValue {
    fn from(v: String) -> Self {
        BindValue::Text(v)
    }
}

impl From<NaiveDate> for BindValue {
    fn from(v: NaiveDate) -> Self {
        BindValue::Date(v)
    }
}

impl From<NaiveDateTime> for BindValue {
    fn from(v: NaiveDateTime) -> Self {
        BindValue::Timestamp(v)
    }
}

impl From<Vec<u8>> for BindValue {
    fn from(v: Vec<u8>) -> Self {
        BindValue::Binary(v)
    }
}

impl<T: Into<BindValue>> From<Option<T>> for BindValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(BindValue::Null, Into::into)
    }
}

/// One `(name, value)` pair from a notification's parameter list.
#[derive(Debug, Clone, PartialEq)]
pub struct BindParam {
    pub name: String,
    pub value: BindValue,
}

impl BindParam {
    pub fn new(name: impl Into<String>, value: impl Into<BindValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered mapping from parameter name to value.
///
/// Keeps insertion order. Inserting a name that is already present replaces
/// its value in place, so the name keeps its first position.
#[derive(Clone, Default, PartialEq)]
pub struct Binds {
    entries: Vec<(String, BindValue)>,
}

impl Binds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<BindValue>) {
        let name = name.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&BindValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BindValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for Binds
where
    K: Into<String>,
    V: Into<BindValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut binds = Binds::new();
        for (name, value) in iter {
            binds.insert(name, value);
        }
        binds
    }
}

impl From<&[BindParam]> for Binds {
    fn from(params: &[BindParam]) -> Self {
        params
            .iter()
            .map(|p| (p.name.clone(), p.value.clone()))
            .collect()
    }
}

impl fmt::Debug for Binds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(n, v)| (n, v)))
            .finish()
    }
}

impl Serialize for Binds {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
