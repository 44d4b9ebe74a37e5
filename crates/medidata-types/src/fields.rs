use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single displayable card value.
///
/// Numbers keep their JSON representation so `68` is shown as `68`, not `68.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(text) => write!(f, "{}", text),
            Scalar::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(n.into())
    }
}

impl From<u64> for Scalar {
    fn from(n: u64) -> Self {
        Scalar::Number(n.into())
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Number(n.into())
    }
}

impl From<f64> for Scalar {
    /// Non-finite values have no JSON number form and fall back to text.
    fn from(n: f64) -> Self {
        serde_json::Number::from_f64(n)
            .map(Scalar::Number)
            .unwrap_or_else(|| Scalar::Text(n.to_string()))
    }
}

/// Value stored under a card field: either a scalar or another level of fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Scalar(Scalar),
    Nested(FieldMap),
}

impl FieldValue {
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            FieldValue::Scalar(s) => Some(s),
            FieldValue::Nested(_) => None,
        }
    }

    pub fn as_nested(&self) -> Option<&FieldMap> {
        match self {
            FieldValue::Scalar(_) => None,
            FieldValue::Nested(map) => Some(map),
        }
    }
}

macro_rules! scalar_field_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    FieldValue::Scalar(value.into())
                }
            }
        )*
    };
}

scalar_field_value!(&str, String, i32, i64, u64, f64);

impl From<Scalar> for FieldValue {
    fn from(value: Scalar) -> Self {
        FieldValue::Scalar(value)
    }
}

impl From<FieldMap> for FieldValue {
    fn from(map: FieldMap) -> Self {
        FieldValue::Nested(map)
    }
}

/// Ordered field name -> value mapping.
///
/// Iteration follows insertion order. Re-inserting an existing key replaces
/// the value but keeps the key's original position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap(IndexMap<String, FieldValue>);

/// Borrowing iterator over a [`FieldMap`] in insertion order.
pub type FieldIter<'a> = indexmap::map::Iter<'a, String, FieldValue>;

impl FieldMap {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Builder-style insert, handy for literals in code and tests.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Option<FieldValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> FieldIter<'_> {
        self.0.iter()
    }

    /// Number of map levels, counting this one. An empty map has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 1;
        let mut stack: Vec<(&FieldMap, usize)> = vec![(self, 1)];
        while let Some((map, level)) = stack.pop() {
            deepest = deepest.max(level);
            for value in map.0.values() {
                if let FieldValue::Nested(child) = value {
                    stack.push((child, level + 1));
                }
            }
        }
        deepest
    }

    /// Total number of scalar values at any depth.
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(map) = stack.pop() {
            for value in map.0.values() {
                match value {
                    FieldValue::Scalar(_) => count += 1,
                    FieldValue::Nested(child) => stack.push(child),
                }
            }
        }
        count
    }
}

impl<'a> IntoIterator for &'a FieldMap {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = FieldIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMap
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}
