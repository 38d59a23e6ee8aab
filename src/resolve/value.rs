//! Runtime prop values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::config::format_number;

/// The value a caller passes for one sprinkle prop.
///
/// A bare value applies under the default condition only. A conditional
/// value applies under exactly the conditions it names; there is no
/// fallback to the default condition for the others.
///
/// ```rust
/// use rainbow_sprinkles::PropValue;
///
/// let plain = PropValue::from("red");
/// let responsive = PropValue::conditional([("mobile", "block"), ("desktop", "flex")]);
/// let spacing = PropValue::from(4);
/// # let _ = (plain, responsive, spacing);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub enum PropValue {
    /// Applies under the default condition.
    Value(String),
    /// Condition name to value.
    Conditional(IndexMap<String, String>),
}

impl PropValue {
    /// Builds a conditional value from `(condition, value)` pairs.
    pub fn conditional<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        PropValue::Conditional(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Converts a JSON value, as found in a props object.
    ///
    /// Strings and numbers become [`PropValue::Value`]; objects become
    /// [`PropValue::Conditional`], keeping only string and number entries.
    /// Anything else (booleans, null, arrays) has no sprinkle meaning and
    /// yields `None`.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Object(map) => Some(PropValue::Conditional(
                map.iter()
                    .filter_map(|(condition, v)| scalar_text(v).map(|v| (condition.clone(), v)))
                    .collect(),
            )),
            other => scalar_text(other).map(PropValue::Value),
        }
    }

    /// Pairs each value with the condition it applies under.
    pub fn by_condition<'a>(
        &'a self,
        default_condition: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        let (single, conditional) = match self {
            PropValue::Value(value) => (Some((default_condition, value.as_str())), None),
            PropValue::Conditional(map) => (None, Some(map)),
        };
        single.into_iter().chain(
            conditional
                .into_iter()
                .flat_map(|map| map.iter().map(|(c, v)| (c.as_str(), v.as_str()))),
        )
    }
}

fn scalar_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (None, Some(u), _) => u.to_string(),
            (None, None, Some(f)) => format_number(f),
            (None, None, None) => n.to_string(),
        }),
        _ => None,
    }
}

impl TryFrom<serde_json::Value> for PropValue {
    type Error = String;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        PropValue::from_json(&value)
            .ok_or_else(|| format!("expected a string, number or condition map, found {}", value))
    }
}

impl Serialize for PropValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropValue::Value(value) => serializer.serialize_str(value),
            PropValue::Conditional(map) => map.serialize(serializer),
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Value(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Value(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Value(value.to_string())
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Value(value.to_string())
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Value(format_number(value))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropValue {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        PropValue::conditional(iter)
    }
}
