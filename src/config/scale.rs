//! Property scales: the values a property accepts.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Prefix marking a scale alias inside a prop value (`"$space2"`).
pub const ALIAS_PREFIX: char = '$';

/// Scale of a dynamic property, whose value is injected through a CSS variable.
///
/// Serialized as `true` for an unrestricted property, or as a map from alias
/// to token reference:
///
/// ```yaml
/// color: true
/// padding:
///   "1x": "var(--space-1x)"
///   "2x": "var(--space-2x)"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDynamicScale", into = "RawDynamicScale")]
pub enum DynamicScale {
    /// Any CSS value is accepted as-is.
    Unrestricted,
    /// `$alias` references are translated to their token before injection.
    Tokens(IndexMap<String, String>),
}

impl DynamicScale {
    /// Builds a token scale from `(alias, token)` pairs.
    pub fn tokens<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        DynamicScale::Tokens(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns the alias to token map, if any.
    pub fn token_map(&self) -> Option<&IndexMap<String, String>> {
        match self {
            DynamicScale::Unrestricted => None,
            DynamicScale::Tokens(tokens) => Some(tokens),
        }
    }
}

/// Scale of a static property, whose values are each baked into a class.
///
/// ```yaml
/// display: [block, flex]
/// gap:
///   small: 4px
///   large: 16px
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawStaticScale", into = "RawStaticScale")]
pub enum StaticScale {
    /// Literal allowed values, matched verbatim at resolution.
    Values(Vec<String>),
    /// Alias to literal value, matched as `$alias` at resolution.
    Aliases(IndexMap<String, String>),
}

impl StaticScale {
    /// Builds a scale of literal values.
    pub fn values<V: Into<String>>(values: impl IntoIterator<Item = V>) -> Self {
        StaticScale::Values(values.into_iter().map(Into::into).collect())
    }

    /// Builds a scale of `(alias, value)` pairs.
    pub fn aliases<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        StaticScale::Aliases(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns `(lookup key, css value)` for every enumerated value.
    ///
    /// The lookup key is what a prop value must equal to select the class:
    /// the literal itself for arrays, `$alias` for alias maps.
    pub fn entries(&self) -> Vec<(String, &str)> {
        match self {
            StaticScale::Values(values) => {
                values.iter().map(|v| (v.clone(), v.as_str())).collect()
            }
            StaticScale::Aliases(aliases) => aliases
                .iter()
                .map(|(alias, v)| (format!("{ALIAS_PREFIX}{alias}"), v.as_str()))
                .collect(),
        }
    }

    /// Number of enumerated values.
    pub fn len(&self) -> usize {
        match self {
            StaticScale::Values(values) => values.len(),
            StaticScale::Aliases(aliases) => aliases.len(),
        }
    }

    /// Whether the scale enumerates nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A scalar written in a config or prop: a string or a number.
///
/// Numbers are kept in the text form a JSON number prints as, so `4`
/// and `4.0` both become `"4"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawLiteral", into = "String")]
pub(crate) struct Literal(pub(crate) String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLiteral {
    Str(String),
    Int(i64),
    Float(f64),
}

impl From<RawLiteral> for Literal {
    fn from(raw: RawLiteral) -> Self {
        match raw {
            RawLiteral::Str(s) => Literal(s),
            RawLiteral::Int(n) => Literal(n.to_string()),
            RawLiteral::Float(n) => Literal(format_number(n)),
        }
    }
}

impl From<Literal> for String {
    fn from(literal: Literal) -> Self {
        literal.0
    }
}

/// Formats a float the way it reads in a stylesheet (`4.0` prints as `4`).
pub(crate) fn format_number(n: f64) -> String {
    format!("{}", n)
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawDynamicScale {
    Flag(bool),
    Marker(String),
    Tokens(IndexMap<String, Literal>),
}

impl TryFrom<RawDynamicScale> for DynamicScale {
    type Error = String;

    fn try_from(raw: RawDynamicScale) -> Result<Self, Self::Error> {
        match raw {
            RawDynamicScale::Flag(true) => Ok(DynamicScale::Unrestricted),
            RawDynamicScale::Marker(marker) if marker == "unrestricted" => {
                Ok(DynamicScale::Unrestricted)
            }
            RawDynamicScale::Flag(false) => {
                Err("dynamic scale must be `true` or a map of tokens, found `false`".to_string())
            }
            RawDynamicScale::Marker(other) => Err(format!(
                "dynamic scale must be `true`, \"unrestricted\" or a map of tokens, found \"{}\"",
                other
            )),
            RawDynamicScale::Tokens(tokens) => Ok(DynamicScale::Tokens(
                tokens.into_iter().map(|(k, v)| (k, v.0)).collect(),
            )),
        }
    }
}

impl From<DynamicScale> for RawDynamicScale {
    fn from(scale: DynamicScale) -> Self {
        match scale {
            DynamicScale::Unrestricted => RawDynamicScale::Flag(true),
            DynamicScale::Tokens(tokens) => {
                RawDynamicScale::Tokens(tokens.into_iter().map(|(k, v)| (k, Literal(v))).collect())
            }
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawStaticScale {
    Values(Vec<Literal>),
    Aliases(IndexMap<String, Literal>),
}

impl From<RawStaticScale> for StaticScale {
    fn from(raw: RawStaticScale) -> Self {
        match raw {
            RawStaticScale::Values(values) => {
                StaticScale::Values(values.into_iter().map(|v| v.0).collect())
            }
            RawStaticScale::Aliases(aliases) => {
                StaticScale::Aliases(aliases.into_iter().map(|(k, v)| (k, v.0)).collect())
            }
        }
    }
}

impl From<StaticScale> for RawStaticScale {
    fn from(scale: StaticScale) -> Self {
        match scale {
            StaticScale::Values(values) => {
                RawStaticScale::Values(values.into_iter().map(Literal).collect())
            }
            StaticScale::Aliases(aliases) => {
                RawStaticScale::Aliases(aliases.into_iter().map(|(k, v)| (k, Literal(v))).collect())
            }
        }
    }
}
