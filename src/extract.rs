//! Partitioning of arbitrary props into sprinkle and other props.

use indexmap::{IndexMap, IndexSet};

use crate::compile::CompiledConfig;

/// The names a props collection may use to address sprinkles: every
/// dynamic property, static property and shorthand of one config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySet {
    names: IndexSet<String>,
}

/// Props split by [`PropertySet::extract`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedProps<V> {
    /// Props whose name is a configured property or shorthand.
    pub sprinkle_props: IndexMap<String, V>,
    /// Everything else.
    pub other_props: IndexMap<String, V>,
}

impl<V> Default for ExtractedProps<V> {
    fn default() -> Self {
        Self {
            sprinkle_props: IndexMap::new(),
            other_props: IndexMap::new(),
        }
    }
}

impl PropertySet {
    /// Creates a set from explicit names.
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Collects every property and shorthand name of a compiled config.
    pub fn from_config(config: &CompiledConfig) -> Self {
        Self::new(config.property_names())
    }

    /// Whether `name` addresses a sprinkle.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of names in the set.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over the names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Splits `props` by name membership; values are never inspected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rainbow_sprinkles::PropertySet;
    ///
    /// let set = PropertySet::new(["color", "px"]);
    /// let split = set.extract([("color", 1), ("id", 2), ("px", 3)]);
    ///
    /// assert_eq!(split.sprinkle_props.len(), 2);
    /// assert_eq!(split.other_props["id"], 2);
    /// ```
    pub fn extract<K, V>(&self, props: impl IntoIterator<Item = (K, V)>) -> ExtractedProps<V>
    where
        K: Into<String>,
    {
        let mut extracted = ExtractedProps::default();
        for (name, value) in props {
            let name = name.into();
            if self.contains(&name) {
                extracted.sprinkle_props.insert(name, value);
            } else {
                extracted.other_props.insert(name, value);
            }
        }
        extracted
    }
}

impl<S: Into<String>> FromIterator<S> for PropertySet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}
