//! Sprinkles configuration.
//!
//! This module provides the declarative input of the compiler:
//!
//! - [`SprinklesConfig`]: properties, their scales, conditions and shorthands
//! - [`DynamicScale`] / [`StaticScale`]: the values a property accepts
//! - [`ConditionSpec`]: how a condition scopes its rules
//! - [`ConfigError`]: errors raised while validating or loading a config
//!
//! A config can be assembled with the builder methods or deserialized from
//! JSON or YAML using the camelCase schema:
//!
//! ```yaml
//! conditions:
//!   mobile: {}
//!   desktop:
//!     "@media": "screen and (min-width: 1024px)"
//! defaultCondition: mobile
//! dynamicProperties:
//!   color: true
//!   padding:
//!     "1x": "var(--space-1x)"
//! staticProperties:
//!   display: [block, flex]
//! shorthands:
//!   p: [padding]
//! ```

mod condition;
mod error;
mod load;
mod scale;

pub use condition::ConditionSpec;
pub use error::ConfigError;
pub use scale::{DynamicScale, StaticScale, ALIAS_PREFIX};

pub(crate) use scale::{format_number, Literal};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::compile::expand_shorthands;

/// Declarative description of the sprinkles to compile.
///
/// Maps keep their insertion order: conditions are emitted and resolved in
/// the order they are declared, and properties keep document order in the
/// compiled output.
///
/// # Example
///
/// ```rust
/// use rainbow_sprinkles::{ConditionSpec, DynamicScale, SprinklesConfig};
///
/// let config = SprinklesConfig::new("mobile")
///     .condition("mobile", ConditionSpec::new())
///     .condition("desktop", ConditionSpec::new().media("(min-width: 1024px)"))
///     .dynamic("color", DynamicScale::Unrestricted)
///     .static_values("display", ["block", "flex"])
///     .shorthand("bg", ["color"]);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprinklesConfig {
    /// Condition name to scoping descriptor, in priority order.
    pub conditions: IndexMap<String, ConditionSpec>,

    /// Condition applied to bare scalar prop values.
    pub default_condition: String,

    /// Properties whose value is injected through a CSS variable.
    pub dynamic_properties: IndexMap<String, DynamicScale>,

    /// Properties whose values are each baked into a class.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub static_properties: IndexMap<String, StaticScale>,

    /// Alias name to the ordered properties (or shorthands) it sets.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub shorthands: IndexMap<String, Vec<String>>,

    /// Namespace prepended to every generated class and variable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_prefix: Option<String>,
}

impl SprinklesConfig {
    /// Creates an empty config with the given default condition.
    ///
    /// The default condition still has to be added with [`condition`](Self::condition).
    pub fn new(default_condition: impl Into<String>) -> Self {
        Self {
            conditions: IndexMap::new(),
            default_condition: default_condition.into(),
            dynamic_properties: IndexMap::new(),
            static_properties: IndexMap::new(),
            shorthands: IndexMap::new(),
            class_prefix: None,
        }
    }

    /// Adds a condition. Conditions are ordered by insertion.
    pub fn condition(mut self, name: impl Into<String>, spec: ConditionSpec) -> Self {
        self.conditions.insert(name.into(), spec);
        self
    }

    /// Adds a dynamic property.
    pub fn dynamic(mut self, name: impl Into<String>, scale: DynamicScale) -> Self {
        self.dynamic_properties.insert(name.into(), scale);
        self
    }

    /// Adds a static property with a scale of literal values.
    pub fn static_values<V: Into<String>>(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.static_properties
            .insert(name.into(), StaticScale::values(values));
        self
    }

    /// Adds a static property with a scale of `(alias, value)` pairs.
    pub fn static_aliases<K, V>(
        mut self,
        name: impl Into<String>,
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.static_properties
            .insert(name.into(), StaticScale::aliases(pairs));
        self
    }

    /// Adds a shorthand expanding to `targets`, applied in order.
    pub fn shorthand<T: Into<String>>(
        mut self,
        name: impl Into<String>,
        targets: impl IntoIterator<Item = T>,
    ) -> Self {
        self.shorthands
            .insert(name.into(), targets.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the namespace prepended to generated identifiers.
    pub fn class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Whether `name` is a dynamic or static property.
    pub fn is_property(&self, name: &str) -> bool {
        self.dynamic_properties.contains_key(name) || self.static_properties.contains_key(name)
    }

    /// Every configured name a prop may use: properties first, then shorthands.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.dynamic_properties
            .keys()
            .chain(
                self.static_properties
                    .keys()
                    .filter(|name| !self.dynamic_properties.contains_key(*name)),
            )
            .chain(self.shorthands.keys())
            .map(String::as_str)
    }

    /// Checks the config for structural mistakes.
    ///
    /// This is called automatically when a config is compiled, but can be
    /// called explicitly for early error detection.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NoConditions`] if no condition is configured
    /// - [`ConfigError::UnknownDefaultCondition`] if the default isn't a condition
    /// - [`ConfigError::ShorthandShadowsProperty`] if a shorthand reuses a property name
    /// - [`ConfigError::UnknownShorthandTarget`] if a shorthand lists an undefined name
    /// - [`ConfigError::ShorthandCycle`] if shorthands expand into each other
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.conditions.is_empty() {
            return Err(ConfigError::NoConditions);
        }

        if !self.conditions.contains_key(&self.default_condition) {
            return Err(ConfigError::UnknownDefaultCondition {
                name: self.default_condition.clone(),
            });
        }

        if let Some(name) = self.shorthands.keys().find(|name| self.is_property(name)) {
            return Err(ConfigError::ShorthandShadowsProperty { name: name.clone() });
        }

        expand_shorthands(&self.shorthands, |name| self.is_property(name))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> SprinklesConfig {
        SprinklesConfig::new("mobile")
            .condition("mobile", ConditionSpec::new())
            .condition("desktop", ConditionSpec::new().media("(min-width: 1024px)"))
            .dynamic("paddingLeft", DynamicScale::Unrestricted)
            .dynamic("paddingRight", DynamicScale::Unrestricted)
            .static_values("display", ["block", "flex"])
    }

    #[test]
    fn test_valid_config() {
        let config = base()
            .shorthand("px", ["paddingLeft", "paddingRight"])
            .shorthand("layout", ["px", "display"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_no_conditions() {
        let config = SprinklesConfig::new("mobile").dynamic("color", DynamicScale::Unrestricted);
        assert_eq!(config.validate(), Err(ConfigError::NoConditions));
    }

    #[test]
    fn test_unknown_default_condition() {
        let config = SprinklesConfig::new("tablet").condition("mobile", ConditionSpec::new());
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnknownDefaultCondition {
                name: "tablet".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_shorthand_target() {
        let config = base().shorthand("py", ["paddingTop"]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnknownShorthandTarget {
                shorthand: "py".to_string(),
                target: "paddingTop".to_string(),
            })
        );
    }

    #[test]
    fn test_shorthand_cycle() {
        let config = base().shorthand("a", ["b"]).shorthand("b", ["a"]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ShorthandCycle { .. })
        ));
    }

    #[test]
    fn test_shorthand_shadowing_property() {
        let config = base().shorthand("display", ["paddingLeft"]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ShorthandShadowsProperty {
                name: "display".to_string()
            })
        );
    }

    #[test]
    fn test_property_names_are_unique() {
        let config = base()
            .static_values("paddingLeft", ["0"])
            .shorthand("px", ["paddingLeft", "paddingRight"]);
        let names: Vec<&str> = config.property_names().collect();
        assert_eq!(names, vec!["paddingLeft", "paddingRight", "display", "px"]);
    }

    #[test]
    fn test_condition_order_follows_insertion() {
        let config = base().condition("hover", ConditionSpec::new().selector("&:hover"));
        let order: Vec<&str> = config.conditions.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["mobile", "desktop", "hover"]);
    }
}
