//! The compiled-config bundle handed to render sites.

use std::borrow::Borrow;

use crate::compile::CompiledConfig;
use crate::config::{ConfigError, SprinklesConfig};
use crate::extract::{ExtractedProps, PropertySet};
use crate::resolve::{get_box_props, get_box_props_json, BoxProps, PropValue};

/// A compiled config together with the set of names it answers to.
///
/// Build one per configuration and share it by reference; it is immutable,
/// and every call allocates its own accumulators, so it can be used from
/// any number of threads at once. Separate configurations get separate
/// bundles and never see each other's names.
///
/// # Example
///
/// ```rust
/// use rainbow_sprinkles::{ConditionSpec, DynamicScale, PropValue, RainbowSprinkles, SprinklesConfig};
///
/// let config = SprinklesConfig::new("mobile")
///     .condition("mobile", ConditionSpec::new())
///     .condition("desktop", ConditionSpec::new().media("(min-width: 1024px)"))
///     .dynamic("color", DynamicScale::Unrestricted)
///     .static_values("display", ["block", "flex"]);
///
/// let sprinkles = RainbowSprinkles::new(&config).unwrap();
/// let resolved = sprinkles.get_box_props([
///     ("color", PropValue::from("red")),
///     ("display", PropValue::conditional([("desktop", "flex")])),
/// ]);
///
/// assert_eq!(resolved.class_name, "color-mobile display-desktop-flex");
/// ```
#[derive(Debug, Clone)]
pub struct RainbowSprinkles {
    compiled: CompiledConfig,
    properties: PropertySet,
}

impl RainbowSprinkles {
    /// Validates and compiles a config.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the config is structurally invalid.
    pub fn new(config: &SprinklesConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_compiled(CompiledConfig::build(config)?))
    }

    /// Wraps a config compiled elsewhere, e.g. loaded from a build artifact.
    pub fn from_compiled(compiled: CompiledConfig) -> Self {
        let properties = PropertySet::from_config(&compiled);
        Self {
            compiled,
            properties,
        }
    }

    /// The compiled config, for stylesheet emission or serialization.
    pub fn compiled(&self) -> &CompiledConfig {
        &self.compiled
    }

    /// Every property and shorthand name of this config.
    pub fn property_set(&self) -> &PropertySet {
        &self.properties
    }

    /// Resolves sprinkle props into a class name and inline variables.
    ///
    /// See [`get_box_props`] for the resolution rules.
    pub fn get_box_props<I, K, V>(&self, props: I) -> BoxProps
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Borrow<PropValue>,
    {
        get_box_props(&self.compiled, props)
    }

    /// Resolves a JSON props object.
    pub fn get_box_props_json(&self, props: &serde_json::Value) -> BoxProps {
        get_box_props_json(&self.compiled, props)
    }

    /// Splits props into sprinkle props and everything else.
    pub fn extract<K, V>(&self, props: impl IntoIterator<Item = (K, V)>) -> ExtractedProps<V>
    where
        K: Into<String>,
    {
        self.properties.extract(props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConditionSpec, DynamicScale};

    fn config(prefix: &str) -> SprinklesConfig {
        SprinklesConfig::new("base")
            .condition("base", ConditionSpec::new())
            .dynamic("color", DynamicScale::Unrestricted)
            .class_prefix(prefix)
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = SprinklesConfig::new("base").dynamic("color", DynamicScale::Unrestricted);
        assert!(RainbowSprinkles::new(&config).is_err());
    }

    #[test]
    fn test_independent_bundles_coexist() {
        let a = RainbowSprinkles::new(&config("a-")).unwrap();
        let b = RainbowSprinkles::new(
            &config("b-").dynamic("gap", DynamicScale::Unrestricted),
        )
        .unwrap();

        assert!(!a.property_set().contains("gap"));
        assert!(b.property_set().contains("gap"));

        let props = [("color", PropValue::from("red"))];
        assert_eq!(a.get_box_props(props.clone()).class_name, "a-color-base");
        assert_eq!(b.get_box_props(props.clone()).class_name, "b-color-base");
    }

    #[test]
    fn test_from_compiled_matches_new() {
        let direct = RainbowSprinkles::new(&config("x-")).unwrap();
        let json = direct.compiled().to_json().unwrap();
        let loaded = RainbowSprinkles::from_compiled(CompiledConfig::from_json(&json).unwrap());

        let props = [("color", PropValue::from("red"))];
        assert_eq!(direct.get_box_props(props.clone()), loaded.get_box_props(props.clone()));
        assert_eq!(direct.property_set(), loaded.property_set());
    }

    #[test]
    fn test_extract_uses_own_names() {
        let sprinkles = RainbowSprinkles::new(&config("")).unwrap();
        let split = sprinkles.extract([("color", 1), ("title", 2)]);
        assert!(split.sprinkle_props.contains_key("color"));
        assert!(split.other_props.contains_key("title"));
    }
}
