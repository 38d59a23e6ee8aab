//! Compilation of a [`SprinklesConfig`] into class and variable bindings.
//!
//! Compilation runs once, ahead of any resolution:
//!
//! 1. **Dynamic pass**: every dynamic property gets one class and one CSS
//!    variable per condition ([`compile_dynamic`])
//! 2. **Static pass**: every static property gets one class per condition
//!    and enumerated value ([`compile_static`])
//! 3. **Merge**: both passes are merged into one [`CompiledProperty`] per
//!    property, static entries applied last ([`merge_properties`])
//! 4. **Shorthands**: each shorthand is expanded to its ordered property
//!    list ([`expand_shorthands`])
//!
//! The result is a [`CompiledConfig`], which is immutable and serializable.
//! Whatever writes the stylesheet consumes it through
//! [`CompiledConfig::rules`]; the resolver reads it on every call.

mod dynamic;
mod entry;
mod ident;
mod merge;
mod rules;
mod statics;

pub use dynamic::compile_dynamic;
pub use entry::{Binding, CompiledProperty, ConditionEntry, StaticClass, VariableBinding};
pub use ident::{sanitize, IdentAllocator};
pub use merge::{expand_shorthands, merge_properties};
pub use rules::StyleRule;
pub use statics::compile_static;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::{ConditionSpec, ConfigError, SprinklesConfig};

/// The compiled form of a [`SprinklesConfig`].
///
/// Built once with [`CompiledConfig::build`] and never mutated afterwards.
/// It serializes to JSON or YAML so it can be produced at build time and
/// loaded back by the code that resolves props; identifiers are the same
/// on every compilation of the same config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledConfig {
    /// Condition applied to bare scalar values.
    pub default_condition: String,

    /// Condition name to scoping descriptor, in priority order.
    pub conditions: IndexMap<String, ConditionSpec>,

    /// Property name to its merged descriptor.
    pub properties: IndexMap<String, CompiledProperty>,

    /// Shorthand name to the properties it expands to, in application order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub shorthands: IndexMap<String, Vec<String>>,
}

impl CompiledConfig {
    /// Validates and compiles a config.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the config is structurally invalid; see
    /// [`SprinklesConfig::validate`].
    pub fn build(config: &SprinklesConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut idents = IdentAllocator::new(config.class_prefix.as_deref());

        let dynamic: IndexMap<String, CompiledProperty> = config
            .dynamic_properties
            .iter()
            .map(|(name, scale)| {
                let compiled = compile_dynamic(name, scale, &config.conditions, &mut idents);
                (name.clone(), compiled)
            })
            .collect();

        let statics: IndexMap<String, CompiledProperty> = config
            .static_properties
            .iter()
            .map(|(name, scale)| {
                let compiled = compile_static(name, scale, &config.conditions, &mut idents);
                (name.clone(), compiled)
            })
            .collect();

        let properties = merge_properties(dynamic, statics);
        let shorthands = expand_shorthands(&config.shorthands, |name| {
            properties.contains_key(name)
        })?;

        tracing::debug!(
            properties = properties.len(),
            shorthands = shorthands.len(),
            conditions = config.conditions.len(),
            identifiers = idents.len(),
            "compiled sprinkles config"
        );

        Ok(Self {
            default_condition: config.default_condition.clone(),
            conditions: config.conditions.clone(),
            properties,
            shorthands,
        })
    }

    /// Returns the descriptors a prop name applies, in application order.
    ///
    /// A property yields its own descriptor; a shorthand yields the
    /// descriptors of the properties it expands to. Returns `None` for
    /// names that aren't configured.
    pub fn lookup<'a>(
        &'a self,
        name: &str,
    ) -> Option<impl Iterator<Item = &'a CompiledProperty> + 'a> {
        let targets: &'a [String] = match self.properties.get_key_value(name) {
            Some((key, _)) => std::slice::from_ref(key),
            None => self.shorthands.get(name)?.as_slice(),
        };
        Some(targets.iter().filter_map(move |target| self.properties.get(target)))
    }

    /// Returns the descriptor of a property (not a shorthand).
    pub fn property(&self, name: &str) -> Option<&CompiledProperty> {
        self.properties.get(name)
    }

    /// Whether `name` is a configured property or shorthand.
    pub fn is_configured(&self, name: &str) -> bool {
        self.properties.contains_key(name) || self.shorthands.contains_key(name)
    }

    /// Every configured prop name: properties first, then shorthands.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties
            .keys()
            .chain(self.shorthands.keys())
            .map(String::as_str)
    }

    /// Serializes the compiled config to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Loads a compiled config written by [`to_json`](Self::to_json).
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DynamicScale;

    fn config() -> SprinklesConfig {
        SprinklesConfig::new("default")
            .condition("default", ConditionSpec::new())
            .condition("hover", ConditionSpec::new().selector("&:hover"))
            .dynamic("color", DynamicScale::Unrestricted)
            .dynamic("paddingLeft", DynamicScale::Unrestricted)
            .dynamic("paddingRight", DynamicScale::Unrestricted)
            .static_values("display", ["block", "flex"])
            .shorthand("px", ["paddingLeft", "paddingRight"])
            .shorthand("spacing", ["px", "color"])
    }

    #[test]
    fn test_build_compiles_all_properties() {
        let compiled = CompiledConfig::build(&config()).unwrap();
        let names: Vec<&str> = compiled.properties.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["color", "paddingLeft", "paddingRight", "display"]);
        assert_eq!(compiled.default_condition, "default");
        assert_eq!(compiled.shorthands["spacing"], vec!["paddingLeft", "paddingRight", "color"]);
    }

    #[test]
    fn test_build_rejects_invalid_config() {
        let config = config().shorthand("broken", ["margin"]);
        assert!(matches!(
            CompiledConfig::build(&config),
            Err(ConfigError::UnknownShorthandTarget { .. })
        ));
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = CompiledConfig::build(&config()).unwrap();
        let b = CompiledConfig::build(&config()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
    }

    #[test]
    fn test_lookup_property_and_shorthand() {
        let compiled = CompiledConfig::build(&config()).unwrap();

        let color: Vec<&str> = compiled
            .lookup("color")
            .unwrap()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(color, vec!["color"]);

        let px: Vec<&str> = compiled
            .lookup("px")
            .unwrap()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(px, vec!["paddingLeft", "paddingRight"]);

        assert!(compiled.lookup("margin").is_none());
    }

    #[test]
    fn test_property_names() {
        let compiled = CompiledConfig::build(&config()).unwrap();
        let names: Vec<&str> = compiled.property_names().collect();
        assert_eq!(
            names,
            vec!["color", "paddingLeft", "paddingRight", "display", "px", "spacing"]
        );
        assert!(compiled.is_configured("px"));
        assert!(!compiled.is_configured("onClick"));
    }

    #[test]
    fn test_json_round_trip() {
        let compiled = CompiledConfig::build(&config()).unwrap();
        let json = compiled.to_json().unwrap();
        assert_eq!(CompiledConfig::from_json(&json).unwrap(), compiled);
    }

    #[test]
    fn test_class_prefix_applies_to_all_identifiers() {
        let compiled = CompiledConfig::build(&config().class_prefix("rs-")).unwrap();
        let binding = compiled.properties["color"].conditions["hover"]
            .dynamic
            .as_ref()
            .unwrap();
        assert_eq!(binding.class_name, "rs-color-hover");
        assert_eq!(binding.var_name, "--rs-color-hover");
        assert_eq!(
            compiled.properties["display"].conditions["default"].statics["flex"].class_name,
            "rs-display-default-flex"
        );
    }
}
